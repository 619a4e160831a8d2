// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Service-account authentication for the spreadsheet API.
//!
//! A signed RS256 assertion is traded for a short-lived bearer token
//! (OAuth2 JWT-bearer grant). Tokens are reused until shortly before they
//! expire.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::CredentialSource;
use crate::errors::UpstreamError;

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: u64 = 3600;
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

fn default_expires_in() -> u64 {
    ASSERTION_LIFETIME_SECS
}

/// The fields of a service-account key file this crate needs.
#[derive(Deserialize, Clone)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: u64,
    pub exp: u64,
}

impl ServiceAccountKey {
    pub async fn load(path: &Path) -> Result<Self, UpstreamError> {
        let raw = tokio::fs::read(path)
            .await
            .map_err(|e| UpstreamError::Credentials {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        serde_json::from_slice(&raw).map_err(|e| UpstreamError::Credentials {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn claims(&self, now: u64) -> AssertionClaims {
        AssertionClaims {
            iss: self.client_email.clone(),
            scope: SHEETS_SCOPE.to_string(),
            aud: self.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        }
    }

    /// Signs the grant assertion with the account's private key.
    pub fn assertion(&self, now: u64) -> Result<String, UpstreamError> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.private_key_id.clone();
        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())?;
        Ok(jsonwebtoken::encode(&header, &self.claims(now), &key)?)
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

pub struct CachedToken {
    value: String,
    refresh_at: Instant,
}

pub enum TokenSource {
    Static(String),
    ServiceAccount {
        key_path: PathBuf,
        http: reqwest::Client,
        cached: Mutex<Option<CachedToken>>,
    },
}

impl fmt::Debug for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::Static(_) => f.write_str("TokenSource::Static(..)"),
            TokenSource::ServiceAccount { key_path, .. } => f
                .debug_struct("TokenSource::ServiceAccount")
                .field("key_path", key_path)
                .finish_non_exhaustive(),
        }
    }
}

impl TokenSource {
    pub fn service_account(key_path: impl Into<PathBuf>, http: reqwest::Client) -> Self {
        TokenSource::ServiceAccount {
            key_path: key_path.into(),
            http,
            cached: Mutex::new(None),
        }
    }

    pub fn from_config(source: &CredentialSource, http: reqwest::Client) -> Self {
        match source {
            CredentialSource::StaticToken(token) => TokenSource::Static(token.clone()),
            CredentialSource::ServiceAccountFile(path) => Self::service_account(path.clone(), http),
        }
    }

    /// A bearer token valid for at least the next minute.
    pub async fn bearer(&self) -> Result<String, UpstreamError> {
        match self {
            TokenSource::Static(token) => Ok(token.clone()),
            TokenSource::ServiceAccount {
                key_path,
                http,
                cached,
            } => {
                let mut guard = cached.lock().await;
                if let Some(token) = guard.as_ref().filter(|t| Instant::now() < t.refresh_at) {
                    return Ok(token.value.clone());
                }
                let fresh = exchange(key_path, http).await?;
                let value = fresh.value.clone();
                *guard = Some(fresh);
                Ok(value)
            }
        }
    }
}

async fn exchange(key_path: &Path, http: &reqwest::Client) -> Result<CachedToken, UpstreamError> {
    let key = ServiceAccountKey::load(key_path).await?;
    let assertion = key.assertion(jsonwebtoken::get_current_timestamp())?;

    tracing::debug!("Requesting access token for {}", key.client_email);
    let resp = http
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(UpstreamError::TokenExchange(format!("{}: {}", status, body)));
    }

    let token: TokenResponse = resp.json().await?;
    let lifetime = Duration::from_secs(token.expires_in).saturating_sub(REFRESH_MARGIN);
    Ok(CachedToken {
        value: token.access_token,
        refresh_at: Instant::now() + lifetime,
    })
}
