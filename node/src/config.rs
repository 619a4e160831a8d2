// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::fmt;
use std::path::PathBuf;

use sheetrow_kernel::range::SheetLayout;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_SPREADSHEET_ID: &str = "1VD9UaSO4wZRCBtP0V3Qn0b_eOWazjVcWozK6I50_zYk";
pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";
pub const DEFAULT_CREDENTIALS_PATH: &str = "privateSetting.json";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Where the upstream credentials come from.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Service-account key file, exchanged for short-lived access tokens.
    ServiceAccountFile(PathBuf),
    /// Pre-issued bearer token, used as is.
    StaticToken(String),
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::ServiceAccountFile(path) => {
                f.debug_tuple("ServiceAccountFile").field(path).finish()
            }
            CredentialSource::StaticToken(_) => f.write_str("StaticToken(<redacted>)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub api_base: String,
    pub layout: SheetLayout,
    pub credentials: CredentialSource,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: DEFAULT_SPREADSHEET_ID.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            layout: SheetLayout::default(),
            credentials: CredentialSource::ServiceAccountFile(PathBuf::from(
                DEFAULT_CREDENTIALS_PATH,
            )),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NodeConfig {
    pub host: String,
    pub port: u16,
    pub public_dir: PathBuf,
    pub sheets: SheetsConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            sheets: SheetsConfig::default(),
        }
    }
}

impl NodeConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`NodeConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(port) = lookup("PORT") {
            cfg.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: port.clone(),
            })?;
        }
        if let Some(dir) = lookup("SHEETROW_PUBLIC_DIR") {
            cfg.public_dir = PathBuf::from(dir);
        }
        if let Some(id) = lookup("SHEETROW_SPREADSHEET_ID") {
            cfg.sheets.spreadsheet_id = id;
        }
        if let Some(base) = lookup("SHEETROW_API_BASE") {
            cfg.sheets.api_base = base;
        }
        if let Some(path) = lookup("SHEETROW_CREDENTIALS") {
            cfg.sheets.credentials = CredentialSource::ServiceAccountFile(PathBuf::from(path));
        }
        // A static token wins over any key file
        if let Some(token) = lookup("SHEETROW_ACCESS_TOKEN").filter(|t| !t.is_empty()) {
            cfg.sheets.credentials = CredentialSource::StaticToken(token);
        }

        Ok(cfg)
    }

    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
