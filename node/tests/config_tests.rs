use std::collections::HashMap;
use std::path::PathBuf;

use sheetrow_node::config::{ConfigError, CredentialSource, NodeConfig, DEFAULT_SPREADSHEET_ID};

fn from_vars(vars: &[(&str, &str)]) -> Result<NodeConfig, ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    NodeConfig::from_lookup(|var| map.get(var).cloned())
}

#[test]
fn test_defaults() {
    let cfg = from_vars(&[]).unwrap();
    assert_eq!(cfg.bind_target(), ("localhost", 3000));
    assert_eq!(cfg.public_dir, PathBuf::from("public"));
    assert_eq!(cfg.sheets.spreadsheet_id, DEFAULT_SPREADSHEET_ID);
    assert_eq!(cfg.sheets.api_base, "https://sheets.googleapis.com");
    assert_eq!(cfg.sheets.layout.sheet_name, "Sheet1");
    assert_eq!(cfg.sheets.layout.sheet_id, 0);
    assert_eq!(
        cfg.sheets.credentials,
        CredentialSource::ServiceAccountFile(PathBuf::from("privateSetting.json"))
    );
}

#[test]
fn test_port_from_env() {
    let cfg = from_vars(&[("PORT", "8080")]).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.host, "localhost");
}

#[test]
fn test_invalid_port_is_rejected() {
    match from_vars(&[("PORT", "eighty")]) {
        Err(ConfigError::Invalid { var, value }) => {
            assert_eq!(var, "PORT");
            assert_eq!(value, "eighty");
        }
        other => panic!("Expected invalid PORT, got {:?}", other),
    }
}

#[test]
fn test_overrides() {
    let cfg = from_vars(&[
        ("SHEETROW_SPREADSHEET_ID", "abc"),
        ("SHEETROW_API_BASE", "http://127.0.0.1:9999"),
        ("SHEETROW_PUBLIC_DIR", "/srv/www"),
        ("SHEETROW_CREDENTIALS", "/etc/sheetrow/key.json"),
    ])
    .unwrap();
    assert_eq!(cfg.sheets.spreadsheet_id, "abc");
    assert_eq!(cfg.sheets.api_base, "http://127.0.0.1:9999");
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/www"));
    assert_eq!(
        cfg.sheets.credentials,
        CredentialSource::ServiceAccountFile(PathBuf::from("/etc/sheetrow/key.json"))
    );
}

#[test]
fn test_static_token_wins_over_key_file() {
    let cfg = from_vars(&[
        ("SHEETROW_CREDENTIALS", "/etc/sheetrow/key.json"),
        ("SHEETROW_ACCESS_TOKEN", "ya29.token"),
    ])
    .unwrap();
    assert_eq!(
        cfg.sheets.credentials,
        CredentialSource::StaticToken("ya29.token".into())
    );

    // Empty token is ignored
    let cfg = from_vars(&[("SHEETROW_ACCESS_TOKEN", "")]).unwrap();
    assert!(matches!(
        cfg.sheets.credentials,
        CredentialSource::ServiceAccountFile(_)
    ));
}
