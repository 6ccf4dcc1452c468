use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rstest::rstest;
use timetable_api::config::ApiConfig;
use tracing::Level;

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<ApiConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    ApiConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[("DATABASE_URL", "postgres://localhost/timetable")]).unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 5000);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.session_ttl_hours, 24);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.server_addr(), "0.0.0.0:5000");
    assert_eq!(config.session_ttl(), chrono::Duration::hours(24));
}

#[test]
fn test_database_url_is_required() {
    let err = config_from(&[]).unwrap_err();
    assert!(err.to_string().contains("DATABASE_URL"));
}

#[test]
fn test_overrides() {
    let config = config_from(&[
        ("DATABASE_URL", "postgres://db/timetable"),
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("LOG_LEVEL", "DEBUG"),
        ("API_CORS_ORIGINS", "http://localhost:3000, https://school.example ,"),
        ("SESSION_TTL_HOURS", "2"),
        ("API_REQUEST_TIMEOUT_SECONDS", "5"),
    ])
    .unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec![
            "http://localhost:3000".to_string(),
            "https://school.example".to_string()
        ])
    );
    assert_eq!(config.session_ttl(), chrono::Duration::hours(2));
    assert_eq!(config.request_timeout, 5);
}

#[rstest]
#[case("API_PORT", "not-a-port")]
#[case("API_PORT", "70000")]
#[case("SESSION_TTL_HOURS", "a day")]
#[case("SESSION_TTL_HOURS", "0")]
#[case("SESSION_TTL_HOURS", "-5")]
#[case("SESSION_TTL_HOURS", "9999999999999")]
fn test_invalid_numbers_are_rejected(#[case] key: &str, #[case] value: &str) {
    let result = config_from(&[("DATABASE_URL", "postgres://db"), (key, value)]);
    assert!(result.is_err());
}

#[test]
fn test_unparseable_timeout_falls_back() {
    let config = config_from(&[
        ("DATABASE_URL", "postgres://db"),
        ("API_REQUEST_TIMEOUT_SECONDS", "soon"),
        ("LOG_LEVEL", "verbose"),
    ])
    .unwrap();
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_session_ttl_bounds() {
    let config = config_from(&[("DATABASE_URL", "postgres://db"), ("SESSION_TTL_HOURS", "8760")]).unwrap();
    assert_eq!(config.session_ttl(), chrono::Duration::hours(8760));

    let err = config_from(&[("DATABASE_URL", "postgres://db"), ("SESSION_TTL_HOURS", "8761")]).unwrap_err();
    assert!(err.to_string().contains("SESSION_TTL_HOURS must be between 1 and 8760"));
}
