use std::sync::Mutex;

use super::*;

/// Serializes tests that mutate process env.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK`.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("FORUM_API_BASE_URL");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_host_env() };

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api, ApiConfig::default());
    assert_eq!(cfg.api.topics_url(), "http://localhost:8000/api/v1/topics/");
}

#[test]
fn from_env_reads_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("FORUM_API_BASE_URL", "https://forum.example.test/api/v1/");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api.topics_url(), "https://forum.example.test/api/v1/topics/");

    unsafe { clear_host_env() };
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "eighty"));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_api_treats_blank_as_default() {
    assert_eq!(parse_api(Some("   ")), ApiConfig::default());
    assert_eq!(parse_api(None), ApiConfig::default());
}
