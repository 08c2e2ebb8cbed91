use std::sync::Mutex;

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers hold `ENV_LOCK` so no other test touches the environment.
unsafe fn clear_portal_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("PORTAL_API_BASE_URL");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_portal_env() };

    let cfg = PortalConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base, "http://localhost:8087/api");
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_portal_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("PORTAL_API_BASE_URL", "https://portal.example.org/api/");
    }

    let cfg = PortalConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_base, "https://portal.example.org/api");

    unsafe { clear_portal_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_portal_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = PortalConfig::from_env().unwrap_err();
    assert!(matches!(err, HostError::InvalidPort(ref v) if v == "eighty"));

    unsafe { clear_portal_env() };
}

#[test]
fn blank_port_means_default() {
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("65535")).unwrap(), 65535);
    assert!(parse_port(Some("70000")).is_err());
}
