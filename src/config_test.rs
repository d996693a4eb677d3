use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_uses_gopanel_storage_keys() {
    let cfg = SessionConfig::default();
    assert_eq!(cfg.token_key, "gp_token");
    assert_eq!(cfg.name_key, "gp_user");
}

#[test]
fn default_display_name_is_admin() {
    assert_eq!(SessionConfig::default().default_display_name, "admin");
}

#[test]
fn default_login_path() {
    assert_eq!(SessionConfig::default().login_path, DEFAULT_LOGIN_PATH);
}

// =============================================================
// api_url
// =============================================================

#[test]
fn api_url_joins_with_single_slash() {
    let cfg = SessionConfig::default();
    assert_eq!(cfg.api_url("/login"), "/api/login");
    assert_eq!(cfg.api_url("login"), "/api/login");
}

#[test]
fn api_url_handles_trailing_slash_in_base() {
    let cfg = SessionConfig { api_base: "http://localhost:1080/api/".to_owned(), ..SessionConfig::default() };
    assert_eq!(cfg.api_url("/metrics"), "http://localhost:1080/api/metrics");
}
