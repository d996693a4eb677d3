//! Client configuration for session persistence and routing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TOKEN_KEY: &str = "gp_token";
pub const DEFAULT_NAME_KEY: &str = "gp_user";
pub const DEFAULT_DISPLAY_NAME: &str = "admin";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Storage key holding the access token.
    pub token_key: String,
    /// Storage key holding the display name.
    pub name_key: String,
    /// Name used when nothing is stored or a login response omits one.
    pub default_display_name: String,
    /// Where unauthenticated navigation is sent.
    pub login_path: String,
    /// Prefix for backend REST calls.
    pub api_base: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            name_key: DEFAULT_NAME_KEY.to_owned(),
            default_display_name: DEFAULT_DISPLAY_NAME.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            api_base: DEFAULT_API_BASE.to_owned(),
        }
    }
}

impl SessionConfig {
    /// Endpoint URL for an API path such as `"/login"`.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}
