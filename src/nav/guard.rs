//! Route admission decision.
//!
//! The guard is a pure function of the target route's access record and the
//! current session token. It never remembers the requested path.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Per-route access flags declared at registration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteAccess {
    pub requires_auth: bool,
}

impl RouteAccess {
    pub const PUBLIC: Self = Self { requires_auth: false };
    pub const PROTECTED: Self = Self { requires_auth: true };

    #[must_use]
    pub fn is_public(self) -> bool {
        !self.requires_auth
    }
}

impl Default for RouteAccess {
    /// Routes without metadata require authentication.
    fn default() -> Self {
        Self::PROTECTED
    }
}

/// Outcome of a navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavDecision {
    /// Commit the transition as requested.
    Proceed,
    /// Abandon the transition and go to this path instead.
    Redirect(String),
}

impl NavDecision {
    #[must_use]
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }

    /// Redirect target, if any.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Proceed => None,
            Self::Redirect(path) => Some(path),
        }
    }
}

/// Admit public routes always and protected routes only with a token.
#[must_use]
pub fn guard(access: RouteAccess, token: &str, login_path: &str) -> NavDecision {
    if access.is_public() || !token.is_empty() {
        NavDecision::Proceed
    } else {
        NavDecision::Redirect(login_path.to_owned())
    }
}
