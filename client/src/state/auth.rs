#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use shared::SanitizedUser;

/// Authentication state tracking the user read from the `user` cookie.
///
/// `user` holds whatever the last cookie read produced; `None` means
/// unauthenticated. Provided as an `RwSignal` context by the app root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SanitizedUser>,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// First name for the menu greeting, if authenticated.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.first_name.as_str())
    }

    pub fn clear(&mut self) {
        self.user = None;
    }
}
