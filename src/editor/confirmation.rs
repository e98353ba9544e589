use crate::portal::route::Route;

pub const PROFILE_DELETED: &str = "Profile deleted.";
pub const LOGGED_OUT: &str = "You've been logged out.";

/// A message the user must acknowledge before the page navigates away
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    message: String,
    next: Route,
}

impl Confirmation {
    pub fn new(message: impl Into<String>, next: Route) -> Self {
        Self {
            message: message.into(),
            next,
        }
    }

    pub fn profile_deleted() -> Self {
        Self::new(PROFILE_DELETED, Route::Landing)
    }

    pub fn logged_out() -> Self {
        Self::new(LOGGED_OUT, Route::Landing)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the confirmation, yielding where to navigate
    pub fn acknowledge(self) -> Route {
        self.next
    }
}
