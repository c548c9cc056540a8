//! Request-lifecycle state: the banner message and the loading flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user action runs through the same lifecycle: flush the message and
//! raise the loading flag, fire the request, then lower the flag and set the
//! message from the server response or the failure description. Actions
//! check `loading` before starting so in-flight requests are serialized.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Banner message and loading flag shared by both screens.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Current status message; empty means the banner is hidden.
    pub message: String,
    /// True while a request is outstanding; drives the spinner.
    pub loading: bool,
}

impl SessionState {
    /// Start a request: clear the message and raise the loading flag.
    pub fn begin_request(&mut self) {
        self.message.clear();
        self.loading = true;
    }

    /// Finish a request: lower the loading flag and show `message`.
    pub fn finish(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.message = message.into();
    }
}
