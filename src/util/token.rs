//! Durable bearer-token slot backed by `localStorage`.
//!
//! Written on login, removed on logout or on any unauthorized response.
//! Presence of the token gates the articles screen, but only as a client
//! convenience; the server re-checks every request. Requires a browser
//! environment; on the server every operation is a no-op.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "newsroom_token";

/// Read the stored token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token issued by a successful login.
pub fn store(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the token on logout or after an unauthorized response.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
