//! Session store port.
//!
//! String-keyed storage scoped to a single process run, holding the
//! session identity and the user preferences. Values survive across
//! exchanges within the run and vanish with it.

/// Well-known session store keys.
pub mod keys {
    /// The session identity token.
    pub const USER_ID: &str = "user_id";
    /// Tone preference attached to every user send.
    pub const USER_TONE: &str = "user_tone";
    /// Display name preference. Only its first word is shown.
    pub const USER_NAME: &str = "user_name";
}

/// Port for session-scoped key-value storage.
///
/// Storage being available is a precondition of running a session, not
/// a failure mode, so the API is infallible. Implementations live in
/// `natter-infra`.
pub trait SessionStore: Send + Sync {
    /// Read a value. `None` means the key was never set.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: String);
}
