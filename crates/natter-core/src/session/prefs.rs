//! Read-only user preference lookups.
//!
//! `user_name` and `user_tone` are written once by the wiring at
//! startup (config file or command-line flags) and only read here.

use crate::session::store::{SessionStore, keys};

/// Fallback label when no usable name preference exists.
pub const DEFAULT_USER_LABEL: &str = "You";

/// The first whitespace-delimited word of the name preference, or the
/// generic label when the preference is unset or blank.
pub fn display_name<S: SessionStore>(store: &S) -> String {
    store
        .get(keys::USER_NAME)
        .as_deref()
        .and_then(|name| name.split_whitespace().next())
        .map_or_else(|| DEFAULT_USER_LABEL.to_string(), str::to_string)
}

/// The tone preference attached to user sends, empty when unset.
pub fn tone<S: SessionStore>(store: &S) -> String {
    store.get(keys::USER_TONE).unwrap_or_default()
}
