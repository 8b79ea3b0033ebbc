//! Session identity bootstrap.
//!
//! Every exchange with the endpoint carries a string identity token.
//! The server may assign one in a response; until it does, the client
//! generates an anonymous token of the form `anon_` plus ten base-36
//! characters and persists it for the rest of the run.

use rand::Rng;

use crate::session::store::{SessionStore, keys};

/// Prefix on client-generated anonymous identities.
const ANON_PREFIX: &str = "anon_";

/// Length of the random suffix on generated identities.
const ANON_SUFFIX_LEN: usize = 10;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Per-session identity handle backed by a [`SessionStore`].
#[derive(Debug, Clone)]
pub struct SessionIdentity<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionIdentity<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The current identity, generating and persisting an anonymous one
    /// on first use. An empty stored value counts as absent.
    pub fn get_or_create(&self) -> String {
        if let Some(id) = self.store.get(keys::USER_ID).filter(|id| !id.is_empty()) {
            return id;
        }
        let id = generate_anonymous_id();
        tracing::debug!(user_id = %id, "generated anonymous session identity");
        self.store.set(keys::USER_ID, id.clone());
        id
    }

    /// Replace the identity with a server-assigned token, taken as-is.
    pub fn update(&self, new_id: String) {
        self.store.set(keys::USER_ID, new_id);
    }
}

/// Generate a fresh `anon_`-prefixed identity token.
pub fn generate_anonymous_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ANON_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{ANON_PREFIX}{suffix}")
}
