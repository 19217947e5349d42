//! Admin session context, loaded once at application start.
//!
//! Nothing reads persistent storage at module-load time; the host builds
//! an [`AppContext`] explicitly and passes it to whatever needs the
//! operator's identity. Teardown on logout goes through the same store.

use std::collections::HashMap;

use crate::domain::session::AdminProfile;

pub const AUTH_FLAG_KEY: &str = "isAuthenticated";
pub const PROFILE_KEY: &str = "user";
const TOKEN_KEYS: [&str; 2] = ["access_token", "refresh_token"];

/// Persistent key/value storage the host application provides.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Simple in-process store, for tests and the CLI.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Session data resolved at startup: load, validate, provide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppContext {
    pub authenticated: bool,
    pub profile: AdminProfile,
}

impl AppContext {
    /// Reads the authentication flag and profile blob once. Absent or
    /// malformed data degrades to placeholder values; loading never
    /// fails.
    pub fn load(store: &dyn SessionStore) -> Self {
        let authenticated = store.get(AUTH_FLAG_KEY).as_deref() == Some("true");
        let profile = AdminProfile::from_stored(store.get(PROFILE_KEY).as_deref());
        Self {
            authenticated,
            profile,
        }
    }

    /// Clears every session key on logout.
    pub fn logout(store: &mut dyn SessionStore) {
        store.remove(AUTH_FLAG_KEY);
        store.remove(PROFILE_KEY);
        for key in TOKEN_KEYS {
            store.remove(key);
        }
    }
}
