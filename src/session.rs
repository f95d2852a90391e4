//! Session context
//!
//! Holds the bearer credential every remote call needs. The session is passed
//! explicitly to whoever talks to the server; nothing reads the token from
//! ambient state.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroizing;

use crate::error::{BoardsError, BoardsResult};
use crate::storage::KeyValueStore;

/// Key the session lives under in the key-value store
pub const SESSION_KEY: &str = "session";

/// Environment variable that overrides the stored token
pub const TOKEN_ENV: &str = "BUDGET_BOARDS_TOKEN";

/// Authenticated (or anonymous) user context
#[derive(Clone, Default)]
pub struct Session {
    token: Option<Zeroizing<String>>,
    display_name: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
struct StoredSession {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
}

impl Session {
    /// A session without credentials; every remote call will be refused
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session carrying the given bearer token
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let token = token.trim();
        Self {
            token: (!token.is_empty()).then(|| Zeroizing::new(token.to_string())),
            display_name: None,
        }
    }

    /// The bearer token, or `NotAuthenticated`
    pub fn bearer(&self) -> BoardsResult<&str> {
        self.token
            .as_ref()
            .map(|t| t.as_str())
            .ok_or(BoardsError::NotAuthenticated)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = Some(name.into());
    }

    /// Load the stored session, letting `BUDGET_BOARDS_TOKEN` win over it
    pub fn load<K: KeyValueStore>(store: &K) -> BoardsResult<Self> {
        Self::load_with_override(store, std::env::var(TOKEN_ENV).ok())
    }

    fn load_with_override<K: KeyValueStore>(
        store: &K,
        token_override: Option<String>,
    ) -> BoardsResult<Self> {
        let stored: StoredSession = match store.get(SESSION_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| BoardsError::Storage(format!("Corrupt session: {}", e)))?,
            None => StoredSession::default(),
        };

        let token = token_override
            .filter(|t| !t.trim().is_empty())
            .or(stored.token);

        let mut session = match token {
            Some(token) => Self::with_token(token),
            None => Self::anonymous(),
        };
        session.display_name = stored.display_name;
        Ok(session)
    }

    /// Persist the session
    pub fn save<K: KeyValueStore>(&self, store: &K) -> BoardsResult<()> {
        let stored = StoredSession {
            token: self.token.as_ref().map(|t| t.as_str().to_owned()),
            display_name: self.display_name.clone(),
        };
        let json = Zeroizing::new(serde_json::to_string(&stored)?);
        store.set(SESSION_KEY, &json)
    }

    /// Forget the stored session
    pub fn clear<K: KeyValueStore>(store: &K) -> BoardsResult<()> {
        store.remove(SESSION_KEY)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("display_name", &self.display_name)
            .finish()
    }
}
