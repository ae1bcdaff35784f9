//! The session store: auth token plus user profile, persisted on every
//! mutation and rehydrated at construction.

use std::sync::RwLock;

use uniknow_core::{Role, UserProfile, UserProfilePatch};

use crate::storage::SessionStorage;

/// Persisted key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Persisted key holding the serialized [`UserProfile`].
pub const USER_INFO_KEY: &str = "userInfo";

#[derive(Debug, Default)]
struct SessionState {
    token: String,
    user: UserProfile,
}

/// Client-side session: `token` empty ⇔ logged out.
///
/// All accessors are synchronous. The store is shared between the request
/// pipeline and the navigation guard, so state lives behind an `RwLock`;
/// persistence failures degrade to a warning (the in-memory session stays
/// authoritative for the rest of the process lifetime).
pub struct SessionStore {
    state: RwLock<SessionState>,
    storage: Box<dyn SessionStorage>,
}

impl SessionStore {
    /// Build the store and rehydrate from durable storage.
    ///
    /// A missing or unparseable persisted record never fails construction;
    /// it is logged and the affected part falls back to its default.
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        let mut state = SessionState::default();

        match storage.get(TOKEN_KEY) {
            Ok(Some(token)) => state.token = token,
            Ok(None) => {}
            Err(err) => tracing::warn!("failed to read persisted token: {err}"),
        }

        match storage.get(USER_INFO_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => state.user = user,
                Err(err) => {
                    tracing::warn!("corrupt persisted user profile, using defaults: {err}");
                }
            },
            Ok(None) => {}
            Err(err) => tracing::warn!("failed to read persisted user profile: {err}"),
        }

        Self {
            state: RwLock::new(state),
            storage,
        }
    }

    /// Current bearer token; empty string when logged out.
    pub fn token(&self) -> String {
        self.state.read().expect("session lock poisoned").token.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        !self.state.read().expect("session lock poisoned").token.is_empty()
    }

    /// Set the token; visible to subsequent [`SessionStore::token`] calls
    /// immediately and persisted before returning.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let mut state = self.state.write().expect("session lock poisoned");
        state.token = token.clone();
        drop(state);
        if let Err(err) = self.storage.set(TOKEN_KEY, &token) {
            tracing::warn!("failed to persist token: {err}");
        }
    }

    /// Snapshot of the current user profile.
    pub fn user(&self) -> UserProfile {
        self.state.read().expect("session lock poisoned").user.clone()
    }

    /// Merge a partial profile update and persist the merged result.
    ///
    /// Fields absent or empty in the patch keep their previous value.
    pub fn set_user_info(&self, patch: UserProfilePatch) {
        let mut state = self.state.write().expect("session lock poisoned");
        state.user.apply(patch);
        let serialized = serde_json::to_string(&state.user);
        drop(state);
        match serialized {
            Ok(raw) => {
                if let Err(err) = self.storage.set(USER_INFO_KEY, &raw) {
                    tracing::warn!("failed to persist user profile: {err}");
                }
            }
            Err(err) => tracing::warn!("failed to serialize user profile: {err}"),
        }
    }

    /// Clear the session back to defaults and drop the persisted entries.
    /// Idempotent.
    pub fn logout(&self) {
        *self.state.write().expect("session lock poisoned") = SessionState::default();
        for key in [TOKEN_KEY, USER_INFO_KEY] {
            if let Err(err) = self.storage.remove(key) {
                tracing::warn!("failed to remove persisted '{key}': {err}");
            }
        }
    }

    pub fn role(&self) -> Role {
        self.state.read().expect("session lock poisoned").user.role
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_admin()
    }

    pub fn can_edit(&self) -> bool {
        self.role().can_edit()
    }

    pub fn can_approve(&self) -> bool {
        self.role().can_approve()
    }

    /// Alias of [`SessionStore::is_admin`]; see [`Role::can_skip_approval`].
    pub fn can_skip_approval(&self) -> bool {
        self.role().can_skip_approval()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read().expect("session lock poisoned");
        f.debug_struct("SessionStore")
            .field("logged_in", &!state.token.is_empty())
            .field("user", &state.user)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    fn store_with(storage: MemoryStorage) -> (SessionStore, Arc<MemoryStorage>) {
        // Keep a second handle on the storage to inspect persisted state.
        let storage = Arc::new(storage);
        let view = Arc::clone(&storage);
        struct Shared(Arc<MemoryStorage>);
        impl SessionStorage for Shared {
            fn get(&self, key: &str) -> Result<Option<String>, crate::StorageError> {
                self.0.get(key)
            }
            fn set(&self, key: &str, value: &str) -> Result<(), crate::StorageError> {
                self.0.set(key, value)
            }
            fn remove(&self, key: &str) -> Result<(), crate::StorageError> {
                self.0.remove(key)
            }
        }
        (SessionStore::new(Box::new(Shared(storage))), view)
    }

    #[test]
    fn set_token_is_immediately_visible_and_persisted() {
        let (store, storage) = store_with(MemoryStorage::new());
        assert_eq!(store.token(), "");
        assert!(!store.is_logged_in());

        store.set_token("jwt-abc");
        assert_eq!(store.token(), "jwt-abc");
        assert!(store.is_logged_in());
        assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("jwt-abc"));
    }

    #[test]
    fn set_user_info_merges_and_persists() {
        let (store, storage) = store_with(MemoryStorage::new());
        store.set_user_info(UserProfilePatch {
            id: Some("1".into()),
            name: Some("Alice".into()),
            role: Some(Role::Admin),
            ..Default::default()
        });
        store.set_user_info(UserProfilePatch {
            name: Some("Bob".into()),
            ..Default::default()
        });

        let user = store.user();
        assert_eq!(user.id.as_str(), "1");
        assert_eq!(user.name, "Bob");
        assert_eq!(user.role, Role::Admin);

        let persisted: UserProfile =
            serde_json::from_str(&storage.get(USER_INFO_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(persisted, user);
    }

    #[test]
    fn logout_clears_memory_and_storage_and_is_idempotent() {
        let (store, storage) = store_with(MemoryStorage::new());
        store.set_token("jwt-abc");
        store.set_user_info(UserProfilePatch {
            name: Some("Alice".into()),
            role: Some(Role::Agent),
            ..Default::default()
        });

        store.logout();
        assert_eq!(store.token(), "");
        assert_eq!(store.user(), UserProfile::default());
        assert!(!storage.contains(TOKEN_KEY));
        assert!(!storage.contains(USER_INFO_KEY));

        store.logout();
        assert_eq!(store.token(), "");
    }

    #[test]
    fn rehydrates_from_storage() {
        let storage = MemoryStorage::with_entries([
            (TOKEN_KEY, "persisted-token"),
            (
                USER_INFO_KEY,
                r#"{"id":"7","name":"Eve","avatar":"","role":"agent","tenantId":"t-9"}"#,
            ),
        ]);
        let (store, _) = store_with(storage);
        assert_eq!(store.token(), "persisted-token");
        assert_eq!(store.user().name, "Eve");
        assert_eq!(store.role(), Role::Agent);
        assert!(store.can_edit());
    }

    #[test]
    fn corrupt_persisted_profile_falls_back_to_defaults() {
        let storage = MemoryStorage::with_entries([
            (TOKEN_KEY, "still-valid"),
            (USER_INFO_KEY, "{not json"),
        ]);
        let (store, _) = store_with(storage);
        assert_eq!(store.token(), "still-valid");
        assert_eq!(store.user(), UserProfile::default());
    }

    #[test]
    fn predicates_follow_the_stored_role() {
        let (store, _) = store_with(MemoryStorage::new());
        assert!(!store.can_edit());

        store.set_user_info(UserProfilePatch {
            role: Some(Role::Agent),
            ..Default::default()
        });
        assert!(store.can_edit());
        assert!(store.can_approve());
        assert!(!store.is_admin());
        assert!(!store.can_skip_approval());

        store.set_user_info(UserProfilePatch {
            role: Some(Role::Admin),
            ..Default::default()
        });
        assert!(store.can_skip_approval());
    }
}
