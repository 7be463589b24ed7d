//! Authenticated Session
//!
//! Holds the opaque bearer token and the lazily fetched profile of the
//! signed-in user. The token is persisted in browser session storage, so a
//! session lives exactly as long as the tab.

use leptos::*;

/// Session storage key holding the bearer token
const TOKEN_KEY: &str = "token";

/// Profile of the signed-in user
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

impl User {
    /// First letter of the display name, used as the avatar fallback
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_string()).unwrap_or_default()
    }
}

/// Session state provided to the whole component tree
#[derive(Clone, Copy)]
pub struct Session {
    /// Opaque bearer token; empty means signed out
    pub token: RwSignal<String>,
    /// Cached profile of the signed-in user (fetched by the header)
    pub user: RwSignal<Option<User>>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        !self.token.get().is_empty()
    }

    /// Update the token. Non-empty values are persisted to session storage;
    /// an empty value removes the stored key.
    pub fn set_token(&self, token: &str) {
        if token.is_empty() {
            remove_stored_token();
        } else {
            store_token(token);
        }
        self.token.set(token.to_string());
    }

    /// Sign out: drop the token and the cached user
    pub fn clear(&self) {
        self.set_token("");
        self.user.set(None);
    }
}

/// Provide the session to the component tree, restoring any token the
/// current tab already holds.
pub fn provide_session() {
    let session = Session {
        token: create_rw_signal(read_stored_token().unwrap_or_default()),
        user: create_rw_signal(None),
    };

    provide_context(session);
}

/// Typed accessor for the session context
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found")
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

fn read_stored_token() -> Option<String> {
    session_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

fn store_token(token: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

fn remove_stored_token() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_initial() {
        let user = User {
            id: "1".to_string(),
            name: "Maya".to_string(),
            username: "maya".to_string(),
            gender: None,
            bio: None,
            profile_pic: None,
        };
        assert_eq!(user.initial(), "M");
    }

    #[test]
    fn test_user_parses_backend_id_spelling() {
        let user: User =
            serde_json::from_str(r#"{"_id": "abc123", "name": "Maya", "username": "maya"}"#)
                .unwrap();
        assert_eq!(user.id, "abc123");
        assert!(user.bio.is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_token_round_trips_through_session_storage() {
        store_token("tok-1");
        assert_eq!(read_stored_token().as_deref(), Some("tok-1"));

        remove_stored_token();
        assert_eq!(read_stored_token(), None);
    }
}
