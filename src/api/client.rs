//! HTTP API Client
//!
//! Functions for communicating with the CyberShield REST API.

use gloo_net::http::Request;
use std::fmt;

use crate::state::feed::Post;
use crate::state::session::User;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("cybershield_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("cybershield_api_url", url);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct SignupResponse {
    pub message: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct UserDetailsResponse {
    pub status: bool,
    #[serde(default)]
    pub data: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{ status, message }` acknowledgement used by the profile and
/// comment endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct StatusAck {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Acknowledgement for post creation. When the moderation model rejects the
/// content, `status` is false and the rejection details are populated.
#[derive(Debug, serde::Deserialize)]
pub struct PostAck {
    pub status: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub cyberbullying_type: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct LikeResponse {
    pub liked: bool,
}

#[derive(Debug, serde::Deserialize)]
pub struct CleanTextResponse {
    pub cleaned_text: String,
}

/// Error body the backend attaches to plain request failures.
#[derive(Debug, serde::Deserialize)]
pub struct ApiRejection {
    #[serde(default)]
    pub detail: Option<String>,
}

/// HTTP 400 body for a message flagged by the moderation model.
#[derive(Debug, serde::Deserialize)]
pub struct ModerationRejection {
    #[serde(default)]
    pub cyberbullying: bool,
    #[serde(default)]
    pub bullying_type: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Counterpart in a conversation
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ChatUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub username: String,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

impl ChatUser {
    /// Name to show in the sidebar and thread header, falling back to the
    /// handle when the account has no display name.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.username)
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ChatMessage {
    pub id: String,
    #[serde(default)]
    pub sender: Option<ChatUser>,
    pub text: String,
    #[serde(default)]
    pub created_at: String,
}

/// Outcome of a failed chat send. The moderation rejection carries a
/// structured payload and is surfaced verbatim; everything else collapses
/// to a fixed human string.
#[derive(Clone, Debug, PartialEq)]
pub enum SendError {
    /// HTTP 400 with `cyberbullying: true`
    Moderation {
        bullying_type: String,
        suggestion: String,
    },
    /// HTTP 400 without a moderation payload
    Rejected(String),
    /// Any other non-OK status
    Server,
    /// Transport failure
    Network,
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Moderation {
                bullying_type,
                suggestion,
            } => write!(
                f,
                "Cyberbullying detected ({}). Suggestion: {}",
                bullying_type, suggestion
            ),
            SendError::Rejected(detail) => write!(f, "{}", detail),
            SendError::Server => write!(f, "Server error. Please try again."),
            SendError::Network => write!(f, "Network error. Please check your connection."),
        }
    }
}

// ============ API Functions ============

/// Log in with email and password, returning the session token
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/login", api_base))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let rejection: ApiRejection = response.json().await.unwrap_or(ApiRejection { detail: None });
        return Err(rejection.detail.unwrap_or_else(|| "Login failed.".to_string()));
    }

    let result: LoginResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.token)
}

/// Exchange a third-party identity-provider credential for a session token.
/// Hits the same endpoint as the password login.
pub async fn login_with_credential(credential: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct CredentialRequest {
        credential: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/login", api_base))
        .json(&CredentialRequest {
            credential: credential.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let rejection: ApiRejection = response.json().await.unwrap_or(ApiRejection { detail: None });
        return Err(rejection
            .detail
            .unwrap_or_else(|| "Google login failed.".to_string()));
    }

    let result: LoginResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.token)
}

/// Register a new account, returning the server's success message
pub async fn signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct SignupRequest {
        name: String,
        email: String,
        password: String,
        confirm_password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/signup", api_base))
        .json(&SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let rejection: ApiRejection = response.json().await.unwrap_or(ApiRejection { detail: None });
        return Err(rejection.detail.unwrap_or_else(|| "Signup failed.".to_string()));
    }

    let result: SignupResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.message)
}

/// Fetch the signed-in user's profile by token
pub async fn fetch_user_details(token: &str) -> Result<User, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/get_user_details/{}", api_base, token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Could not load profile.".to_string());
    }

    let result: UserDetailsResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if result.status {
        result.data.ok_or_else(|| "Could not load profile.".to_string())
    } else {
        Err(result
            .message
            .unwrap_or_else(|| "Could not load profile.".to_string()))
    }
}

/// Update the signed-in user's profile via multipart PUT
pub async fn edit_profile(
    token: &str,
    name: &str,
    username: &str,
    gender: &str,
    bio: &str,
    picture: Option<&web_sys::File>,
) -> Result<(), String> {
    let api_base = get_api_base();

    let form = web_sys::FormData::new().map_err(|e| format!("Request build error: {:?}", e))?;
    let _ = form.append_with_str("token", token);
    let _ = form.append_with_str("name", name);
    let _ = form.append_with_str("username", username);
    let _ = form.append_with_str("gender", gender);
    let _ = form.append_with_str("bio", bio);
    if let Some(file) = picture {
        let _ = form.append_with_blob("profile_pic", file);
    }

    let response = Request::put(&format!("{}/edit_profile", api_base))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Update failed".to_string());
    }

    let result: StatusAck = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if result.status {
        Ok(())
    } else {
        Err(result.message.unwrap_or_else(|| "Update failed".to_string()))
    }
}

/// Fetch the post feed for the given token
pub async fn fetch_posts(token: &str) -> Result<Vec<Post>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/posts?token={}", api_base, token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Could not load posts.".to_string());
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a new post. A moderation rejection comes back as a successful
/// parse with `status: false` so callers can surface the suggestion.
pub async fn create_post(
    token: &str,
    caption: &str,
    mood: &str,
    image: Option<&web_sys::File>,
) -> Result<PostAck, String> {
    let api_base = get_api_base();

    let form = web_sys::FormData::new().map_err(|e| format!("Request build error: {:?}", e))?;
    let _ = form.append_with_str("token", token);
    if !caption.is_empty() {
        let _ = form.append_with_str("caption", caption);
    }
    if !mood.is_empty() {
        let _ = form.append_with_str("mood", mood);
    }
    if let Some(file) = image {
        let _ = form.append_with_blob("image", file);
    }

    let response = Request::post(&format!("{}/posts", api_base))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Toggle the viewer's like on a post, returning the server's verdict
pub async fn toggle_like(token: &str, post_id: &str) -> Result<bool, String> {
    let api_base = get_api_base();

    let form = web_sys::FormData::new().map_err(|e| format!("Request build error: {:?}", e))?;
    let _ = form.append_with_str("token", token);

    let response = Request::post(&format!("{}/posts/{}/like", api_base, post_id))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Could not update like.".to_string());
    }

    let result: LikeResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.liked)
}

/// Submit a comment on a post. A rejected comment comes back as a
/// successful parse with `status: false` and the server's message.
pub async fn submit_comment(token: &str, post_id: &str, text: &str) -> Result<StatusAck, String> {
    let api_base = get_api_base();

    let form = web_sys::FormData::new().map_err(|e| format!("Request build error: {:?}", e))?;
    let _ = form.append_with_str("token", token);
    let _ = form.append_with_str("comment_text", text);

    let response = Request::post(&format!("{}/posts/{}/comments", api_base, post_id))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the list of conversation counterparts
pub async fn fetch_chat_users(token: &str) -> Result<Vec<ChatUser>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/chat/users/{}", api_base, token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Could not load chats.".to_string());
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the message thread with one counterpart
pub async fn fetch_messages(token: &str, other_id: &str) -> Result<Vec<ChatMessage>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/chat/{}/{}/messages", api_base, other_id, token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Could not load messages.".to_string());
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Send a chat message. A 400 status carries the moderation verdict; the
/// message is never appended to the thread unless the server accepts it.
pub async fn send_message(
    token: &str,
    other_id: &str,
    text: &str,
) -> Result<ChatMessage, SendError> {
    #[derive(serde::Serialize)]
    struct SendRequest {
        token: String,
        other_id: String,
        text: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/chat/message", api_base))
        .json(&SendRequest {
            token: token.to_string(),
            other_id: other_id.to_string(),
            text: text.to_string(),
        })
        .map_err(|_| SendError::Network)?
        .send()
        .await
        .map_err(|_| SendError::Network)?;

    if response.status() == 400 {
        let rejection: ModerationRejection = response.json().await.map_err(|_| SendError::Server)?;
        if rejection.cyberbullying {
            return Err(SendError::Moderation {
                bullying_type: rejection
                    .bullying_type
                    .unwrap_or_else(|| "unspecified".to_string()),
                suggestion: rejection.suggestion.unwrap_or_default(),
            });
        }
        return Err(SendError::Rejected(
            rejection.detail.unwrap_or_else(|| "Invalid request.".to_string()),
        ));
    }

    if !response.ok() {
        return Err(SendError::Server);
    }

    response.json().await.map_err(|_| SendError::Server)
}

/// Run an image through the cleaning model. The response body is the raw
/// base64 payload, not JSON.
pub async fn clean_image(image: &web_sys::File) -> Result<String, String> {
    let api_base = get_api_base();

    let form = web_sys::FormData::new().map_err(|e| format!("Request build error: {:?}", e))?;
    let _ = form.append_with_blob("image", image);

    let response = Request::post(&format!("{}/cyber_free_image", api_base))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Image processing failed.".to_string());
    }

    let b64 = response
        .text()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if b64.is_empty() {
        return Err("No image returned from server.".to_string());
    }

    Ok(b64)
}

/// Run text through the cleaning model
pub async fn clean_text(text: &str) -> Result<String, String> {
    let api_base = get_api_base();

    let form = web_sys::FormData::new().map_err(|e| format!("Request build error: {:?}", e))?;
    let _ = form.append_with_str("text", text);

    let response = Request::post(&format!("{}/cyber_free_text", api_base))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Text processing failed.".to_string());
    }

    let result: CleanTextResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.cleaned_text)
}

/// Wrap a raw base64 payload into a data URL for direct display/download
pub fn image_data_url(b64: &str) -> String {
    format!("data:image/png;base64,{}", b64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderation_error_names_type_and_suggestion() {
        let err = SendError::Moderation {
            bullying_type: "insult".to_string(),
            suggestion: "Try being kind instead.".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("insult"));
        assert!(rendered.contains("Try being kind instead."));
    }

    #[test]
    fn test_server_and_network_errors_are_distinct_strings() {
        assert_eq!(SendError::Server.to_string(), "Server error. Please try again.");
        assert_eq!(
            SendError::Network.to_string(),
            "Network error. Please check your connection."
        );
        assert_ne!(SendError::Server.to_string(), SendError::Network.to_string());
    }

    #[test]
    fn test_rejected_error_passes_detail_through() {
        let err = SendError::Rejected("Token expired.".to_string());
        assert_eq!(err.to_string(), "Token expired.");
    }

    #[test]
    fn test_image_data_url_wraps_payload() {
        assert_eq!(
            image_data_url("aGVsbG8="),
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[test]
    fn test_chat_user_display_name_falls_back_to_username() {
        let named = ChatUser {
            id: "1".to_string(),
            name: Some("Ana".to_string()),
            username: "ana_v".to_string(),
            profile_pic: None,
        };
        assert_eq!(named.display_name(), "Ana");

        let unnamed = ChatUser {
            id: "2".to_string(),
            name: None,
            username: "ghost".to_string(),
            profile_pic: None,
        };
        assert_eq!(unnamed.display_name(), "ghost");

        let blank = ChatUser {
            id: "3".to_string(),
            name: Some(String::new()),
            username: "blank".to_string(),
            profile_pic: None,
        };
        assert_eq!(blank.display_name(), "blank");
    }

    #[test]
    fn test_moderation_rejection_parses_partial_payload() {
        let rejection: ModerationRejection =
            serde_json::from_str(r#"{"cyberbullying": true, "bullying_type": "threat"}"#).unwrap();
        assert!(rejection.cyberbullying);
        assert_eq!(rejection.bullying_type.as_deref(), Some("threat"));
        assert!(rejection.suggestion.is_none());
    }
}
