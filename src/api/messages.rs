//! Direct-message endpoints.

use super::client::{ApiClient, ApiError};
use crate::models::{Conversation, Message};

/// GET /messages/conversations
pub async fn get_conversations(api: &ApiClient) -> Result<Vec<Conversation>, ApiError> {
    api.get_json("/messages/conversations").await
}

/// GET /messages/{conversationId}
pub async fn get_messages(api: &ApiClient, conversation_id: &str) -> Result<Vec<Message>, ApiError> {
    api.get_json(&format!("/messages/{}", urlencoding::encode(conversation_id)))
        .await
}

/// POST /messages/{conversationId} — send a message, returning it as stored.
pub async fn send_message(
    api: &ApiClient,
    conversation_id: &str,
    content: &str,
) -> Result<Message, ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::Validation("message must not be empty".to_string()));
    }
    api.post_json(
        &format!("/messages/{}", urlencoding::encode(conversation_id)),
        &serde_json::json!({ "content": content }),
    )
    .await
}
