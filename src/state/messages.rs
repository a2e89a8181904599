//! Direct-messages slice.

use crate::models::{Conversation, Message};

/// Messaging state.
///
/// `messages` is the flat chronological list for at most one conversation.
/// Switching conversations replaces the whole list; no per-conversation
/// cache is kept client-side.
#[derive(Debug, Clone, Default)]
pub struct MessagesState {
    pub conversations: Vec<Conversation>,
    pub active_conversation: Option<String>,
    pub messages: Vec<Message>,
    pub is_loading: bool,
}

/// Mutations of the messaging slice.
#[derive(Debug, Clone)]
pub enum MessagesAction {
    SetLoading(bool),
    /// Replace the conversation list wholesale. Unread counts are not merged
    /// with any previous list.
    SetConversations(Vec<Conversation>),
    /// Point at a conversation. Does not clear `messages`: the previous
    /// conversation's messages remain visible until the caller's follow-up
    /// `SetMessages` lands.
    SetActiveConversation(String),
    /// Replace the message list wholesale (once per conversation switch).
    SetMessages(Vec<Message>),
    /// Append a message. The slice does not verify the message belongs to
    /// the active conversation; callers must ensure it does.
    AddMessage(Message),
}

impl MessagesState {
    /// Apply one action to the slice.
    pub fn apply(&mut self, action: MessagesAction) {
        match action {
            MessagesAction::SetLoading(is_loading) => self.is_loading = is_loading,
            MessagesAction::SetConversations(conversations) => self.conversations = conversations,
            MessagesAction::SetActiveConversation(id) => self.active_conversation = Some(id),
            MessagesAction::SetMessages(messages) => self.messages = messages,
            MessagesAction::AddMessage(message) => self.messages.push(message),
        }
    }

    /// The active conversation's summary, if one is selected and listed.
    pub fn active(&self) -> Option<&Conversation> {
        let id = self.active_conversation.as_deref()?;
        self.conversations.iter().find(|c| c.id == id)
    }
}
