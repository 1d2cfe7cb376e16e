use crate::client::{TextMagicClient, TextMagicError};
use crate::domain::{
    BulkSession, Chat, ChatMessage, Message, MessagePrice, NewMessage, Page, Params,
    RawPhoneNumber, Reply, Scheduled, Session, ValidationError,
};

const MESSAGES: &str = "messages";
const BULKS: &str = "bulks";
const CHATS: &str = "chats";
const REPLIES: &str = "replies";
const SCHEDULES: &str = "schedules";
const SESSIONS: &str = "sessions";

impl TextMagicClient {
    /// Send (or schedule) an outbound message.
    ///
    /// Accepted parameters:
    /// - `text` or `templateId` (one is required),
    /// - recipients: `phones`, `contacts`, `lists` (comma-separated),
    /// - `sendingTime` (Unix timestamp), `rrule` (iCal RRULE, requires `sendingTime`),
    /// - `cutExtra`, `partsCount` (1..=6), `referenceId`, `from`.
    pub async fn create_message(&self, params: &Params) -> Result<NewMessage, TextMagicError> {
        self.post(MESSAGES, Some(params)).await
    }

    pub async fn get_message(&self, id: u64) -> Result<Message, TextMagicError> {
        self.get(&format!("{MESSAGES}/{id}"), None).await
    }

    /// List outbound messages. Accepted parameters: `page`, `limit`.
    pub async fn get_message_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<Message>, TextMagicError> {
        self.get(MESSAGES, params).await
    }

    /// Search outbound messages. Accepted parameters: `page`, `limit`, `ids`, `sessionId`,
    /// `query`.
    pub async fn search_message_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<Message>, TextMagicError> {
        self.get(&format!("{MESSAGES}/search"), params).await
    }

    /// Price a message without sending it. Takes the same parameters as
    /// [`TextMagicClient::create_message`].
    pub async fn get_message_price(
        &self,
        params: &Params,
    ) -> Result<MessagePrice, TextMagicError> {
        self.get(&format!("{MESSAGES}/price"), Some(params)).await
    }

    pub async fn delete_message(&self, id: u64) -> Result<(), TextMagicError> {
        self.delete(&format!("{MESSAGES}/{id}"), None).await
    }

    pub async fn get_bulk_session(&self, id: u64) -> Result<BulkSession, TextMagicError> {
        self.get(&format!("{BULKS}/{id}"), None).await
    }

    /// List bulk sending sessions. Accepted parameters: `page`, `limit`.
    pub async fn get_bulk_session_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<BulkSession>, TextMagicError> {
        self.get(BULKS, params).await
    }

    /// List chats. Accepted parameters: `page`, `limit`.
    pub async fn get_chat_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<Chat>, TextMagicError> {
        self.get(CHATS, params).await
    }

    /// Messages exchanged with one phone number. Accepted parameters: `page`, `limit`.
    ///
    /// The number becomes a path segment, so it must be digits with an optional leading
    /// `+`; anything else is rejected with [`ValidationError::InvalidPhoneNumber`] before a
    /// request is sent.
    pub async fn get_chat_message_list(
        &self,
        phone: &RawPhoneNumber,
        params: Option<&Params>,
    ) -> Result<Page<ChatMessage>, TextMagicError> {
        self.get(&chat_path(phone)?, params).await
    }

    pub async fn get_reply(&self, id: u64) -> Result<Reply, TextMagicError> {
        self.get(&format!("{REPLIES}/{id}"), None).await
    }

    /// List inbound messages. Accepted parameters: `page`, `limit`.
    pub async fn get_reply_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<Reply>, TextMagicError> {
        self.get(REPLIES, params).await
    }

    /// Search inbound messages. Accepted parameters: `page`, `limit`, `ids`, `query`.
    pub async fn search_reply_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<Reply>, TextMagicError> {
        self.get(&format!("{REPLIES}/search"), params).await
    }

    pub async fn delete_reply(&self, id: u64) -> Result<(), TextMagicError> {
        self.delete(&format!("{REPLIES}/{id}"), None).await
    }

    pub async fn get_scheduled(&self, id: u64) -> Result<Scheduled, TextMagicError> {
        self.get(&format!("{SCHEDULES}/{id}"), None).await
    }

    /// List scheduled sends. Accepted parameters: `page`, `limit`.
    pub async fn get_scheduled_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<Scheduled>, TextMagicError> {
        self.get(SCHEDULES, params).await
    }

    pub async fn delete_scheduled(&self, id: u64) -> Result<(), TextMagicError> {
        self.delete(&format!("{SCHEDULES}/{id}"), None).await
    }

    pub async fn get_session(&self, id: u64) -> Result<Session, TextMagicError> {
        self.get(&format!("{SESSIONS}/{id}"), None).await
    }

    /// List sending sessions. Accepted parameters: `page`, `limit`.
    pub async fn get_session_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<Session>, TextMagicError> {
        self.get(SESSIONS, params).await
    }

    pub async fn delete_session(&self, id: u64) -> Result<(), TextMagicError> {
        self.delete(&format!("{SESSIONS}/{id}"), None).await
    }

    /// Messages sent in one session. Accepted parameters: `page`, `limit`.
    pub async fn get_session_messages(
        &self,
        id: u64,
        params: Option<&Params>,
    ) -> Result<Page<Message>, TextMagicError> {
        self.get(&format!("{SESSIONS}/{id}/messages"), params).await
    }
}

fn chat_path(phone: &RawPhoneNumber) -> Result<String, ValidationError> {
    let raw = phone.raw();
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhoneNumber {
            input: raw.to_owned(),
        });
    }
    Ok(format!("{CHATS}/{raw}"))
}
