use crate::client::{TextMagicClient, TextMagicError};
use crate::domain::{NewResource, Page, Params, SenderId, Sources};

const SENDER_IDS: &str = "senderids";
const SOURCES: &str = "sources";

impl TextMagicClient {
    /// Fetch a sender ID by its numeric id (not the alphanumeric value).
    pub async fn get_sender_id(&self, id: u64) -> Result<SenderId, TextMagicError> {
        self.get(&format!("{SENDER_IDS}/{id}"), None).await
    }

    /// List sender IDs. Accepted parameters: `page`, `limit`.
    pub async fn get_sender_id_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<SenderId>, TextMagicError> {
        self.get(SENDER_IDS, params).await
    }

    /// Apply for a new sender ID.
    ///
    /// Accepted parameters: `senderId` (alphanumeric, at most 11 characters) and
    /// `explanation`, both required.
    pub async fn create_sender_id(&self, params: &Params) -> Result<NewResource, TextMagicError> {
        self.post(SENDER_IDS, Some(params)).await
    }

    pub async fn delete_sender_id(&self, id: u64) -> Result<(), TextMagicError> {
        self.delete(&format!("{SENDER_IDS}/{id}"), None).await
    }

    /// Values usable as `from` when sending. Accepted parameters: `country`.
    pub async fn get_sources(&self, params: Option<&Params>) -> Result<Sources, TextMagicError> {
        self.get(SOURCES, params).await
    }
}
