use crate::client::{TextMagicClient, TextMagicError};
use crate::domain::{Contact, List, NewResource, Page, Params};

const CONTACTS: &str = "contacts";

impl TextMagicClient {
    /// Fetch a single contact.
    pub async fn get_contact(&self, id: u64) -> Result<Contact, TextMagicError> {
        self.get(&format!("{CONTACTS}/{id}"), None).await
    }

    /// Create a contact.
    ///
    /// Accepted parameters: `phone` (required), `lists` (required, comma-separated list ids),
    /// `firstName`, `lastName`, `email`, `companyName`, `country` (ISO 3166-1 alpha-2).
    pub async fn create_contact(&self, params: &Params) -> Result<NewResource, TextMagicError> {
        self.post(CONTACTS, Some(params)).await
    }

    /// List contacts. Accepted parameters: `page`, `limit`, `shared`.
    pub async fn get_contact_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<Contact>, TextMagicError> {
        self.get(CONTACTS, params).await
    }

    /// Search contacts. Accepted parameters: `page`, `limit`, `shared`, `ids`, `listId`,
    /// `query`.
    pub async fn search_contact_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<Contact>, TextMagicError> {
        self.get(&format!("{CONTACTS}/search"), params).await
    }

    /// Update a contact. Takes the same parameters as [`TextMagicClient::create_contact`].
    pub async fn update_contact(
        &self,
        id: u64,
        params: &Params,
    ) -> Result<NewResource, TextMagicError> {
        self.put(&format!("{CONTACTS}/{id}"), Some(params)).await
    }

    pub async fn delete_contact(&self, id: u64) -> Result<(), TextMagicError> {
        self.delete(&format!("{CONTACTS}/{id}"), None).await
    }

    /// Lists the contact belongs to. Accepted parameters: `page`, `limit`.
    pub async fn get_contact_lists(
        &self,
        id: u64,
        params: Option<&Params>,
    ) -> Result<Page<List>, TextMagicError> {
        self.get(&format!("{CONTACTS}/{id}/lists"), params).await
    }
}
