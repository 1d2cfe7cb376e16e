use crate::client::{TextMagicClient, TextMagicError};
use crate::domain::{CustomField, NewResource, Page, Params};

const CUSTOM_FIELDS: &str = "customfields";

impl TextMagicClient {
    pub async fn get_custom_field(&self, id: u64) -> Result<CustomField, TextMagicError> {
        self.get(&format!("{CUSTOM_FIELDS}/{id}"), None).await
    }

    pub async fn create_custom_field(&self, name: &str) -> Result<NewResource, TextMagicError> {
        let params = Params::with("name", name)?;
        self.post(CUSTOM_FIELDS, Some(&params)).await
    }

    /// List custom fields. Accepted parameters: `page`, `limit`.
    pub async fn get_custom_field_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<CustomField>, TextMagicError> {
        self.get(CUSTOM_FIELDS, params).await
    }

    /// Rename a custom field.
    pub async fn update_custom_field(
        &self,
        id: u64,
        name: &str,
    ) -> Result<NewResource, TextMagicError> {
        let params = Params::with("name", name)?;
        self.put(&format!("{CUSTOM_FIELDS}/{id}"), Some(&params))
            .await
    }

    pub async fn delete_custom_field(&self, id: u64) -> Result<(), TextMagicError> {
        self.delete(&format!("{CUSTOM_FIELDS}/{id}"), None).await
    }

    /// Set the value of a custom field for one contact.
    ///
    /// Accepted parameters: `contactId` (required), `value` (required). The returned link
    /// points at the contact.
    pub async fn update_custom_field_value(
        &self,
        id: u64,
        params: &Params,
    ) -> Result<NewResource, TextMagicError> {
        self.put(&format!("{CUSTOM_FIELDS}/{id}/update"), Some(params))
            .await
    }
}
