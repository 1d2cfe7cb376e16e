use crate::client::{TextMagicClient, TextMagicError};
use crate::domain::{NewResource, Page, Params, Template};

const TEMPLATES: &str = "templates";

impl TextMagicClient {
    pub async fn get_template(&self, id: u64) -> Result<Template, TextMagicError> {
        self.get(&format!("{TEMPLATES}/{id}"), None).await
    }

    /// Create a template. Accepted parameters: `name` (required), `content` (required, may
    /// contain `{tags}`).
    pub async fn create_template(&self, params: &Params) -> Result<NewResource, TextMagicError> {
        self.post(TEMPLATES, Some(params)).await
    }

    /// List templates. Accepted parameters: `page`, `limit`.
    pub async fn get_template_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<Template>, TextMagicError> {
        self.get(TEMPLATES, params).await
    }

    /// Search templates. Accepted parameters: `page`, `limit`, `ids`, `name`, `content`.
    pub async fn search_template_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<Template>, TextMagicError> {
        self.get(&format!("{TEMPLATES}/search"), params).await
    }

    /// Update a template. Accepted parameters: `name` (required), `content` (required).
    pub async fn update_template(
        &self,
        id: u64,
        params: &Params,
    ) -> Result<NewResource, TextMagicError> {
        self.put(&format!("{TEMPLATES}/{id}"), Some(params)).await
    }

    pub async fn delete_template(&self, id: u64) -> Result<(), TextMagicError> {
        self.delete(&format!("{TEMPLATES}/{id}"), None).await
    }
}
