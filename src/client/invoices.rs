use crate::client::{TextMagicClient, TextMagicError};
use crate::domain::{Invoice, Page, Params};

const INVOICES: &str = "invoices";

impl TextMagicClient {
    /// List account invoices. Accepted parameters: `page`, `limit`.
    pub async fn get_invoice_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<Invoice>, TextMagicError> {
        self.get(INVOICES, params).await
    }
}
