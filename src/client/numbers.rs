use crate::client::{TextMagicClient, TextMagicError};
use crate::domain::{AvailableNumbers, NewResource, Number, Page, Params};

const NUMBERS: &str = "numbers";

impl TextMagicClient {
    pub async fn get_number(&self, id: u64) -> Result<Number, TextMagicError> {
        self.get(&format!("{NUMBERS}/{id}"), None).await
    }

    /// List dedicated numbers. Accepted parameters: `page`, `limit`.
    pub async fn get_number_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<Number>, TextMagicError> {
        self.get(NUMBERS, params).await
    }

    /// Buy a dedicated number.
    ///
    /// Accepted parameters: `phone` (E.164), `country` (ISO code) and `userId`, all required.
    pub async fn buy_number(&self, params: &Params) -> Result<NewResource, TextMagicError> {
        self.post(NUMBERS, Some(params)).await
    }

    /// Dedicated numbers available to buy. Accepted parameters: `country` (required),
    /// `prefix` (including the country code, e.g. `447`).
    pub async fn get_available_numbers(
        &self,
        params: &Params,
    ) -> Result<AvailableNumbers, TextMagicError> {
        self.get(&format!("{NUMBERS}/available"), Some(params)).await
    }

    /// Cancel a dedicated number subscription.
    pub async fn cancel_number(&self, id: u64) -> Result<(), TextMagicError> {
        self.delete(&format!("{NUMBERS}/{id}"), None).await
    }
}
