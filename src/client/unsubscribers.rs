use crate::client::{TextMagicClient, TextMagicError};
use crate::domain::{NewResource, Page, Params, RawPhoneNumber, Unsubscriber};

const UNSUBSCRIBERS: &str = "unsubscribers";

impl TextMagicClient {
    pub async fn get_unsubscriber(&self, id: u64) -> Result<Unsubscriber, TextMagicError> {
        self.get(&format!("{UNSUBSCRIBERS}/{id}"), None).await
    }

    /// Opt a phone number out of all messaging.
    pub async fn unsubscribe_phone(
        &self,
        phone: &RawPhoneNumber,
    ) -> Result<NewResource, TextMagicError> {
        let params = Params::with(RawPhoneNumber::FIELD, phone.raw())?;
        self.post(UNSUBSCRIBERS, Some(&params)).await
    }

    /// List unsubscribed numbers. Accepted parameters: `page`, `limit`.
    pub async fn get_unsubscriber_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<Unsubscriber>, TextMagicError> {
        self.get(UNSUBSCRIBERS, params).await
    }
}
