use std::collections::BTreeMap;

use crate::client::{TextMagicClient, TextMagicError};
use crate::domain::{MessagingStat, Page, Params, SpendingStat, User};

const USER: &str = "user";
const SUBACCOUNTS: &str = "subaccounts";
const STATS: &str = "stats";

impl TextMagicClient {
    /// The account the credentials belong to.
    pub async fn get_user(&self) -> Result<User, TextMagicError> {
        self.get(USER, None).await
    }

    /// Update the current user.
    ///
    /// Accepted parameters: `firstName`, `lastName`, `company`, all required. The response
    /// shape is not documented beyond a flat object, so it is returned as-is.
    pub async fn update_user(
        &self,
        params: &Params,
    ) -> Result<BTreeMap<String, serde_json::Value>, TextMagicError> {
        self.put(USER, Some(params)).await
    }

    pub async fn get_subaccount(&self, id: u64) -> Result<User, TextMagicError> {
        self.get(&format!("{SUBACCOUNTS}/{id}"), None).await
    }

    /// List sub-accounts. Accepted parameters: `page`, `limit`.
    pub async fn get_subaccount_list(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<User>, TextMagicError> {
        self.get(SUBACCOUNTS, params).await
    }

    /// Invite a new sub-account.
    ///
    /// Accepted parameters: `email` and `role` (`A` administrator, `U` user), both required.
    pub async fn send_invite(&self, params: &Params) -> Result<(), TextMagicError> {
        self.post_unit(SUBACCOUNTS, Some(params)).await
    }

    pub async fn close_subaccount(&self, id: u64) -> Result<(), TextMagicError> {
        self.delete(&format!("{SUBACCOUNTS}/{id}"), None).await
    }

    /// Messaging statistics.
    ///
    /// Accepted parameters: `by` (`off`, `day`, `month`, `year`), `start`, `end` (Unix
    /// timestamps).
    pub async fn get_messaging_stat(
        &self,
        params: Option<&Params>,
    ) -> Result<Vec<MessagingStat>, TextMagicError> {
        self.get(&format!("{STATS}/messaging"), params).await
    }

    /// Spending statistics. Accepted parameters: `page`, `limit`, `start`, `end`.
    pub async fn get_spending_stat(
        &self,
        params: Option<&Params>,
    ) -> Result<Page<SpendingStat>, TextMagicError> {
        self.get(&format!("{STATS}/spending"), params).await
    }
}
