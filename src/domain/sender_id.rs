use serde::Deserialize;

use crate::domain::user::User;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// An alphanumeric sender ID registered for the account.
pub struct SenderId {
    pub id: u64,
    pub sender_id: String,
    pub user: Option<User>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Values accepted by the `from` parameter when sending messages.
pub struct Sources {
    pub dedicated: Vec<String>,
    pub user: Vec<String>,
    pub shared: Vec<String>,
    pub sender_ids: Vec<String>,
}
