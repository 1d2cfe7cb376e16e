use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Currency {
    pub id: String,
    pub html_symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Timezone {
    pub id: u64,
    pub area: String,
    pub dst: i32,
    pub offset: i32,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// The account owner or one of its sub-accounts.
pub struct User {
    pub id: u64,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub status: String,
    pub balance: f64,
    pub company: Option<String>,
    pub currency: Option<Currency>,
    pub timezone: Option<Timezone>,
    pub subaccount_type: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Messaging counters for one reporting period.
pub struct MessagingStat {
    pub reply_rate: f64,
    pub date: String,
    pub delivery_rate: f64,
    pub costs: f64,
    pub messages_received: u64,
    pub messages_sent_delivered: u64,
    pub messages_sent_accepted: u64,
    pub messages_sent_buffered: u64,
    pub messages_sent_failed: u64,
    pub messages_sent_rejected: u64,
    pub messages_sent_parts: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// One balance movement.
pub struct SpendingStat {
    pub id: u64,
    pub user_id: u64,
    pub date: String,
    pub balance: f64,
    pub delta: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub comment: Option<String>,
}
