use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// A phone number that opted out of messaging.
pub struct Unsubscriber {
    pub id: u64,
    pub phone: String,
    pub unsubscribe_time: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
