use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomField {
    pub id: u64,
    pub name: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// A custom field together with the value stored for one contact.
pub struct ContactCustomField {
    pub id: u64,
    pub name: String,
    pub created_at: String,
    pub value: String,
}
