use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// A contact list.
pub struct List {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub members_count: u64,
    pub shared: bool,
}
