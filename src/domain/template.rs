use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// A message template. `content` may contain `{tags}` substituted at send time.
pub struct Template {
    pub id: u64,
    pub name: String,
    pub content: String,
    pub last_modified: String,
}
