use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One page of a paginated listing.
pub struct Page<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default = "Vec::new")]
    pub resources: Vec<T>,
}

impl<T> Page<T> {
    /// `true` when there is no page after this one.
    pub fn is_last(&self) -> bool {
        self.page >= self.page_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
/// Link to a created or updated resource.
pub struct NewResource {
    pub id: u64,
    #[serde(default)]
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
/// Error document returned by TextMagic for non-success statuses.
///
/// `errors` maps a request field to its detail (usually a list of messages).
pub struct ApiError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_empty_map")]
    pub errors: BTreeMap<String, serde_json::Value>,
}

impl ApiError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: BTreeMap::new(),
        }
    }

    /// Detail for a single request field, if the server reported one.
    pub fn field_error(&self, field: &str) -> Option<&serde_json::Value> {
        self.errors.get(field)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextMagic API error {}", self.code)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if !self.errors.is_empty() {
            let fields = self.errors.keys().map(String::as_str).collect::<Vec<_>>();
            write!(f, " (fields: {})", fields.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

fn null_as_empty_map<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    // The API sends `"errors": []` or `null` when there are no field errors.
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Ok(BTreeMap::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_code_message_and_fields() {
        let err: ApiError = serde_json::from_str(
            r#"{"code": 400, "message": "Validation Failed", "errors": {"phone": ["This value should not be blank."]}}"#,
        )
        .unwrap();
        assert_eq!(
            err.to_string(),
            "TextMagic API error 400: Validation Failed (fields: phone)"
        );
        assert!(err.field_error("phone").is_some());
    }

    #[test]
    fn api_error_tolerates_empty_errors_shapes() {
        for json in [
            r#"{"code": 404, "message": "Not found", "errors": []}"#,
            r#"{"code": 404, "message": "Not found", "errors": null}"#,
            r#"{"code": 404, "message": "Not found"}"#,
        ] {
            let err: ApiError = serde_json::from_str(json).unwrap();
            assert_eq!(err, ApiError::new(404, "Not found"));
        }
    }

    #[test]
    fn page_decodes_pagination_fields() {
        let page: Page<NewResource> = serde_json::from_str(
            r#"{"page": 2, "limit": 10, "pageCount": 2, "resources": [{"id": 5, "href": "/api/v2/lists/5"}]}"#,
        )
        .unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.page_count, 2);
        assert!(page.is_last());
        assert_eq!(page.resources[0].id, 5);
    }
}
