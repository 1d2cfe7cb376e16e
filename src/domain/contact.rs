use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::custom_field::ContactCustomField;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// A contact from the address book.
pub struct Contact {
    pub id: u64,
    pub phone: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(rename = "companyName")]
    pub company: Option<String>,
    pub email: Option<String>,
    /// Country descriptor as sent by the API (`id`, `name`).
    pub country: Option<BTreeMap<String, String>>,
    pub custom_fields: Vec<ContactCustomField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_contact_with_nested_custom_fields() {
        let contact: Contact = serde_json::from_str(
            r#"{
              "id": 42,
              "phone": "447860021130",
              "firstName": "Ada",
              "lastName": null,
              "companyName": "Engines",
              "country": {"id": "GB", "name": "United Kingdom"},
              "customFields": [
                {"id": 1, "name": "Birthday", "value": "1815-12-10", "createdAt": "2015-01-01T00:00:00+0000"}
              ]
            }"#,
        )
        .unwrap();

        assert_eq!(contact.id, 42);
        assert_eq!(contact.first_name.as_deref(), Some("Ada"));
        assert_eq!(contact.last_name, None);
        assert_eq!(contact.company.as_deref(), Some("Engines"));
        assert_eq!(
            contact
                .country
                .as_ref()
                .and_then(|country| country.get("id"))
                .map(String::as_str),
            Some("GB")
        );
        assert_eq!(contact.custom_fields[0].value, "1815-12-10");
    }
}
