use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::contact::Contact;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Result of `POST messages`.
///
/// `kind` tells which of the ids is meaningful: a single `message`, a `session`, a `bulk`
/// send or a `schedule`.
pub struct NewMessage {
    pub id: u64,
    pub href: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub session_id: u64,
    pub bulk_id: u64,
    pub message_id: u64,
    pub schedule_id: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// An outbound message.
pub struct Message {
    pub id: u64,
    pub receiver: String,
    pub message_time: String,
    pub status: String,
    pub text: String,
    pub charset: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: String,
    pub sender: String,
    pub price: f64,
    pub parts_count: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// A sending session (one `POST messages` call).
pub struct Session {
    pub id: u64,
    pub start_time: String,
    pub text: String,
    pub source: String,
    pub reference_id: Option<String>,
    pub price: f64,
    pub numbers_count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkSession {
    pub id: u64,
    pub status: String,
    pub items_processed: u64,
    pub items_total: u64,
    pub created_at: String,
    pub session: Option<Session>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Chat {
    pub id: u64,
    pub phone: String,
    pub contact: Option<Contact>,
    pub unread: u64,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: String,
    pub message_time: String,
    pub text: String,
    pub receiver: String,
    pub status: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CountryPrice {
    pub country: String,
    pub count: u64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
/// Price estimate for a message that has not been sent.
pub struct MessagePrice {
    pub total: f64,
    pub parts: u32,
    pub countries: BTreeMap<String, CountryPrice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// An inbound message.
pub struct Reply {
    pub id: u64,
    pub sender: String,
    pub message_time: String,
    pub text: String,
    pub receiver: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// A scheduled (possibly recurring) send.
pub struct Scheduled {
    pub id: u64,
    pub next_send: String,
    /// iCal RRULE for recurring sends.
    pub rrule: Option<String>,
    pub session: Option<Session>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_message_maps_type_keyword() {
        let created: NewMessage = serde_json::from_str(
            r#"{"id": 9, "href": "/api/v2/sessions/9", "type": "session", "sessionId": 9, "bulkId": 0, "messageId": 0, "scheduleId": 0}"#,
        )
        .unwrap();
        assert_eq!(created.kind, "session");
        assert_eq!(created.session_id, 9);
    }

    #[test]
    fn message_price_decodes_country_breakdown() {
        let price: MessagePrice = serde_json::from_str(
            r#"{"total": 0.08, "parts": 1, "countries": {"GB": {"country": "GB", "count": 2, "max": 0.04}}}"#,
        )
        .unwrap();
        assert_eq!(price.parts, 1);
        assert_eq!(price.countries["GB"].count, 2);
    }

    #[test]
    fn scheduled_tolerates_missing_session() {
        let scheduled: Scheduled = serde_json::from_str(
            r#"{"id": 3, "nextSend": "2015-01-01T10:00:00+0000", "rrule": null}"#,
        )
        .unwrap();
        assert_eq!(scheduled.id, 3);
        assert!(scheduled.session.is_none());
        assert!(scheduled.rrule.is_none());
    }
}
