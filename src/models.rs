//! Resource models for the Graph mail and calendar APIs
//!
//! Wire shapes follow Graph's camelCase JSON. Response-side optionals are
//! lenient (`#[serde(default)]`); request-side optionals are skipped when
//! unset, so partial updates only carry the fields the caller filled in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope the api wraps collections in: `{"value": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

/// Minimal error shape returned on failure paths that carry a body,
/// e.g. the mail-send endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorPayload {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EmailAddress {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub email_address: EmailAddress,
}

impl Recipient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            email_address: EmailAddress {
                address: address.into(),
                name: None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyContentType {
    Text,
    Html,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    pub content_type: BodyContentType,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Normal,
    High,
}

/// A mail message, used both for reading and for drafts/sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<ItemBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Recipient>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_recipients: Vec<Recipient>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc_recipients: Vec<Recipient>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc_recipients: Vec<Recipient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_attachments: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MailFolder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_folder_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unread_item_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_item_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_share: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<EmailAddress>,
}

/// Date/time paired with the time zone it is expressed in, as the calendar
/// api represents event boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeTimeZone {
    pub date_time: String,
    pub time_zone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttendeeType {
    Required,
    Optional,
    Resource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub email_address: EmailAddress,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub attendee_type: Option<AttendeeType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventShowAs {
    Free,
    Tentative,
    Busy,
    Oof,
    WorkingElsewhere,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<ItemBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTimeTimeZone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTimeTimeZone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<Attendee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<Recipient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_all_day: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_cancelled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_as: Option<EventShowAs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_online_meeting: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_meeting_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserializes_graph_message_json() {
        let json = r#"{
            "id": "AAMkADNkNmFh=",
            "subject": "Weekly sync",
            "bodyPreview": "Agenda attached",
            "from": { "emailAddress": { "address": "boss@contoso.com", "name": "Boss" } },
            "toRecipients": [
                { "emailAddress": { "address": "me@contoso.com" } }
            ],
            "importance": "high",
            "isRead": false,
            "receivedDateTime": "2023-04-05T06:07:08Z"
        }"#;

        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.id.as_deref(), Some("AAMkADNkNmFh="));
        assert_eq!(message.subject.as_deref(), Some("Weekly sync"));
        assert_eq!(message.importance, Some(Importance::High));
        assert_eq!(message.is_read, Some(false));
        assert_eq!(message.to_recipients.len(), 1);
        assert_eq!(
            message.from.unwrap().email_address.address,
            "boss@contoso.com"
        );
        assert!(message.received_date_time.is_some());
    }

    #[test]
    fn message_round_trips_without_dropping_fields() {
        let message = Message {
            subject: Some("Lunch?".to_string()),
            body: Some(ItemBody {
                content_type: BodyContentType::Text,
                content: "Noon at the usual place".to_string(),
            }),
            to_recipients: vec![Recipient::new("friend@example.com")],
            cc_recipients: vec![Recipient::new("other@example.com")],
            importance: Some(Importance::Normal),
            ..Message::default()
        };

        let value = serde_json::to_value(&message).unwrap();
        let decoded: Message = serde_json::from_value(value).unwrap();
        assert_eq!(message, decoded);
    }

    #[test]
    fn serialized_message_uses_camel_case_and_skips_unset_fields() {
        let message = Message {
            subject: Some("Hi".to_string()),
            to_recipients: vec![Recipient::new("a@b.c")],
            ..Message::default()
        };

        let value = serde_json::to_value(&message).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("toRecipients"));
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("ccRecipients"));
    }

    #[test]
    fn deserializes_list_envelope() {
        let json = r#"{ "value": [ { "id": "cal-1", "name": "Calendar" } ] }"#;
        let list: ListResponse<Calendar> = serde_json::from_str(json).unwrap();
        assert_eq!(list.value.len(), 1);
        assert_eq!(list.value[0].name.as_deref(), Some("Calendar"));
    }

    #[test]
    fn event_show_as_uses_camel_case_wire_names() {
        let json = serde_json::to_string(&EventShowAs::WorkingElsewhere).unwrap();
        assert_eq!(json, "\"workingElsewhere\"");
    }
}
