//! Record assembly — merges everything into one immutable output value.
//!
//! The `Record` struct is the output projection: fields are declared in the
//! fixed allow-list order, absent optional fields are omitted from
//! serialization, and `review_link`/`message_thread` serialize as string or
//! explicit null per the wire contract. Assembly is pure construction; no
//! shared structure is ever mutated.

use serde::{Deserialize, Serialize};

use innbox_core::RawMessage;

use crate::fields::ExtractedFields;
use crate::thread::serialize_thread;

/// One fully-assembled review record, in output allow-list order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Literal digit string as captured from the body — not a validated
    /// integer, and out-of-range values pass through unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_text: Option<String>,
    /// String or explicit null at the wire boundary.
    pub review_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    pub keywords: Vec<String>,
    pub has_suggestion: bool,
    /// Thread segments joined with the fixed separator; string or explicit
    /// null at the wire boundary.
    pub message_thread: Option<String>,
}

/// Assemble one record from its computed parts. Pure construction — the
/// inputs are consumed or copied, never mutated in place.
pub fn assemble(
    raw: &RawMessage,
    fields: ExtractedFields,
    thread: Option<Vec<String>>,
    keywords: Vec<String>,
    has_suggestion: bool,
) -> Record {
    Record {
        from: raw.from.clone(),
        to: raw.to.clone(),
        subject: raw.subject.clone(),
        date: raw.date.clone(),
        body: raw.body.clone(),
        customer_name: fields.customer_name,
        rating: fields.rating,
        place: fields.place,
        review_text: fields.review_text,
        review_link: fields.review_link,
        dates: fields.dates,
        keywords,
        has_suggestion,
        message_thread: thread.as_deref().map(serialize_thread),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The fixed output allow-list, in order.
    const ALLOW_LIST: &[&str] = &[
        "from",
        "to",
        "subject",
        "date",
        "body",
        "customer_name",
        "rating",
        "place",
        "review_text",
        "review_link",
        "dates",
        "keywords",
        "has_suggestion",
        "message_thread",
    ];

    fn sample_record() -> Record {
        let raw = RawMessage {
            subject: Some("Alice wrote you a review".to_string()),
            from: Some("Airbnb <automated@airbnb.com>".to_string()),
            to: Some("host@example.com".to_string()),
            date: Some("Mon, 16 Jun 2025 10:00:00 +0000".to_string()),
            body: Some("body text".to_string()),
        };
        let fields = ExtractedFields {
            customer_name: Some("Alice".to_string()),
            rating: Some("5".to_string()),
            place: Some("Seaside Cottage".to_string()),
            review_text: Some("Lovely stay.".to_string()),
            dates: Some("Jun 10 – 12".to_string()),
            review_link: Some("https://example.com/review/1".to_string()),
        };
        let thread = Some(vec!["first".to_string(), "second".to_string()]);
        assemble(&raw, fields, thread, vec!["lovely stay".to_string()], true)
    }

    #[test]
    fn test_all_present_fields_serialize_in_allow_list_order() {
        // Order is observable in the serialized text; `to_value` would sort
        // keys and hide it.
        let json = serde_json::to_string(&sample_record()).unwrap();
        let mut last = 0;
        for field in ALLOW_LIST {
            let needle = format!("\"{field}\":");
            let pos = json
                .find(&needle)
                .unwrap_or_else(|| panic!("missing field {field}"));
            assert!(pos >= last, "field {field} out of allow-list order");
            last = pos;
        }
    }

    #[test]
    fn test_no_fields_outside_allow_list() {
        let value = serde_json::to_value(sample_record()).unwrap();
        for key in value.as_object().unwrap().keys() {
            assert!(ALLOW_LIST.contains(&key.as_str()), "unexpected field {key}");
        }
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let record = assemble(&RawMessage::default(), ExtractedFields::default(), None, vec![], false);
        let value = serde_json::to_value(record).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("subject"));
        assert!(!object.contains_key("customer_name"));
        assert!(!object.contains_key("rating"));
    }

    #[test]
    fn test_nullable_wire_fields_are_explicit_null() {
        let record = assemble(&RawMessage::default(), ExtractedFields::default(), None, vec![], false);
        let value = serde_json::to_value(record).unwrap();
        let object = value.as_object().unwrap();
        assert!(object["review_link"].is_null());
        assert!(object["message_thread"].is_null());
        assert_eq!(object["keywords"], serde_json::json!([]));
        assert_eq!(object["has_suggestion"], serde_json::json!(false));
    }

    #[test]
    fn test_thread_serialized_with_fixed_separator() {
        let record = sample_record();
        assert_eq!(record.message_thread.as_deref(), Some("first\n\n---\n\nsecond"));
    }

    #[test]
    fn test_rating_stays_a_string() {
        let value = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(value["rating"], serde_json::json!("5"));
    }
}
