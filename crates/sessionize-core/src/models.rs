use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Free-form event metadata: a JSON object keyed by string.
pub type Meta = Map<String, Value>;

/// A single timestamped user event.
///
/// Decoding is strict for the required fields: a missing or mistyped
/// `user_id`, `ts` or `type` is a deserialization error. `meta` may be
/// absent or `null`, both of which mean an empty mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Identifier of the user that produced the event.
    pub user_id: String,
    /// Integer timestamp in seconds.
    pub ts: i64,
    /// Event kind, e.g. `"click"` or `"view"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Arbitrary metadata attached to the event.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meta: Meta,
}

impl Event {
    /// Build an event with empty metadata.
    pub fn new(user_id: impl Into<String>, ts: i64, event_type: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ts,
            event_type: event_type.into(),
            meta: Meta::new(),
        }
    }

    /// Replace the event's metadata.
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }
}

/// A maximal run of one user's events with no gap above the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// User all member events belong to.
    pub user_id: String,
    /// Earliest member timestamp.
    pub start_ts: i64,
    /// Latest member timestamp.
    pub end_ts: i64,
    /// Distinct event types in order of first occurrence.
    pub types: Vec<String>,
    /// Deep-merged metadata of all members, earliest value winning.
    pub meta: Meta,
    /// Number of member events. Not part of the serialized form.
    #[serde(skip)]
    pub event_count: usize,
}

impl Session {
    /// Seconds between the first and the last member event.
    pub fn duration_seconds(&self) -> u64 {
        self.end_ts.abs_diff(self.start_ts)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Meta, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Meta>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_deserializes_type_field() {
        let event: Event = serde_json::from_value(json!({
            "user_id": "u1",
            "ts": 1000,
            "type": "click",
            "meta": {"page": "/"},
        }))
        .unwrap();

        assert_eq!(event.user_id, "u1");
        assert_eq!(event.ts, 1000);
        assert_eq!(event.event_type, "click");
        assert_eq!(event.meta.get("page"), Some(&json!("/")));
    }

    #[test]
    fn test_event_missing_meta_is_empty() {
        let event: Event =
            serde_json::from_value(json!({"user_id": "u1", "ts": 1, "type": "view"})).unwrap();
        assert!(event.meta.is_empty());
    }

    #[test]
    fn test_event_null_meta_is_empty() {
        let event: Event = serde_json::from_value(
            json!({"user_id": "u1", "ts": 1, "type": "view", "meta": null}),
        )
        .unwrap();
        assert!(event.meta.is_empty());
    }

    #[test]
    fn test_event_missing_required_field_is_error() {
        let missing_user = json!({"ts": 1, "type": "view"});
        let missing_ts = json!({"user_id": "u1", "type": "view"});
        let missing_type = json!({"user_id": "u1", "ts": 1});

        assert!(serde_json::from_value::<Event>(missing_user).is_err());
        assert!(serde_json::from_value::<Event>(missing_ts).is_err());
        assert!(serde_json::from_value::<Event>(missing_type).is_err());
    }

    #[test]
    fn test_event_wrong_field_type_is_error() {
        let string_ts = json!({"user_id": "u1", "ts": "1000", "type": "view"});
        let numeric_user = json!({"user_id": 42, "ts": 1000, "type": "view"});
        let list_meta = json!({"user_id": "u1", "ts": 1000, "type": "view", "meta": [1]});

        assert!(serde_json::from_value::<Event>(string_ts).is_err());
        assert!(serde_json::from_value::<Event>(numeric_user).is_err());
        assert!(serde_json::from_value::<Event>(list_meta).is_err());
    }

    #[test]
    fn test_event_serializes_as_type() {
        let value = serde_json::to_value(Event::new("u1", 5, "scroll")).unwrap();
        assert_eq!(value["type"], json!("scroll"));
        assert!(value.get("event_type").is_none());
    }

    #[test]
    fn test_session_serialized_field_set() {
        let session = Session {
            user_id: "u1".to_string(),
            start_ts: 1000,
            end_ts: 1500,
            types: vec!["click".to_string(), "view".to_string()],
            meta: Meta::new(),
            event_count: 2,
        };
        let value = serde_json::to_value(&session).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["end_ts", "meta", "start_ts", "types", "user_id"]);
    }

    #[test]
    fn test_session_duration_seconds() {
        let session = Session {
            user_id: "u1".to_string(),
            start_ts: 1000,
            end_ts: 1600,
            types: Vec::new(),
            meta: Meta::new(),
            event_count: 2,
        };
        assert_eq!(session.duration_seconds(), 600);
    }
}
