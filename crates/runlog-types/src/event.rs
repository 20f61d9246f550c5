//! Simulation events recorded in a run log.
//!
//! The simulation emits an open-ended set of event tags (`damage_trace`,
//! chemistry events, scenario markers, ...). Fields are deserialized
//! leniently so a document containing unusual events still parses as a
//! whole; a consumer that actually reports an event enforces the fields it
//! needs at access time.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One discrete occurrence in a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// The event tag, e.g. `reproduction`, `death`, `mutation`.
    ///
    /// `None` when the producer omitted the field. Reporting such an event
    /// is an error; carrying it through an otherwise valid log is not.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// The simulation tick at which the event occurred.
    pub frame_number: Option<i64>,
    /// Tag-dependent payload, opaque to generic consumers.
    pub data: Option<Value>,
}

impl Event {
    /// Whether this event carries one of the tags included in reports.
    ///
    /// Events without a tag return `false` here; callers that need to
    /// distinguish "untagged" from "unreported" check [`Event::kind`]
    /// directly.
    pub fn is_reported(&self) -> bool {
        self.kind.as_deref().is_some_and(kinds::is_reported)
    }
}

/// Well-known event tags surfaced by the log reporter.
///
/// These correspond to the `type` values the simulation writes for the
/// lifecycle events of interest. The full tag set in real logs is larger
/// and open-ended.
pub mod kinds {
    /// A cell spawned offspring.
    pub const REPRODUCTION: &str = "reproduction";
    /// A cell died.
    pub const DEATH: &str = "death";
    /// A genome changed during reproduction.
    pub const MUTATION: &str = "mutation";

    /// Whether a tag is one of the kinds included in the report.
    pub fn is_reported(tag: &str) -> bool {
        matches!(tag, REPRODUCTION | DEATH | MUTATION)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn reported_kinds() {
        assert!(kinds::is_reported("reproduction"));
        assert!(kinds::is_reported("death"));
        assert!(kinds::is_reported("mutation"));
        assert!(!kinds::is_reported("damage_trace"));
        assert!(!kinds::is_reported("birth"));
        assert!(!kinds::is_reported(""));
    }

    #[test]
    fn event_parses_with_all_fields() {
        let event: Event = serde_json::from_str(
            r#"{"type": "mutation", "frame_number": 42, "data": {"x": 1}}"#,
        )
        .unwrap();
        assert_eq!(event.kind.as_deref(), Some("mutation"));
        assert_eq!(event.frame_number, Some(42));
        assert!(event.is_reported());
    }

    #[test]
    fn event_parses_without_type() {
        // Lenient parse: a missing tag is an access-time problem, not a
        // parse-time one.
        let event: Event = serde_json::from_str(r#"{"frame_number": 7}"#).unwrap();
        assert_eq!(event.kind, None);
        assert_eq!(event.data, None);
        assert!(!event.is_reported());
    }

    #[test]
    fn event_ignores_producer_extras() {
        let event: Event = serde_json::from_str(
            r#"{"type": "death", "frame_number": 9, "cell_id": "c-104", "data": null}"#,
        )
        .unwrap();
        assert_eq!(event.kind.as_deref(), Some("death"));
        assert_eq!(event.data, None);
    }
}
