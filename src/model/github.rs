//! Records in the shape the GitHub issue importer expects, one JSON file per
//! issue or milestone.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub user: String,
    pub state: State,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Destination milestone number, not the source id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
    /// Always present, even when empty.
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub body: String,
    pub user: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub number: u64,
    pub state: State,
    pub title: String,
    /// `null` when the source milestone had no goals text.
    pub description: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_on: Option<DateTime<FixedOffset>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn issue_round_trips_json() {
        let issue = Issue {
            number: 142,
            title: "Crash on startup".into(),
            body: "It crashes.".into(),
            user: "daniele".into(),
            state: State::Closed,
            created_at: at("2011-03-20T01:07:40-07:00"),
            updated_at: at("2011-03-21T09:00:00-07:00"),
            closed_at: Some(at("2011-03-21T09:00:00-07:00")),
            assignee: Some("marco".into()),
            milestone: Some(2),
            labels: vec!["confirmed".into(), "enhancement".into()],
        };

        let json = serde_json::to_string_pretty(&issue).unwrap();
        let parsed: Issue = serde_json::from_str(&json).unwrap();
        assert_eq!(issue, parsed);
    }

    #[test]
    fn open_issue_omits_optional_fields() {
        let issue = Issue {
            number: 1,
            title: "t".into(),
            body: "b".into(),
            user: "u".into(),
            state: State::Open,
            created_at: at("2011-01-01T00:00:00Z"),
            updated_at: at("2011-01-01T00:00:00Z"),
            closed_at: None,
            assignee: None,
            milestone: None,
            labels: vec![],
        };

        let json = serde_json::to_string(&issue).unwrap();
        assert!(!json.contains("closed_at"));
        assert!(!json.contains("assignee"));
        assert!(!json.contains("milestone"));
        assert!(json.contains(r#""labels":[]"#));
        assert!(json.contains(r#""state":"open""#));
    }

    #[test]
    fn milestone_keeps_null_description_and_drops_missing_due_date() {
        let milestone = Milestone {
            number: 1,
            state: State::Closed,
            title: "v1.0".into(),
            description: None,
            created_at: at("2010-11-01T12:00:00-07:00"),
            due_on: None,
        };

        let json = serde_json::to_string(&milestone).unwrap();
        assert!(json.contains(r#""description":null"#));
        assert!(!json.contains("due_on"));
    }

    #[test]
    fn timestamps_keep_their_utc_offset() {
        let comment = Comment {
            body: "b".into(),
            user: "u".into(),
            created_at: at("2011-03-20T01:07:40-07:00"),
            updated_at: at("2011-03-20T01:07:40-07:00"),
        };

        let json = serde_json::to_string(&comment).unwrap();
        assert!(json.contains("2011-03-20T01:07:40-07:00"));
    }
}
