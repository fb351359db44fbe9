//! Question record - the unit of classification
//!
//! A record is kept as the ordered JSON object it was loaded from. Typed
//! accessors expose the fields classification reads and writes; everything
//! else passes through a load/save cycle untouched and in place.

use crate::Difficulty;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names used by classification.
pub mod field {
    /// Record identifier
    pub const ID: &str = "id";
    /// Question title
    pub const TITLE: &str = "title";
    /// Question description (multiple-choice shape)
    pub const DESCRIPTION: &str = "description";
    /// Question text (open-question shape), used when `description` is absent
    pub const QUESTION: &str = "question";
    /// Exact-match topic
    pub const TOPIC: &str = "topic";
    /// Difficulty level
    pub const DIFFICULTY: &str = "difficulty";
    /// Topic labels
    pub const TAGS: &str = "tags";
    /// Target positions
    pub const POSITIONS: &str = "positions";
    /// Seniority levels
    pub const SENIORITY_LEVELS: &str = "seniorityLevels";
    /// Interview types
    pub const INTERVIEW_TYPES: &str = "interviewTypes";
    /// Company types
    pub const COMPANY_TYPE: &str = "companyType";
}

/// Identifier reported for records without a string `id`
pub const UNKNOWN_ID: &str = "unknown";

/// Typed view of a list-valued field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListField {
    /// Field absent or `null`
    Missing,

    /// A JSON array; non-string elements are skipped
    Items(Vec<String>),

    /// Present but not an array
    Malformed {
        /// JSON type name of the stored value
        kind: &'static str,
    },
}

impl ListField {
    /// Items of the list, empty when missing or malformed
    pub fn items(&self) -> &[String] {
        match self {
            ListField::Items(items) => items,
            _ => &[],
        }
    }

    /// Owned copy of [`ListField::items`]
    pub fn to_vec(&self) -> Vec<String> {
        self.items().to_vec()
    }

    /// Whether `value` is one of the items
    pub fn contains(&self, value: &str) -> bool {
        self.items().iter().any(|item| item == value)
    }

    /// Whether the stored value is something other than an array or null
    pub fn is_malformed(&self) -> bool {
        matches!(self, ListField::Malformed { .. })
    }

    /// Whether there are no items
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// An interview question with its text and derived metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionRecord {
    fields: Map<String, Value>,
}

impl QuestionRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing JSON object
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Builder-style setter for an arbitrary field
    ///
    /// # Examples
    ///
    /// ```
    /// use qbank_domain::{field, QuestionRecord};
    ///
    /// let record = QuestionRecord::new()
    ///     .with(field::ID, "q-1")
    ///     .with(field::TITLE, "What is a closure?");
    /// assert_eq!(record.id(), "q-1");
    /// ```
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// The underlying JSON object
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Record identifier, or `"unknown"` when absent
    pub fn id(&self) -> &str {
        self.fields
            .get(field::ID)
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ID)
    }

    /// Question title, empty when absent
    pub fn title(&self) -> &str {
        self.text(field::TITLE)
    }

    /// Question body: `description`, falling back to `question`
    pub fn body(&self) -> &str {
        match self.fields.get(field::DESCRIPTION) {
            Some(_) => self.text(field::DESCRIPTION),
            None => self.text(field::QUESTION),
        }
    }

    /// Exact-match topic, if set
    pub fn topic(&self) -> Option<&str> {
        self.fields.get(field::TOPIC).and_then(Value::as_str)
    }

    /// String tags in stored order
    pub fn tags(&self) -> Vec<&str> {
        match self.fields.get(field::TAGS) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Difficulty; a missing or non-string value parses as `Other("")`
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::parse(self.text(field::DIFFICULTY))
    }

    /// Typed view of any list-valued field
    pub fn list(&self, key: &str) -> ListField {
        match self.fields.get(key) {
            None | Some(Value::Null) => ListField::Missing,
            Some(Value::Array(items)) => ListField::Items(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            ),
            Some(other) => ListField::Malformed {
                kind: json_kind(other),
            },
        }
    }

    /// Every stored element of a list-valued field, strings or not
    ///
    /// A bare non-null value is read as a one-item list.
    pub fn list_values(&self, key: &str) -> Vec<Value> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.clone(),
            Some(other) => vec![other.clone()],
        }
    }

    /// Target positions
    pub fn positions(&self) -> ListField {
        self.list(field::POSITIONS)
    }

    /// Seniority levels
    pub fn seniority_levels(&self) -> ListField {
        self.list(field::SENIORITY_LEVELS)
    }

    /// Interview types
    pub fn interview_types(&self) -> ListField {
        self.list(field::INTERVIEW_TYPES)
    }

    /// Company types
    pub fn company_type(&self) -> ListField {
        self.list(field::COMPANY_TYPE)
    }

    /// Replace a list-valued field, keeping its position if it already exists
    pub fn set_list<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let array = values
            .into_iter()
            .map(|v| Value::String(v.into()))
            .collect();
        self.fields.insert(key.to_string(), Value::Array(array));
    }

    /// Replace a list-valued field with arbitrary JSON elements
    pub fn set_values(&mut self, key: &str, values: Vec<Value>) {
        self.fields.insert(key.to_string(), Value::Array(values));
    }

    fn text(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

/// JSON type name, used in shape diagnostics
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> QuestionRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_text_accessors() {
        let r = record(json!({
            "id": "js-001",
            "title": "Closures",
            "description": "Explain closures",
            "topic": "frontend",
            "difficulty": "junior",
            "tags": ["JavaScript", 3, "scope"]
        }));

        assert_eq!(r.id(), "js-001");
        assert_eq!(r.title(), "Closures");
        assert_eq!(r.body(), "Explain closures");
        assert_eq!(r.topic(), Some("frontend"));
        assert_eq!(r.difficulty(), Difficulty::Junior);
        assert_eq!(r.tags(), vec!["JavaScript", "scope"]);
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let r = QuestionRecord::new();
        assert_eq!(r.id(), UNKNOWN_ID);
        assert_eq!(r.title(), "");
        assert_eq!(r.body(), "");
        assert!(r.tags().is_empty());
        assert_eq!(r.difficulty(), Difficulty::Other(String::new()));
        assert_eq!(r.positions(), ListField::Missing);
    }

    #[test]
    fn test_body_falls_back_to_question() {
        let r = record(json!({"question": "What is a mutex?", "answer": "A lock"}));
        assert_eq!(r.body(), "What is a mutex?");

        // An explicit description wins, even when empty
        let r = record(json!({"description": "", "question": "ignored"}));
        assert_eq!(r.body(), "");
    }

    #[test]
    fn test_list_field_shapes() {
        let r = record(json!({
            "positions": ["backend", 1, "devops"],
            "interviewTypes": "regular",
            "companyType": {"a": 1},
            "seniorityLevels": null
        }));

        assert_eq!(
            r.positions(),
            ListField::Items(vec!["backend".to_string(), "devops".to_string()])
        );
        assert_eq!(r.interview_types(), ListField::Malformed { kind: "string" });
        assert_eq!(r.company_type(), ListField::Malformed { kind: "object" });
        assert_eq!(r.seniority_levels(), ListField::Missing);
        assert!(r.interview_types().is_empty());
        assert!(r.positions().contains("devops"));
    }

    #[test]
    fn test_list_values_keep_every_element() {
        let r = record(json!({
            "positions": ["backend", 1, {"x": true}],
            "seniorityLevels": "senior",
            "interviewTypes": null
        }));

        assert_eq!(r.list_values(field::POSITIONS), vec![json!("backend"), json!(1), json!({"x": true})]);
        assert_eq!(r.list_values(field::SENIORITY_LEVELS), vec![json!("senior")]);
        assert!(r.list_values(field::INTERVIEW_TYPES).is_empty());
        assert!(r.list_values(field::COMPANY_TYPE).is_empty());
    }

    #[test]
    fn test_set_values_writes_array() {
        let mut r = record(json!({"positions": "backend"}));
        r.set_values(field::POSITIONS, vec![json!("backend"), json!(7)]);
        assert_eq!(r.fields()[field::POSITIONS], json!(["backend", 7]));
    }

    #[test]
    fn test_set_list_keeps_field_position() {
        let mut r = record(json!({"id": "a", "positions": [], "title": "t"}));
        r.set_list(field::POSITIONS, ["backend"]);
        r.set_list(field::COMPANY_TYPE, ["faang"]);

        let keys: Vec<&String> = r.fields().keys().collect();
        assert_eq!(keys, ["id", "positions", "title", "companyType"]);
        assert_eq!(r.positions().items(), ["backend".to_string()]);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let r = QuestionRecord::new().with("id", "x").with("difficulty", "mid");
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({"id": "x", "difficulty": "mid"})
        );
    }
}
