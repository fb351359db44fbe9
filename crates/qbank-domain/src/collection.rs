//! Collection module - a named document of question groups

use crate::QuestionRecord;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Errors raised while interpreting a collection document
#[derive(Debug, Error, PartialEq)]
pub enum CollectionError {
    /// The document root is not a JSON object
    #[error("Collection '{0}' is not a JSON object")]
    NotAnObject(String),

    /// A question group is present but is not an array
    #[error("Collection '{collection}': '{group}' is not an array")]
    GroupNotArray {
        /// Collection name
        collection: String,
        /// Group key
        group: &'static str,
    },

    /// A question group holds something other than an object
    #[error("Collection '{collection}': {group}[{index}] is not an object")]
    RecordNotObject {
        /// Collection name
        collection: String,
        /// Group key
        group: &'static str,
        /// Position in the group
        index: usize,
    },
}

/// The two record groupings of a collection
///
/// Grouping kind never affects classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuestionGroup {
    /// Open-ended questions
    OpenEnded,

    /// Multiple-choice questions
    MultipleChoice,
}

impl QuestionGroup {
    /// Both groups, in processing order
    pub const ALL: [QuestionGroup; 2] = [QuestionGroup::OpenEnded, QuestionGroup::MultipleChoice];

    /// Key of the group in a collection document
    pub fn key(&self) -> &'static str {
        match self {
            QuestionGroup::OpenEnded => "open_questions",
            QuestionGroup::MultipleChoice => "mcq_questions",
        }
    }
}

impl fmt::Display for QuestionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A named collection of question records
///
/// Top-level keys other than the two groups are preserved, as is key order.
/// A group absent from the loaded document stays absent when saved.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    name: String,
    document: Map<String, Value>,
    open_questions: Option<Vec<QuestionRecord>>,
    mcq_questions: Option<Vec<QuestionRecord>>,
}

impl Collection {
    /// Create an empty collection with no groups
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            document: Map::new(),
            open_questions: None,
            mcq_questions: None,
        }
    }

    /// Builder-style setter for a whole group
    pub fn with_group(mut self, group: QuestionGroup, records: Vec<QuestionRecord>) -> Self {
        // Reserve the key so the group serializes in insertion order
        self.document.insert(group.key().to_string(), Value::Null);
        *self.slot_mut(group) = Some(records);
        self
    }

    /// Interpret a parsed JSON document as a collection
    pub fn from_document(name: impl Into<String>, document: Value) -> Result<Self, CollectionError> {
        let name = name.into();
        let mut document = match document {
            Value::Object(map) => map,
            _ => return Err(CollectionError::NotAnObject(name)),
        };

        let mut collection = Self::new(name);
        for group in QuestionGroup::ALL {
            let Some(slot) = document.get_mut(group.key()) else {
                continue;
            };
            // Leave a placeholder so the key keeps its position
            let records = match std::mem::take(slot) {
                Value::Array(items) => items,
                _ => {
                    return Err(CollectionError::GroupNotArray {
                        collection: collection.name,
                        group: group.key(),
                    })
                }
            };

            let mut parsed = Vec::with_capacity(records.len());
            for (index, item) in records.into_iter().enumerate() {
                match item {
                    Value::Object(fields) => parsed.push(QuestionRecord::from_fields(fields)),
                    _ => {
                        return Err(CollectionError::RecordNotObject {
                            collection: collection.name,
                            group: group.key(),
                            index,
                        })
                    }
                }
            }
            *collection.slot_mut(group) = Some(parsed);
        }

        collection.document = document;
        Ok(collection)
    }

    /// Rebuild the JSON document, groups in their original positions
    pub fn to_document(&self) -> Value {
        let mut document = self.document.clone();
        for group in QuestionGroup::ALL {
            if let Some(records) = self.slot(group) {
                let array = records
                    .iter()
                    .map(|r| Value::Object(r.fields().clone()))
                    .collect();
                document.insert(group.key().to_string(), Value::Array(array));
            }
        }
        Value::Object(document)
    }

    /// Collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records of one group, empty when the group is absent
    pub fn group(&self, group: QuestionGroup) -> &[QuestionRecord] {
        self.slot(group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the group exists in the document
    pub fn has_group(&self, group: QuestionGroup) -> bool {
        self.slot(group).is_some()
    }

    /// Every record with its group, open-ended first
    pub fn records(&self) -> impl Iterator<Item = (QuestionGroup, &QuestionRecord)> {
        QuestionGroup::ALL
            .into_iter()
            .flat_map(move |g| self.group(g).iter().map(move |r| (g, r)))
    }

    /// Mutable access to every record, open-ended first
    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut QuestionRecord> {
        self.open_questions
            .iter_mut()
            .chain(self.mcq_questions.iter_mut())
            .flat_map(|records| records.iter_mut())
    }

    /// Total number of records across both groups
    pub fn len(&self) -> usize {
        QuestionGroup::ALL.iter().map(|g| self.group(*g).len()).sum()
    }

    /// Whether the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, group: QuestionGroup) -> Option<&Vec<QuestionRecord>> {
        match group {
            QuestionGroup::OpenEnded => self.open_questions.as_ref(),
            QuestionGroup::MultipleChoice => self.mcq_questions.as_ref(),
        }
    }

    fn slot_mut(&mut self, group: QuestionGroup) -> &mut Option<Vec<QuestionRecord>> {
        match group {
            QuestionGroup::OpenEnded => &mut self.open_questions,
            QuestionGroup::MultipleChoice => &mut self.mcq_questions,
        }
    }
}
