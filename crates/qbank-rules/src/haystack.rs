//! Lowercased classification text of a record

use crate::rule::{MatchMode, TextScope};
use qbank_domain::QuestionRecord;

/// Lowercased text a record is classified on, built once per record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Haystack {
    title_body: String,
    title_body_tags: String,
}

impl Haystack {
    /// Build both scopes from a record
    pub fn from_record(record: &QuestionRecord) -> Self {
        let title_body = format!("{} {}", record.title(), record.body()).to_lowercase();
        let tags = record.tags().join(" ").to_lowercase();
        let title_body_tags = format!("{} {}", title_body, tags);
        Self {
            title_body,
            title_body_tags,
        }
    }

    /// Text for a scope
    pub fn text(&self, scope: TextScope) -> &str {
        match scope {
            TextScope::TitleBody => &self.title_body,
            TextScope::TitleBodyTags => &self.title_body_tags,
        }
    }
}

/// Whether `keyword` occurs in `haystack` under `mode`
///
/// Both sides are expected lowercase. An empty keyword never matches.
///
/// # Examples
///
/// ```
/// use qbank_rules::{keyword_matches, MatchMode};
///
/// assert!(keyword_matches("explain the borrow checker", "ai", MatchMode::Substring));
/// assert!(!keyword_matches("explain the borrow checker", "ai", MatchMode::Word));
/// ```
pub fn keyword_matches(haystack: &str, keyword: &str, mode: MatchMode) -> bool {
    if keyword.is_empty() {
        return false;
    }
    match mode {
        MatchMode::Substring => haystack.contains(keyword),
        MatchMode::Word => haystack.match_indices(keyword).any(|(start, _)| {
            let end = start + keyword.len();
            let before = haystack[..start].chars().next_back();
            let after = haystack[end..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        }),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
