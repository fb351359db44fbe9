//! Difficulty module - the closed difficulty scale of a question

use std::fmt;

/// Difficulty of an interview question
///
/// Rules only ever match the four known levels. Anything else found in a
/// collection is kept verbatim in [`Difficulty::Other`] so it survives a
/// rewrite, but no difficulty-conditioned rule fires for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Foundational questions for people entering the field
    Entry,

    /// Junior engineers
    Junior,

    /// Mid-level engineers
    Mid,

    /// Senior engineers
    Senior,

    /// Any value outside the known scale (including a missing field, as "")
    Other(String),
}

impl Difficulty {
    /// Get the difficulty name as stored in a record
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Entry => "entry",
            Difficulty::Junior => "junior",
            Difficulty::Mid => "mid",
            Difficulty::Senior => "senior",
            Difficulty::Other(raw) => raw,
        }
    }

    /// Parse a stored difficulty value
    ///
    /// Matching is exact: `"Senior"` is not `senior`.
    pub fn parse(s: &str) -> Self {
        match s {
            "entry" => Difficulty::Entry,
            "junior" => Difficulty::Junior,
            "mid" => Difficulty::Mid,
            "senior" => Difficulty::Senior,
            other => Difficulty::Other(other.to_string()),
        }
    }

    /// Whether this is one of the four known levels
    pub fn is_known(&self) -> bool {
        !matches!(self, Difficulty::Other(_))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!(Difficulty::parse("entry"), Difficulty::Entry);
        assert_eq!(Difficulty::parse("junior"), Difficulty::Junior);
        assert_eq!(Difficulty::parse("mid"), Difficulty::Mid);
        assert_eq!(Difficulty::parse("senior"), Difficulty::Senior);
    }

    #[test]
    fn test_unknown_difficulty_is_preserved() {
        let d = Difficulty::parse("expert");
        assert_eq!(d, Difficulty::Other("expert".to_string()));
        assert_eq!(d.as_str(), "expert");
        assert!(!d.is_known());
    }

    #[test]
    fn test_parsing_is_case_sensitive() {
        assert!(!Difficulty::parse("Senior").is_known());
        assert!(!Difficulty::parse("").is_known());
    }

    #[test]
    fn test_display() {
        assert_eq!(Difficulty::Mid.to_string(), "mid");
    }
}
