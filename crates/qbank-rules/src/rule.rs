//! Rule group types

use qbank_domain::Difficulty;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification category of a rule group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Foundational concepts (junior questions only)
    Foundational,
    /// Security topics
    Security,
    /// Web-security subset of security
    WebSecurity,
    /// Databases and ORMs
    Database,
    /// API development
    Api,
    /// Frontend development
    Frontend,
    /// DevOps and infrastructure
    Devops,
    /// Mobile development
    Mobile,
    /// Data science and machine learning
    DataScience,
}

impl Category {
    /// Category name as written in rule files
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Foundational => "foundational",
            Category::Security => "security",
            Category::WebSecurity => "web-security",
            Category::Database => "database",
            Category::Api => "api",
            Category::Frontend => "frontend",
            Category::Devops => "devops",
            Category::Mobile => "mobile",
            Category::DataScience => "data-science",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a keyword is located in the haystack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Anywhere, including inside larger words ("db" in "mongodb")
    #[default]
    Substring,
    /// Only where bounded by non-word characters or the text edges
    Word,
}

/// Which record text a rule group reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextScope {
    /// Title and description
    TitleBody,
    /// Title, description and tags
    #[default]
    TitleBodyTags,
}

/// Call site evaluating the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Deriving metadata
    Enrichment,
    /// Re-checking stored metadata
    Verification,
}

/// What a firing group contributes during enrichment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Effect {
    /// Union these values into `positions`
    AddPositions {
        /// Positions to add
        positions: Vec<String>,
    },
    /// Put `entry` at the front of `seniorityLevels`
    AddEntrySeniority,
    /// No effect of its own; covered by the parent group's effect
    Implied,
}

/// Metadata field an expectation inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetField {
    /// `positions`
    Positions,
    /// `seniorityLevels`
    SeniorityLevels,
}

impl TargetField {
    /// Record field name
    pub fn key(&self) -> &'static str {
        match self {
            TargetField::Positions => qbank_domain::field::POSITIONS,
            TargetField::SeniorityLevels => qbank_domain::field::SENIORITY_LEVELS,
        }
    }
}

/// Values a field must hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Requirement {
    /// Every listed value
    AllOf(Vec<String>),
    /// At least one listed value
    AnyOf(Vec<String>),
}

impl Requirement {
    /// Whether `items` meets the requirement
    pub fn is_satisfied(&self, items: &[String]) -> bool {
        let present = |v: &String| items.contains(v);
        match self {
            Requirement::AllOf(values) => values.iter().all(present),
            Requirement::AnyOf(values) => values.iter().any(present),
        }
    }
}

/// What verification expects once a group fires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectation {
    /// Issue category reported when unmet
    pub issue: String,
    /// Field to inspect
    pub field: TargetField,
    /// Values the field must hold
    pub require: Requirement,
}

impl Expectation {
    /// Build an expectation
    pub fn new(issue: &str, field: TargetField, require: Requirement) -> Self {
        Self {
            issue: issue.to_string(),
            field,
            require,
        }
    }
}

/// One row of the rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleGroup {
    /// Category
    pub category: Category,

    /// Lowercase trigger keywords
    pub keywords: Vec<String>,

    /// Narrower keyword list used by verification, if it differs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_keywords: Option<Vec<String>>,

    /// Keyword matching mode
    #[serde(default)]
    pub matching: MatchMode,

    /// Text read during enrichment
    #[serde(default)]
    pub scope: TextScope,

    /// Only fire for records with this difficulty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_difficulty: Option<String>,

    /// Only fire when this earlier group fired too
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Category>,

    /// Enrichment effect
    pub effect: Effect,

    /// Verification expectation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expectation: Option<Expectation>,
}

impl RuleGroup {
    /// Create a substring-matched group reading title, description and tags
    pub fn new(category: Category, keywords: &[&str], effect: Effect) -> Self {
        Self {
            category,
            keywords: to_strings(keywords),
            verify_keywords: None,
            matching: MatchMode::default(),
            scope: TextScope::default(),
            when_difficulty: None,
            parent: None,
            effect,
            expectation: None,
        }
    }

    /// Use a different keyword list for verification
    pub fn verify_with(mut self, keywords: &[&str]) -> Self {
        self.verify_keywords = Some(to_strings(keywords));
        self
    }

    /// Set the enrichment text scope
    pub fn scoped(mut self, scope: TextScope) -> Self {
        self.scope = scope;
        self
    }

    /// Set the matching mode
    pub fn matching(mut self, mode: MatchMode) -> Self {
        self.matching = mode;
        self
    }

    /// Restrict to one difficulty
    pub fn only_for(mut self, difficulty: Difficulty) -> Self {
        self.when_difficulty = Some(difficulty.as_str().to_string());
        self
    }

    /// Make this a sub-rule of `parent`
    pub fn within(mut self, parent: Category) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Attach a verification expectation
    pub fn expecting(mut self, expectation: Expectation) -> Self {
        self.expectation = Some(expectation);
        self
    }

    /// Keywords consulted by `profile`
    pub fn keywords_for(&self, profile: Profile) -> &[String] {
        match (profile, &self.verify_keywords) {
            (Profile::Verification, Some(narrow)) => narrow,
            _ => &self.keywords,
        }
    }

    /// Whether the difficulty condition admits `difficulty`
    pub fn applies_to(&self, difficulty: &Difficulty) -> bool {
        self.when_difficulty
            .as_deref()
            .map_or(true, |wanted| wanted == difficulty.as_str())
    }
}

/// Exact `topic` match mapped to positions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRule {
    /// Topic value, compared exactly
    pub topic: String,
    /// Positions to add
    pub positions: Vec<String>,
}

impl TopicRule {
    /// Build a topic rule
    pub fn new(topic: &str, positions: &[&str]) -> Self {
        Self {
            topic: topic.to_string(),
            positions: to_strings(positions),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
