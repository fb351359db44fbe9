//! Versioned rule table shared by enrichment and verification

use crate::builtin;
use crate::error::{Result, RulesError};
use crate::rule::{Category, Effect, Profile, RuleGroup, TextScope, TopicRule};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Rule table version this build reads and writes
pub const RULESET_VERSION: u32 = 1;

fn default_verification_scope() -> TextScope {
    TextScope::TitleBody
}

/// Ordered rule groups plus topic rules
///
/// # Examples
///
/// ```
/// use qbank_rules::{Category, RuleSet};
///
/// let rules = RuleSet::builtin();
/// let exported = rules.to_toml_string().unwrap();
/// let reloaded = RuleSet::from_toml_str(&exported).unwrap();
/// assert_eq!(reloaded.group(Category::Api), rules.group(Category::Api));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Table version
    pub version: u32,

    /// Text read by every group during verification
    #[serde(default = "default_verification_scope")]
    pub verification_scope: TextScope,

    /// Exact `topic` matches
    #[serde(default)]
    pub topics: Vec<TopicRule>,

    /// Keyword groups, in evaluation order
    pub groups: Vec<RuleGroup>,
}

impl RuleSet {
    /// The built-in table
    pub fn builtin() -> Self {
        Self {
            version: RULESET_VERSION,
            verification_scope: default_verification_scope(),
            topics: builtin::topics(),
            groups: builtin::groups(),
        }
    }

    /// Parse and validate a TOML rule table
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut rules: RuleSet = toml::from_str(s)?;
        rules.normalize();
        rules.validate()?;
        Ok(rules)
    }

    /// Load a TOML rule table from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Lowercase and trim every keyword and every position a rule adds
    pub fn normalize(&mut self) {
        for group in &mut self.groups {
            normalize_list(&mut group.keywords);
            if let Some(narrow) = group.verify_keywords.as_mut() {
                normalize_list(narrow);
            }
            if let Effect::AddPositions { positions } = &mut group.effect {
                normalize_list(positions);
            }
        }
        for topic in &mut self.topics {
            normalize_list(&mut topic.positions);
        }
    }

    /// Check structural rules of the table
    pub fn validate(&self) -> Result<()> {
        if self.version != RULESET_VERSION {
            return Err(RulesError::UnsupportedVersion {
                found: self.version,
                supported: RULESET_VERSION,
            });
        }

        let mut seen: Vec<Category> = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            if seen.contains(&group.category) {
                return Err(RulesError::DuplicateCategory(group.category));
            }

            let lists = std::iter::once(&group.keywords).chain(group.verify_keywords.as_ref());
            for list in lists {
                if list.is_empty() || list.iter().any(|kw| kw.trim().is_empty()) {
                    return Err(RulesError::BlankKeyword(group.category));
                }
            }

            if let Some(parent) = group.parent {
                if !seen.contains(&parent) {
                    return Err(RulesError::UnknownParent {
                        category: group.category,
                        parent,
                    });
                }
            }
            seen.push(group.category);
        }

        let mut topics = HashSet::new();
        for topic in &self.topics {
            if !topics.insert(topic.topic.as_str()) {
                return Err(RulesError::DuplicateTopic(topic.topic.clone()));
            }
        }
        Ok(())
    }

    /// Look up a group by category
    pub fn group(&self, category: Category) -> Option<&RuleGroup> {
        self.groups.iter().find(|g| g.category == category)
    }

    /// Text scope `group` reads under `profile`
    pub fn scope_for(&self, group: &RuleGroup, profile: Profile) -> TextScope {
        match profile {
            Profile::Enrichment => group.scope,
            Profile::Verification => self.verification_scope,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize_list(keywords: &mut [String]) {
    for kw in keywords.iter_mut() {
        *kw = kw.trim().to_lowercase();
    }
}
