//! Rule evaluation against a single record

use crate::haystack::{keyword_matches, Haystack};
use crate::rule::{Category, Effect, Profile, RuleGroup};
use crate::ruleset::RuleSet;
use qbank_domain::taxonomy::seniority;
use qbank_domain::{Difficulty, QuestionRecord};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Everything the rule table derives for one record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    /// Groups that fired, in table order
    pub fired: Vec<Category>,

    /// Positions contributed by fired groups and topic rules
    pub positions: BTreeSet<String>,

    /// `entry` belongs in `seniorityLevels`
    pub add_entry_seniority: bool,

    /// `competitive` belongs in `interviewTypes`
    pub add_competitive: bool,
}

impl Classification {
    /// Whether `category` fired
    pub fn has_fired(&self, category: Category) -> bool {
        self.fired.contains(&category)
    }
}

/// Whether a record with these levels and difficulty must be offered in
/// competitive interviews
pub fn competitive_required(levels: &[String], difficulty: &Difficulty) -> bool {
    let has = |level: &str| levels.iter().any(|l| l == level);
    has(seniority::SENIOR) || (has(seniority::MID) && *difficulty == Difficulty::Mid)
}

/// Evaluates a [`RuleSet`] under one profile
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Arc<RuleSet>,
    profile: Profile,
}

impl Classifier {
    /// Create a classifier for `profile`
    pub fn new(rules: Arc<RuleSet>, profile: Profile) -> Self {
        Self { rules, profile }
    }

    /// Classifier used while deriving metadata
    pub fn enrichment(rules: Arc<RuleSet>) -> Self {
        Self::new(rules, Profile::Enrichment)
    }

    /// Classifier used while re-checking metadata
    pub fn verification(rules: Arc<RuleSet>) -> Self {
        Self::new(rules, Profile::Verification)
    }

    /// Groups that fire for `record`, in table order
    pub fn fired_groups<'a>(&'a self, record: &QuestionRecord) -> Vec<&'a RuleGroup> {
        let haystack = Haystack::from_record(record);
        let difficulty = record.difficulty();
        let mut fired: Vec<&RuleGroup> = Vec::new();

        for group in &self.rules.groups {
            if !group.applies_to(&difficulty) {
                continue;
            }
            if let Some(parent) = group.parent {
                if !fired.iter().any(|g| g.category == parent) {
                    continue;
                }
            }
            let text = haystack.text(self.rules.scope_for(group, self.profile));
            let hit = group
                .keywords_for(self.profile)
                .iter()
                .any(|kw| keyword_matches(text, kw, group.matching));
            if hit {
                fired.push(group);
            }
        }
        fired
    }

    /// Classify a record
    pub fn classify(&self, record: &QuestionRecord) -> Classification {
        let difficulty = record.difficulty();
        let mut result = Classification {
            add_entry_seniority: difficulty == Difficulty::Entry,
            ..Classification::default()
        };

        for group in self.fired_groups(record) {
            result.fired.push(group.category);
            match &group.effect {
                Effect::AddPositions { positions } => {
                    result.positions.extend(positions.iter().cloned());
                }
                Effect::AddEntrySeniority => result.add_entry_seniority = true,
                Effect::Implied => {}
            }
        }

        if let Some(topic) = record.topic() {
            for rule in self.rules.topics.iter().filter(|t| t.topic == topic) {
                result.positions.extend(rule.positions.iter().cloned());
            }
        }

        let levels = record.seniority_levels().to_vec();
        result.add_competitive = competitive_required(&levels, &difficulty);
        result
    }
}
