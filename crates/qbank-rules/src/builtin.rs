//! Built-in rule table

use crate::rule::{
    Category, Effect, Expectation, Requirement, RuleGroup, TargetField, TextScope, TopicRule,
};
use qbank_domain::taxonomy::{position, seniority};
use qbank_domain::Difficulty;

const FOUNDATIONAL: &[&str] = &[
    "what is",
    "define",
    "explain",
    "basic",
    "introduction",
    "fundamental",
    "difference between",
    "how does",
    "describe",
];

const SECURITY: &[&str] = &[
    "cors",
    "csrf",
    "xss",
    "authentication",
    "authorization",
    "security",
    "oauth",
    "jwt",
    "token",
    "encryption",
    "ssl",
    "tls",
    "session",
    "cookie",
    "auth",
    "password",
    "hash",
    "bcrypt",
    "injection",
    "sql injection",
    "sanitize",
    "validate input",
    "secure",
    "vulnerability",
    "attack",
    "threat",
];

const SECURITY_VERIFY: &[&str] = &[
    "cors",
    "csrf",
    "xss",
    "authentication",
    "authorization",
    "security",
    "oauth",
    "jwt",
    "token",
    "encryption",
    "ssl",
    "tls",
    "injection",
    "sql injection",
    "xss attack",
    "session",
];

const WEB_SECURITY: &[&str] = &["cors", "csrf", "xss", "session", "oauth", "jwt"];

const DATABASE: &[&str] = &[
    "database",
    "sql",
    "nosql",
    "orm",
    "entity framework",
    "query",
    "migration",
    "schema",
    "mongo",
    "postgres",
    "mysql",
    "redis",
    "table",
    "index",
    "dbcontext",
    "dbset",
    "relational",
    "non-relational",
    "acid",
    "transaction",
    "db",
    "data storage",
    "persistence",
    "repository",
    "data access",
    "sqlite",
    "mariadb",
    "firebase",
    "firestore",
    "dynamodb",
    "cassandra",
    "couchdb",
    "constraint",
    "foreign key",
    "primary key",
    "join",
    "query builder",
];

// Verification only ever looked at the leading, ORM-centric part of the list
const DATABASE_VERIFY_LEN: usize = 16;

const API: &[&str] = &[
    "api", "rest", "graphql", "endpoint", "http", "request", "response",
];

const API_VERIFY: &[&str] = &[
    "api",
    "rest",
    "graphql",
    "endpoint",
    "http request",
    "http response",
    "web api",
    "restful",
];

const FRONTEND: &[&str] = &[
    "razor",
    "tag helper",
    "view component",
    "css",
    "html",
    "dom",
    "browser",
    "ui",
    "frontend",
    "react",
    "vue",
    "angular",
    "component",
    "jsx",
    "tsx",
    "styling",
    "layout",
];

const FRONTEND_VERIFY: &[&str] = &[
    "razor",
    "tag helper",
    "view component",
    "css",
    "html",
    "dom",
    "browser",
    "frontend",
    "react",
    "vue",
    "angular",
    "component",
    "jsx",
    "tsx",
];

const DEVOPS: &[&str] = &[
    "docker",
    "kubernetes",
    "ci/cd",
    "deployment",
    "infrastructure",
    "terraform",
    "ansible",
    "jenkins",
    "pipeline",
    "container",
    "orchestration",
    "k8s",
    "helm",
    "devops",
];

const MOBILE: &[&str] = &[
    "ios",
    "android",
    "mobile",
    "flutter",
    "react native",
    "swift",
    "kotlin",
    "app",
    "mobile app",
];

const DATA_SCIENCE: &[&str] = &[
    "machine learning",
    "ml",
    "neural network",
    "statistics",
    "analytics",
    "data science",
    "model",
    "training",
    "prediction",
    "ai",
    "artificial intelligence",
    "deep learning",
];

fn add(positions: &[&str]) -> Effect {
    Effect::AddPositions {
        positions: positions.iter().map(|p| p.to_string()).collect(),
    }
}

fn any_of(values: &[&str]) -> Requirement {
    Requirement::AnyOf(values.iter().map(|v| v.to_string()).collect())
}

fn all_of(values: &[&str]) -> Requirement {
    Requirement::AllOf(values.iter().map(|v| v.to_string()).collect())
}

/// Rule groups in evaluation order
pub(crate) fn groups() -> Vec<RuleGroup> {
    vec![
        RuleGroup::new(Category::Foundational, FOUNDATIONAL, Effect::AddEntrySeniority)
            .scoped(TextScope::TitleBody)
            .only_for(Difficulty::Junior)
            .expecting(Expectation::new(
                "Missing Entry for Foundational",
                TargetField::SeniorityLevels,
                all_of(&[seniority::ENTRY]),
            )),
        RuleGroup::new(
            Category::Security,
            SECURITY,
            add(&[position::FULLSTACK, position::BACKEND, position::CYBERSECURITY]),
        )
        .verify_with(SECURITY_VERIFY)
        .expecting(Expectation::new(
            "Missing Cybersecurity Position",
            TargetField::Positions,
            all_of(&[position::CYBERSECURITY]),
        )),
        RuleGroup::new(Category::WebSecurity, WEB_SECURITY, Effect::Implied)
            .within(Category::Security)
            .expecting(Expectation::new(
                "Missing Backend/Fullstack for Web Security",
                TargetField::Positions,
                any_of(&[position::BACKEND, position::FULLSTACK]),
            )),
        RuleGroup::new(
            Category::Database,
            DATABASE,
            add(&[position::BACKEND, position::DATA_ENGINEER, position::FULLSTACK]),
        )
        .verify_with(&DATABASE[..DATABASE_VERIFY_LEN])
        .expecting(Expectation::new(
            "Missing Data-Engineer Position",
            TargetField::Positions,
            all_of(&[position::DATA_ENGINEER]),
        )),
        RuleGroup::new(
            Category::Api,
            API,
            add(&[position::FULLSTACK, position::BACKEND]),
        )
        .verify_with(API_VERIFY)
        .expecting(Expectation::new(
            "Missing Backend/Fullstack for API",
            TargetField::Positions,
            any_of(&[position::BACKEND, position::FULLSTACK]),
        )),
        RuleGroup::new(
            Category::Frontend,
            FRONTEND,
            add(&[position::FRONTEND, position::FULLSTACK]),
        )
        .verify_with(FRONTEND_VERIFY)
        .expecting(Expectation::new(
            "Missing Frontend/Fullstack",
            TargetField::Positions,
            any_of(&[position::FRONTEND, position::FULLSTACK]),
        )),
        RuleGroup::new(Category::Devops, DEVOPS, add(&[position::DEVOPS])),
        RuleGroup::new(Category::Mobile, MOBILE, add(&[position::MOBILE])),
        RuleGroup::new(
            Category::DataScience,
            DATA_SCIENCE,
            add(&[position::DATA_SCIENTIST]),
        ),
    ]
}

/// Topic rules
pub(crate) fn topics() -> Vec<TopicRule> {
    vec![
        TopicRule::new("fullstack", &[position::FULLSTACK, position::BACKEND]),
        TopicRule::new("frontend", &[position::FRONTEND, position::FULLSTACK]),
        TopicRule::new("backend", &[position::BACKEND, position::FULLSTACK]),
    ]
}
