//! Nominal value domains for the derived metadata fields.
//!
//! These domains are advisory: rules may add values outside them and the
//! enricher never rejects an unknown value already present on a record.

/// Target job positions.
pub mod position {
    /// Frontend engineer
    pub const FRONTEND: &str = "frontend";
    /// Backend engineer
    pub const BACKEND: &str = "backend";
    /// Fullstack engineer; also the fallback when nothing else applies
    pub const FULLSTACK: &str = "fullstack";
    /// DevOps / platform engineer
    pub const DEVOPS: &str = "devops";
    /// Mobile engineer
    pub const MOBILE: &str = "mobile";
    /// Data engineer
    pub const DATA_ENGINEER: &str = "data-engineer";
    /// Data scientist / ML engineer
    pub const DATA_SCIENTIST: &str = "data-scientist";
    /// Security engineer
    pub const CYBERSECURITY: &str = "cybersecurity";

    /// Every position in the nominal domain
    pub const ALL: [&str; 8] = [
        FRONTEND,
        BACKEND,
        FULLSTACK,
        DEVOPS,
        MOBILE,
        DATA_ENGINEER,
        DATA_SCIENTIST,
        CYBERSECURITY,
    ];

    /// Whether `value` belongs to the nominal domain
    pub fn is_known(value: &str) -> bool {
        ALL.contains(&value)
    }
}

/// Seniority levels a question applies to.
pub mod seniority {
    /// Entry level
    pub const ENTRY: &str = "entry";
    /// Junior
    pub const JUNIOR: &str = "junior";
    /// Mid level
    pub const MID: &str = "mid";
    /// Senior
    pub const SENIOR: &str = "senior";

    /// Every seniority level, lowest first
    pub const ALL: [&str; 4] = [ENTRY, JUNIOR, MID, SENIOR];
}

/// Interview formats a question can appear in.
pub mod interview_type {
    /// Regular mock interview
    pub const REGULAR: &str = "regular";
    /// Practice mode
    pub const PRACTICE: &str = "practice";
    /// Flash cards
    pub const FLASH: &str = "flash";
    /// Teacher mode
    pub const TEACHER: &str = "teacher";
    /// Competitive interview
    pub const COMPETITIVE: &str = "competitive";

    /// Every interview type
    pub const ALL: [&str; 5] = [REGULAR, PRACTICE, FLASH, TEACHER, COMPETITIVE];
}

/// Company types. Every refined record carries all of them, in this order.
pub mod company_type {
    /// Large tech companies
    pub const FAANG: &str = "faang";
    /// Startups
    pub const STARTUP: &str = "startup";
    /// Enterprises
    pub const ENTERPRISE: &str = "enterprise";

    /// The fixed company-type triple, in persisted order
    pub const ALL: [&str; 3] = [FAANG, STARTUP, ENTERPRISE];
}
