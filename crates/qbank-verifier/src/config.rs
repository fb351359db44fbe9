//! Verifier configuration

/// Which checks the verifier runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Entry difficulty implies entry seniority
    pub check_entry_seniority: bool,

    /// Expectations attached to keyword rule groups
    pub check_keyword_rules: bool,

    /// Senior and mid-level questions carry the competitive interview type
    pub check_competitive: bool,

    /// companyType is exactly the full company-type list
    pub check_company_type: bool,

    /// Positions are present, sorted and unique; list fields are arrays
    pub check_list_shapes: bool,

    /// Flag positions outside the nominal domain
    pub flag_unknown_positions: bool,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            check_entry_seniority: true,
            check_keyword_rules: true,
            check_competitive: true,
            check_company_type: true,
            check_list_shapes: true,
            flag_unknown_positions: false,
        }
    }
}

impl VerifierConfig {
    /// Create a permissive configuration (keyword rules only)
    pub fn permissive() -> Self {
        Self {
            check_entry_seniority: false,
            check_keyword_rules: true,
            check_competitive: false,
            check_company_type: false,
            check_list_shapes: false,
            flag_unknown_positions: false,
        }
    }

    /// Create a strict configuration (all checks, unknown positions flagged)
    pub fn strict() -> Self {
        Self {
            flag_unknown_positions: true,
            ..Self::default()
        }
    }
}
