//! Gender selector shared by the BMR, TDEE and IBW formulas.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Selects the male or female coefficient set of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Subject is male
    Male,
    /// Subject is female
    Female,
}

impl Gender {
    /// Both genders, in declaration order
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" | "MAN" => Ok(Gender::Male),
            "F" | "FEMALE" | "WOMAN" => Ok(Gender::Female),
            _ => Err(CalcError::invalid_input("gender", s, "Expected male or female")),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Gender {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_declaration_order() {
        assert_eq!(Gender::ALL, [Gender::Male, Gender::Female]);
    }

    #[test]
    fn test_parse_flexible() {
        assert_eq!(Gender::from_str_flexible("f").unwrap(), Gender::Female);
        assert_eq!(" Male ".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(
            Gender::from_str_flexible("other").unwrap_err().error_code(),
            "INVALID_INPUT"
        );
    }
}
