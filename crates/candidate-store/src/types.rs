//! Core domain types for candidate data.
//!
//! This module defines the fundamental data structures used throughout the
//! system:
//! - `Candidate` and `Skill` as they arrive from the data source
//! - `SkillLevel` for the fixed proficiency scale
//! - `SeniorityBand`, a category derived from the candidate's score
//!   (never stored, always computed)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Proficiency level for a single skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Basic,
    Intermediate,
    Advanced,
}

/// One entry in a candidate's skill list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub language: String,
    pub level: SkillLevel,
}

/// A candidate as fetched from the data source.
///
/// Immutable once fetched; the store replaces the whole list on refetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique, non-empty identifier
    pub username: String,
    /// ISO-8601 date the candidate joined the platform
    pub joined_at: String,
    /// Ordered skill list as provided by the source
    pub skills: Vec<Skill>,
    /// Assessment score; seniority bands are derived from this
    pub score: u32,
}

impl Candidate {
    /// Returns the seniority band derived from this candidate's score,
    /// or `None` when the score falls below every band.
    pub fn seniority_band(&self) -> Option<SeniorityBand> {
        SeniorityBand::from_score(self.score)
    }

    /// Case-insensitive check for a language in the skill list.
    pub fn has_language(&self, language: &str) -> bool {
        self.skills
            .iter()
            .any(|skill| skill.language.eq_ignore_ascii_case(language))
    }
}

/// Seniority category derived from a candidate's score.
///
/// Band boundaries:
/// - JR  = [750, 1000)
/// - SSR = [1000, 1200)
/// - SR  = [1200, ∞)
///
/// Scores below 750 match no band, so those candidates are excluded
/// whenever any band filter is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeniorityBand {
    Junior,
    SemiSenior,
    Senior,
}

impl SeniorityBand {
    /// Derive the band for a score, if any.
    pub fn from_score(score: u32) -> Option<Self> {
        match score {
            750..1000 => Some(SeniorityBand::Junior),
            1000..1200 => Some(SeniorityBand::SemiSenior),
            1200.. => Some(SeniorityBand::Senior),
            _ => None,
        }
    }
}

impl fmt::Display for SeniorityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeniorityBand::Junior => "JR",
            SeniorityBand::SemiSenior => "SSR",
            SeniorityBand::Senior => "SR",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for SeniorityBand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "JR" => Ok(SeniorityBand::Junior),
            "SSR" => Ok(SeniorityBand::SemiSenior),
            "SR" => Ok(SeniorityBand::Senior),
            other => Err(format!("Unknown seniority band: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(SeniorityBand::from_score(749), None);
        assert_eq!(SeniorityBand::from_score(750), Some(SeniorityBand::Junior));
        assert_eq!(SeniorityBand::from_score(999), Some(SeniorityBand::Junior));
        assert_eq!(
            SeniorityBand::from_score(1000),
            Some(SeniorityBand::SemiSenior)
        );
        assert_eq!(
            SeniorityBand::from_score(1199),
            Some(SeniorityBand::SemiSenior)
        );
        assert_eq!(SeniorityBand::from_score(1200), Some(SeniorityBand::Senior));
        assert_eq!(SeniorityBand::from_score(9000), Some(SeniorityBand::Senior));
    }

    #[test]
    fn test_band_display_roundtrip() {
        for band in [
            SeniorityBand::Junior,
            SeniorityBand::SemiSenior,
            SeniorityBand::Senior,
        ] {
            let parsed: SeniorityBand = band.to_string().parse().unwrap();
            assert_eq!(parsed, band);
        }
        assert!("staff".parse::<SeniorityBand>().is_err());
    }

    #[test]
    fn test_has_language_is_case_insensitive() {
        let candidate = Candidate {
            username: "ada".to_string(),
            joined_at: "2023-04-01".to_string(),
            skills: vec![Skill {
                language: "JavaScript".to_string(),
                level: SkillLevel::Advanced,
            }],
            score: 1250,
        };

        assert!(candidate.has_language("javascript"));
        assert!(candidate.has_language("JAVASCRIPT"));
        assert!(!candidate.has_language("python"));
    }
}
