//! Core domain types for the swipe catalog.
//!
//! Job seekers swipe on [`Job`] postings, recruiters swipe on [`Candidate`]
//! profiles. Both travel through the rest of the system as an [`Item`], a
//! tagged enum, so every consumer matches on the variant instead of probing
//! for optional fields.

use crate::error::CatalogError;
use crate::parser;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a swipeable item, unique within one role's item list
pub type ItemId = String;

// =============================================================================
// Role
// =============================================================================

/// Which side of the marketplace the current user is on.
///
/// The role decides which item list backs the deck: job seekers see jobs,
/// recruiters see candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    JobSeeker,
    Recruiter,
}

impl Role {
    /// The other role. Used by the role toggle in the header.
    pub fn toggled(self) -> Self {
        match self {
            Role::JobSeeker => Role::Recruiter,
            Role::Recruiter => Role::JobSeeker,
        }
    }

    /// Plural noun for the items this role swipes on ("jobs" / "candidates")
    pub fn item_noun(self) -> &'static str {
        match self {
            Role::JobSeeker => "jobs",
            Role::Recruiter => "candidates",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::JobSeeker => write!(f, "jobSeeker"),
            Role::Recruiter => write!(f, "recruiter"),
        }
    }
}

impl FromStr for Role {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jobseeker" | "job-seeker" | "job_seeker" | "seeker" => Ok(Role::JobSeeker),
            "recruiter" => Ok(Role::Recruiter),
            _ => Err(CatalogError::UnknownRole(s.to_string())),
        }
    }
}

// =============================================================================
// Items
// =============================================================================

/// A job posting, shown to job seekers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: ItemId,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub logo: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form salary band such as "$120,000 - $150,000"
    #[serde(default)]
    pub salary: Option<String>,
}

impl Job {
    /// Salary band in whole dollars, if the salary string can be read.
    pub fn salary_range(&self) -> Option<(u32, u32)> {
        self.salary.as_deref().and_then(parser::parse_salary_range)
    }
}

/// A candidate profile, shown to recruiters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub photo: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub location: String,
    /// Free-form experience such as "5 years"
    #[serde(default)]
    pub experience: Option<String>,
}

impl Candidate {
    /// Years of experience, if the experience string starts with a number.
    pub fn experience_years(&self) -> Option<u32> {
        self.experience
            .as_deref()
            .and_then(parser::parse_experience_years)
    }
}

/// Anything that can sit in a deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Item {
    Job(Job),
    Candidate(Candidate),
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Item::Job(job) => &job.id,
            Item::Candidate(candidate) => &candidate.id,
        }
    }

    /// Role whose deck this item belongs to
    pub fn role(&self) -> Role {
        match self {
            Item::Job(_) => Role::JobSeeker,
            Item::Candidate(_) => Role::Recruiter,
        }
    }

    /// Card heading: job title or candidate name
    pub fn headline(&self) -> &str {
        match self {
            Item::Job(job) => &job.title,
            Item::Candidate(candidate) => &candidate.name,
        }
    }

    /// Card subheading: company or candidate's current title
    pub fn subtitle(&self) -> &str {
        match self {
            Item::Job(job) => &job.company,
            Item::Candidate(candidate) => &candidate.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Item::Job(job) => &job.description,
            Item::Candidate(candidate) => &candidate.description,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            Item::Job(job) => &job.location,
            Item::Candidate(candidate) => &candidate.location,
        }
    }

    /// Tags of a job or skills of a candidate
    pub fn tags(&self) -> &[String] {
        match self {
            Item::Job(job) => &job.tags,
            Item::Candidate(candidate) => &candidate.skills,
        }
    }

    /// Company logo or candidate photo URL
    pub fn avatar(&self) -> &str {
        match self {
            Item::Job(job) => &job.logo,
            Item::Candidate(candidate) => &candidate.photo,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.headline(), self.subtitle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("jobSeeker".parse::<Role>().unwrap(), Role::JobSeeker);
        assert_eq!("job-seeker".parse::<Role>().unwrap(), Role::JobSeeker);
        assert_eq!(" Recruiter ".parse::<Role>().unwrap(), Role::Recruiter);

        let err = "admin".parse::<Role>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownRole(ref r) if r == "admin"));
    }

    #[test]
    fn test_role_toggle_and_display() {
        assert_eq!(Role::JobSeeker.toggled(), Role::Recruiter);
        assert_eq!(Role::Recruiter.toggled(), Role::JobSeeker);
        assert_eq!(Role::JobSeeker.to_string(), "jobSeeker");
        assert_eq!(Role::Recruiter.item_noun(), "candidates");
    }

    #[test]
    fn test_item_accessors_by_variant() {
        let job = Item::Job(Job {
            id: "j1".to_string(),
            title: "Rust Engineer".to_string(),
            company: "Ferrous Labs".to_string(),
            logo: String::new(),
            description: "Systems work".to_string(),
            location: "Berlin".to_string(),
            tags: vec!["Rust".to_string(), "Remote".to_string()],
            salary: Some("$100,000 - $140,000".to_string()),
        });
        assert_eq!(job.id(), "j1");
        assert_eq!(job.role(), Role::JobSeeker);
        assert_eq!(job.headline(), "Rust Engineer");
        assert_eq!(job.subtitle(), "Ferrous Labs");
        assert_eq!(job.tags().len(), 2);

        let candidate = Item::Candidate(Candidate {
            id: "c1".to_string(),
            name: "Sam Lee".to_string(),
            photo: String::new(),
            title: "Designer".to_string(),
            description: "Loves type".to_string(),
            skills: vec!["Figma".to_string()],
            location: "Oslo".to_string(),
            experience: Some("7 years".to_string()),
        });
        assert_eq!(candidate.role(), Role::Recruiter);
        assert_eq!(candidate.headline(), "Sam Lee");
        assert_eq!(candidate.subtitle(), "Designer");
        assert_eq!(candidate.to_string(), "Sam Lee (Designer)");
    }

    #[test]
    fn test_item_serializes_with_kind_tag() {
        let item = Item::Candidate(Candidate {
            id: "c1".to_string(),
            name: "Sam Lee".to_string(),
            photo: String::new(),
            title: "Designer".to_string(),
            description: String::new(),
            skills: vec![],
            location: "Oslo".to_string(),
            experience: None,
        });
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "candidate");
        assert_eq!(json["name"], "Sam Lee");
    }
}
