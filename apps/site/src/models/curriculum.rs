//! Typed curriculum data model.
//!
//! Plain value structs with no identity beyond structural equality. They are
//! built once at startup from the literal in `data` and only read afterwards.
//! Every collection field carries `#[serde(default)]`, so an absent array in
//! serialized input becomes an empty section rather than a failure.

use serde::{Deserialize, Serialize};

/// Root aggregate holding every résumé section's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    pub experience: Experience,
    #[serde(default)]
    pub education: Vec<EducationItem>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub links: Vec<LinkItem>,
    #[serde(default)]
    pub additional_info: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub companies: Vec<Company>,
}

/// One employer, with roles in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// One job title held within a company, with a date range and
/// bullet-point achievements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    #[serde(default)]
    pub description: Vec<String>,
    pub from: String,
    /// May be a sentinel such as "Present".
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    pub name: String,
    pub description: String,
    pub date: String,
}

/// A personal project or profile link. `href` is an opaque URI, unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub title: String,
    pub description: String,
    pub href: String,
}
