//! Core data model types for popsicle.
//!
//! The persisted document is a flat JSON object:
//! `{"students": {name: count}, "last student": name}`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One student and how many times they have been called on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Display name, unique within a roster.
    pub name: String,
    /// Number of times this student has been pulled.
    pub calls: u32,
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.calls)
    }
}

/// On-disk shape of a roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterDocument {
    /// Student name to call count.
    #[serde(default)]
    pub students: BTreeMap<String, u32>,
    /// Name of the most recently pulled student, empty when none.
    #[serde(rename = "last student", default)]
    pub last_student: String,
}
