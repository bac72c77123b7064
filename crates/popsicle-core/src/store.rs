//! The roster store.
//!
//! A [`Roster`] owns the student→count mapping and the name of the last
//! student pulled. It is loaded once at process start, mutated in memory and
//! written back with [`Roster::save`].

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Result, RosterError};
use crate::model::{RosterDocument, StudentRecord};

/// In-memory roster of students and their call counts.
///
/// `last_student` is either empty or a key of `students`; every mutating
/// method keeps it that way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub(crate) students: BTreeMap<String, u32>,
    pub(crate) last_student: String,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from a deserialized document, dropping a dangling
    /// `last student` reference.
    pub fn from_document(doc: RosterDocument) -> Self {
        let RosterDocument {
            mut students,
            mut last_student,
        } = doc;
        if students.remove("").is_some() {
            warn!("dropping student with a blank name");
        }
        if !last_student.is_empty() && !students.contains_key(&last_student) {
            warn!("last student '{last_student}' is not on the roster, clearing it");
            last_student.clear();
        }
        Self {
            students,
            last_student,
        }
    }

    /// Snapshot this roster as a serializable document.
    pub fn to_document(&self) -> RosterDocument {
        RosterDocument {
            students: self.students.clone(),
            last_student: self.last_student.clone(),
        }
    }

    /// Load a roster from `path`.
    ///
    /// A missing, empty or whitespace-only file is not an error: it yields an
    /// empty roster and an empty document is written in its place.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(RosterError::io(path, e)),
        };

        if content.trim().is_empty() {
            info!("no roster at {}, starting empty", path.display());
            let roster = Self::new();
            roster.save(path)?;
            return Ok(roster);
        }

        let doc: RosterDocument =
            serde_json::from_str(&content).map_err(|source| RosterError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        let roster = Self::from_document(doc);
        debug!(
            students = roster.len(),
            "loaded roster from {}",
            path.display()
        );
        Ok(roster)
    }

    /// Overwrite `path` with this roster, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.to_document()).map_err(|source| {
            RosterError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| RosterError::io(parent, e))?;
        }
        std::fs::write(path, json).map_err(|e| RosterError::io(path, e))?;
        debug!(students = self.len(), "saved roster to {}", path.display());
        Ok(())
    }

    /// Add a student with zero calls. Returns `false` if the name is blank or
    /// already on the roster.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.students.contains_key(name) {
            return false;
        }
        debug!("adding student '{name}'");
        self.students.insert(name.to_string(), 0);
        true
    }

    /// Add every name in `names`, returning how many were new.
    pub fn import<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let added = names
            .into_iter()
            .filter(|name| self.add(name.as_ref()))
            .count();
        info!(added, total = self.len(), "imported students");
        added
    }

    /// Remove a student. Returns `false` if they were not on the roster.
    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.trim();
        if self.students.remove(name).is_none() {
            return false;
        }
        debug!("removed student '{name}'");
        if self.last_student == name {
            self.last_student.clear();
        }
        true
    }

    /// Zero one student's count. Returns `false` for an unknown name.
    pub fn reset(&mut self, name: &str) -> bool {
        let name = name.trim();
        match self.students.get_mut(name) {
            Some(calls) => {
                *calls = 0;
                debug!("reset student '{name}'");
                true
            }
            None => false,
        }
    }

    /// Zero every count and forget the last pulled student.
    pub fn reset_all(&mut self) {
        for calls in self.students.values_mut() {
            *calls = 0;
        }
        self.last_student.clear();
        debug!(students = self.len(), "reset all students");
    }

    /// Remove every student.
    pub fn destroy(&mut self) {
        self.students.clear();
        self.last_student.clear();
        debug!("destroyed roster");
    }

    /// Rename `old` to `new`, keeping its call count.
    pub fn edit(&mut self, old: &str, new: &str) -> Result<()> {
        let (old, new) = (old.trim(), new.trim());
        if new.is_empty() {
            return Err(RosterError::BlankName);
        }
        if !self.students.contains_key(old) {
            return Err(RosterError::StudentNotFound(old.to_string()));
        }
        if old == new {
            return Ok(());
        }
        if self.students.contains_key(new) {
            return Err(RosterError::StudentExists(new.to_string()));
        }
        let calls = self
            .students
            .remove(old)
            .ok_or_else(|| RosterError::StudentNotFound(old.to_string()))?;
        self.students.insert(new.to_string(), calls);
        if self.last_student == old {
            self.last_student = new.to_string();
        }
        debug!("renamed '{old}' to '{new}'");
        Ok(())
    }

    /// Number of times `name` has been pulled, if they are on the roster.
    pub fn count(&self, name: &str) -> Option<u32> {
        self.students.get(name).copied()
    }

    /// Smallest call count on the roster.
    pub fn lowest_count(&self) -> Option<u32> {
        self.students.values().copied().min()
    }

    /// The most recently pulled student, if any.
    pub fn last_selected(&self) -> Option<&str> {
        if self.last_student.is_empty() {
            None
        } else {
            Some(self.last_student.as_str())
        }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Student names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.students.keys().map(String::as_str)
    }

    /// All students with their counts, in display order.
    pub fn records(&self) -> Vec<StudentRecord> {
        self.students
            .iter()
            .map(|(name, &calls)| StudentRecord {
                name: name.clone(),
                calls,
            })
            .collect()
    }

    /// Sum of every student's call count.
    pub fn total_calls(&self) -> u64 {
        self.students.values().map(|&c| u64::from(c)).sum()
    }
}
