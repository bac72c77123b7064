//! Roster CSV import.
//!
//! Reads a learning-platform roster export with `nickname`, `firstName` and
//! `lastName` columns and turns each row into a short display name: the
//! nickname when present, otherwise the first name. Students who share a
//! display first-name are shown by their full "first last" name instead.

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{Result, RosterError};

/// Default file-name pattern for roster exports.
pub const DEFAULT_ROSTER_PATTERN: &str = r".*[0-9]{4}-[A-Z]{1,4}-[A-Z]{1,4}-CYB-[PF]T\.csv";

/// Raw roster row. Any other columns in the export are ignored.
#[derive(Debug, Deserialize)]
struct RawRosterRow {
    #[serde(default)]
    nickname: Option<String>,
    #[serde(rename = "firstName")]
    first_name: String,
    #[serde(rename = "lastName", default)]
    last_name: String,
}

/// A student's name as read from a roster row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentName {
    /// Nickname if the row had one, otherwise the legal first name.
    pub first_name: String,
    pub last_name: String,
}

impl StudentName {
    /// "first last", or just the first name when there is no last name.
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// The parsed contents of a roster file.
#[derive(Debug, Clone, Default)]
pub struct RosterImport {
    names: Vec<StudentName>,
}

impl RosterImport {
    /// Parse a roster CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| RosterError::io(path, e))?;
        let import = Self::from_reader(file).map_err(|source| RosterError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            rows = import.len(),
            "read roster from {}",
            path.display()
        );
        Ok(import)
    }

    /// Parse roster CSV data from any reader.
    pub fn from_reader<R: Read>(rdr: R) -> std::result::Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(rdr);

        let mut names = Vec::new();
        for result in reader.deserialize::<RawRosterRow>() {
            let row = result?;
            let first_name = row
                .nickname
                .filter(|n| !n.is_empty())
                .unwrap_or(row.first_name);
            if first_name.is_empty() {
                warn!("skipping roster row with no first name or nickname");
                continue;
            }
            names.push(StudentName {
                first_name,
                last_name: row.last_name,
            });
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[StudentName] {
        &self.names
    }

    /// First names that appear on more than one row.
    pub fn non_unique_first_names(&self) -> Vec<&str> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for name in &self.names {
            *seen.entry(name.first_name.as_str()).or_default() += 1;
        }
        let mut dupes: Vec<&str> = seen
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(first, _)| first)
            .collect();
        dupes.sort_unstable();
        dupes
    }

    /// Display names in file order: the first name when it is unique across
    /// the whole file, the full name otherwise.
    pub fn display_names(&self) -> impl Iterator<Item = String> + '_ {
        let dupes = self.non_unique_first_names();
        self.names.iter().map(move |name| {
            if dupes.contains(&name.first_name.as_str()) {
                name.full_name()
            } else {
                name.first_name.clone()
            }
        })
    }
}

/// Find the first file in `dir` (by file name) whose name matches `pattern`.
pub fn discover_roster(dir: &Path, pattern: &str) -> Result<Option<PathBuf>> {
    let re = Regex::new(&format!("^(?:{pattern})$"))?;

    let mut matches = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| RosterError::io(dir, e))? {
        let entry = entry.map_err(|e| RosterError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if re.is_match(file_name) {
            matches.push(path);
        }
    }

    matches.sort();
    let found = matches.into_iter().next();
    match &found {
        Some(path) => debug!("discovered roster file {}", path.display()),
        None => debug!("no roster file matching '{pattern}' in {}", dir.display()),
    }
    Ok(found)
}
