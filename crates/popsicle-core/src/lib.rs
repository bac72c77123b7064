//! popsicle-core: roster store, balanced selection, and roster import.
//!
//! This crate holds everything the `popsicle` binary does with a class
//! roster: the persisted student→count mapping, the balanced random pull,
//! and the CSV importer.

pub mod config;
pub mod error;
pub mod importer;
pub mod model;
pub mod selector;
pub mod store;

pub use config::{load_config_from, PopsicleConfig};
pub use error::RosterError;
pub use importer::{discover_roster, RosterImport};
pub use model::{RosterDocument, StudentRecord};
pub use store::Roster;
