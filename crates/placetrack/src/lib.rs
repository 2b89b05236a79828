//! `placetrack` - Placement tracking for a college placement cell
//!
//! This library provides the placement record store, the student and admin
//! dashboards built on it, and the page/session shell that routes between
//! them.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod admin;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod session;
pub mod stats;
pub mod storage;
pub mod store;
pub mod student;

pub use admin::{AdminDashboard, FormMode, PlacementForm};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{PlacementDraft, PlacementFields, PlacementRecord, RecordId};
pub use session::{Page, Role, Session, User};
pub use stats::PlacementStats;
pub use storage::Storage;
pub use store::RecordStore;
pub use student::{DepartmentFilter, StudentDashboard};
