//! Restore reconciliation core for the cluster backup console
//!
//! This crate decides, for each persistent volume claim captured in a backup,
//! whether its storage class can be honored on the restore-target cluster,
//! collects the operator's namespace renames and storage class mappings, and
//! assembles the final restore request handed to the console's API client.

pub mod adapters;
pub mod error;
pub mod reconcilers;
pub mod resources;
pub mod session;

pub use error::{Error, Result};
