//! Reconcilers for restore configuration
//!
//! This module contains the business logic for preparing a restore:
//! - Deciding, per backed-up PVC, whether its storage class is usable on the
//!   target cluster
//! - Validating a restore submission before the request payload is built

pub mod restore;
pub mod storage_class;
