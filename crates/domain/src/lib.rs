//! # devicehub-domain
//!
//! Pure domain model for the devicehub directory service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (inventory items with a type and free-form properties)
//! - Define **Device types** (named categories devices reference)
//! - Define **Employees** (person, position, salary) and their assignments
//! - Own the projection rules: full-name composition and current-assignment
//!   selection
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod device_type;
pub mod employee;
