//! # devicehub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `devicehub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! Every repository call checks a connection out of the pool for the
//! duration of its statements; the connection goes back to the pool when
//! the call returns.
//!
//! ## Dependency rule
//! Depends on `devicehub-app` (for port traits) and `devicehub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod device_repo;
pub mod device_type_repo;
pub mod employee_repo;
pub mod error;
pub mod pool;

#[cfg(test)]
mod fixtures;

pub use device_repo::SqliteDeviceRepository;
pub use device_type_repo::SqliteDeviceTypeRepository;
pub use employee_repo::SqliteEmployeeRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
