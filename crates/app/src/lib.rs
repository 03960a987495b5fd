//! # devicehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceRepository` — CRUD and detail loading for devices
//!   - `DeviceTypeRepository` — lookup of device types by name
//!   - `EmployeeRepository` — listing and detail loading for employees
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceService` — list, get, create, update, delete devices
//!   - `EmployeeService` — list, get employees
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `devicehub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
