//! Device type — the category a device belongs to, referenced by name.

use serde::{Deserialize, Serialize};

use crate::id::DeviceTypeId;

/// A named device category (e.g. "PC", "Smartwatch").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceType {
    pub id: DeviceTypeId,
    pub name: String,
}
