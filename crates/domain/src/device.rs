//! Device — an inventory item of a given type, optionally assigned to employees.
//!
//! Additional properties are free-form JSON. They travel as a
//! [`serde_json::Value`] at the edges and are stored as serialised text;
//! parsing happens only when a device is read back.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::device_type::DeviceType;
use crate::employee::Person;
use crate::id::{DeviceId, DeviceTypeId, EmployeeId};
use crate::time::Timestamp;

/// A stored device row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub device_type_id: DeviceTypeId,
    pub is_enabled: bool,
    /// Serialised JSON, `None` when the column is null.
    pub additional_properties: Option<String>,
}

impl Device {
    /// Parse the stored additional properties.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the stored text is not valid JSON.
    pub fn properties(&self) -> Result<Option<Value>, serde_json::Error> {
        self.additional_properties
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
    }

    /// Overwrite every mutable field from `draft`, pointing at `device_type`.
    pub fn apply(&mut self, draft: DeviceDraft, device_type: &DeviceType) {
        self.name = draft.name;
        self.device_type_id = device_type.id;
        self.is_enabled = draft.is_enabled;
        self.additional_properties = Some(draft.additional_properties.to_string());
    }
}

/// Client-supplied device fields, with the type given by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceDraft {
    pub name: String,
    pub device_type_name: String,
    pub is_enabled: bool,
    pub additional_properties: Value,
}

/// A device ready to be inserted; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDevice {
    pub name: String,
    pub device_type_id: DeviceTypeId,
    pub is_enabled: bool,
    pub additional_properties: Option<String>,
}

impl NewDevice {
    /// Build an insertable device from a draft whose type has been resolved.
    #[must_use]
    pub fn from_draft(draft: DeviceDraft, device_type: &DeviceType) -> Self {
        Self {
            name: draft.name,
            device_type_id: device_type.id,
            is_enabled: draft.is_enabled,
            additional_properties: Some(draft.additional_properties.to_string()),
        }
    }

    /// Attach the identifier assigned by the store.
    #[must_use]
    pub fn with_id(self, id: DeviceId) -> Device {
        Device {
            id,
            name: self.name,
            device_type_id: self.device_type_id,
            is_enabled: self.is_enabled,
            additional_properties: self.additional_properties,
        }
    }
}

/// Identifier and name, as shown in device listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSummary {
    pub id: DeviceId,
    pub name: String,
}

/// One row of a device's assignment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceAssignment {
    pub employee_id: EmployeeId,
    pub issue_date: Timestamp,
    pub person: Person,
}

/// A device together with its type name and assignment history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDetails {
    pub device: Device,
    /// `None` when the referenced type row is missing.
    pub device_type_name: Option<String>,
    pub assignments: Vec<DeviceAssignment>,
}

impl DeviceDetails {
    /// The assignment with the latest issue date, if any.
    ///
    /// When several assignments share the latest date, which one wins is
    /// unspecified.
    #[must_use]
    pub fn current_assignment(&self) -> Option<&DeviceAssignment> {
        self.assignments.iter().max_by_key(|a| a.issue_date)
    }
}
