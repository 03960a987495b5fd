//! Typed identifier newtypes backed by store-assigned integers.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw row identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the raw row identifier.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Device`](crate::device::Device).
    DeviceId
);

define_id!(
    /// Unique identifier for a [`DeviceType`](crate::device_type::DeviceType).
    DeviceTypeId
);

define_id!(
    /// Unique identifier for an [`Employee`](crate::employee::Employee).
    EmployeeId
);

define_id!(
    /// Unique identifier for a [`Position`](crate::employee::Position).
    PositionId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_raw_number() {
        assert_eq!(DeviceId::new(17).to_string(), "17");
    }

    #[test]
    fn should_serialize_as_bare_number() {
        let json = serde_json::to_string(&EmployeeId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn should_deserialize_from_bare_number() {
        let id: PositionId = serde_json::from_str("42").unwrap();
        assert_eq!(id, PositionId::new(42));
    }

    #[test]
    fn should_reject_non_numeric_id() {
        assert!(serde_json::from_str::<PositionId>("\"abc\"").is_err());
    }
}
