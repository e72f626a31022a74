//! Status enums for projects and tasks.
//!
//! Each variant's discriminant is its rank: the value stored in the
//! SMALLINT `status` columns and the key used when ordering by status.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Every variant in rank order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Position in the fixed ascending order.
            pub fn rank(self) -> u8 {
                self as u8
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }

        impl TryFrom<StatusId> for $name {
            type Error = CoreError;

            fn try_from(value: StatusId) -> Result<Self, Self::Error> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|s| s.id() == value)
                    .ok_or_else(|| {
                        CoreError::Validation(format!(
                            "Unknown {} id {value}",
                            stringify!($name)
                        ))
                    })
            }
        }
    };
}

define_status_enum! {
    /// Project lifecycle status.
    ProjectStatus {
        #[default]
        NotStarted = 0,
        Active = 1,
        Completed = 2,
    }
}

define_status_enum! {
    /// Task progress status.
    TaskStatus {
        #[default]
        ToDo = 0,
        InProgress = 1,
        Done = 2,
    }
}
