// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{data::DataError, emit_error};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Enumeration of `objectType` property values xAPI Objects may take.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ObjectType {
    /// An [Activity][crate::Activity] --the default.
    #[default]
    Activity,
    /// An [Agent][crate::Agent].
    Agent,
    /// A [Group][crate::Group].
    Group,
    /// A [StatementRef][crate::StatementRef].
    StatementRef,
}

impl ObjectType {
    /// Construct from a string ensuring correct case-sensitive spelling of
    /// the names as mandated by xAPI.
    pub fn from(s: &str) -> Result<Self, DataError> {
        match s {
            "Activity" => Ok(ObjectType::Activity),
            "Agent" => Ok(ObjectType::Agent),
            "Group" => Ok(ObjectType::Group),
            "StatementRef" => Ok(ObjectType::StatementRef),
            x => emit_error!(DataError::Constraint(
                format!("Unknown objectType: '{x}'").into()
            )),
        }
    }

    /// Return TRUE if this is [ObjectType::Activity]; FALSE otherwise.
    pub fn is_activity(&self) -> bool {
        self == &ObjectType::Activity
    }

    /// Return TRUE if this is [ObjectType::Agent]; FALSE otherwise.
    pub fn is_agent(&self) -> bool {
        self == &ObjectType::Agent
    }

    /// Return TRUE if this is [ObjectType::Group]; FALSE otherwise.
    pub fn is_group(&self) -> bool {
        self == &ObjectType::Group
    }

    /// Return TRUE if this is [ObjectType::StatementRef]; FALSE otherwise.
    pub fn is_statement_ref(&self) -> bool {
        self == &ObjectType::StatementRef
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::Activity => write!(f, "Activity"),
            ObjectType::Agent => write!(f, "Agent"),
            ObjectType::Group => write!(f, "Group"),
            ObjectType::StatementRef => write!(f, "StatementRef"),
        }
    }
}
