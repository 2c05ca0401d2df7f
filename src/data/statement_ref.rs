// SPDX-License-Identifier: GPL-3.0-or-later

use crate::data::{Fingerprint, ObjectType};
use core::fmt;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Structure containing the UUID (Universally Unique Identifier) of a
/// [Statement][crate::Statement] referenced as the _object_ of another.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StatementRef {
    #[serde(rename = "objectType")]
    object_type: ObjectType,
    id: Uuid,
}

impl StatementRef {
    /// Return the UUID of the referenced Statement.
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    /// Return TRUE if the `objectType` property is [StatementRef][1]; FALSE
    /// otherwise.
    ///
    /// [1]: ObjectType#variant.StatementRef
    pub fn check_object_type(&self) -> bool {
        self.object_type == ObjectType::StatementRef
    }
}

impl fmt::Display for StatementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StatementRef{{ id: \"{}\" }}",
            self.id
                .as_hyphenated()
                .encode_lower(&mut Uuid::encode_buffer())
        )
    }
}

impl Fingerprint for StatementRef {
    fn fingerprint<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}
