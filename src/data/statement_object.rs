// SPDX-License-Identifier: GPL-3.0-or-later

use crate::data::{Activity, Agent, Fingerprint, Group, StatementRef};
use core::fmt;
use serde::{
    Deserialize, Serialize,
    de::{self},
};
use serde_json::Value;
use std::hash::Hasher;
use tracing::{debug, error};

/// Enumeration representing the _subject_ (or _target_) of an _action_ (a
/// [Verb][1]) carried out by an [Actor][2] (an [Agent] or a [Group]) captured
/// in a [Statement][3].
///
/// The exact variant of the _object_ is gleaned --explicitly most of the times
/// but implicitly in special cases-- from its `objectType` property value (a
/// variant of [ObjectType][4]).
///
/// [1]: crate::Verb
/// [2]: crate::Actor
/// [3]: crate::Statement
/// [4]: crate::ObjectType
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatementObject {
    /// The _object_ is an [Agent].
    Agent(Agent),
    /// The _object_ is a [Group].
    Group(Group),
    /// The _object_ is a [Statement-Reference][StatementRef].
    StatementRef(StatementRef),
    /// The _object_ is an [Activity].
    Activity(Activity),
}

impl<'de> Deserialize<'de> for StatementObject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v: Value = Deserialize::deserialize(deserializer)?;
        match v {
            Value::Object(ref map) => {
                let ot = map.get("objectType").map_or(
                    {
                        debug!("Missing 'objectType'. Assume 'Activity' + continue");
                        Some("Activity")
                    },
                    |x| x.as_str(),
                );
                match ot {
                    Some("Agent") => match Agent::deserialize(v) {
                        Ok(x) => Ok(StatementObject::Agent(x)),
                        Err(x) => {
                            let msg = format!("input is not Agent: {x}");
                            error!("objectType is 'Agent', but {}", msg);
                            Err(de::Error::custom(msg))
                        }
                    },
                    Some("Group") => match Group::deserialize(v) {
                        Ok(x) => Ok(StatementObject::Group(x)),
                        Err(x) => {
                            let msg = format!("input is not Group: {x}");
                            error!("objectType is 'Group', but {}", msg);
                            Err(de::Error::custom(msg))
                        }
                    },
                    Some("StatementRef") => match StatementRef::deserialize(v) {
                        Ok(x) => Ok(StatementObject::StatementRef(x)),
                        Err(x) => {
                            let msg = format!("input is not StatementRef: {x}");
                            error!("objectType is 'StatementRef', but {}", msg);
                            Err(de::Error::custom(msg))
                        }
                    },
                    Some("Activity") => match Activity::deserialize(v) {
                        Ok(x) => Ok(StatementObject::Activity(x)),
                        Err(x) => {
                            let msg = format!("input is not Activity: {x}");
                            error!("objectType is 'Activity', but {}", msg);
                            Err(de::Error::custom(msg))
                        }
                    },
                    _ => Err(de::Error::custom(
                        "Unknown 'objectType'. Expected Agent | Group | StatementRef | Activity",
                    )),
                }
            }
            _ => Err(de::Error::custom("Expected JSON object")),
        }
    }
}

impl StatementObject {
    /// Return TRUE if this is an [Activity][1] variant or FALSE otherwise.
    ///
    /// [1]: StatementObject#variant.Activity
    pub fn is_activity(&self) -> bool {
        matches!(self, StatementObject::Activity(_))
    }

    /// Return TRUE if this is an [Agent][1] variant or FALSE otherwise.
    ///
    /// [1]: StatementObject#variant.Agent
    pub fn is_agent(&self) -> bool {
        matches!(self, StatementObject::Agent(_))
    }

    /// Return TRUE if this is a [Group][1] variant or FALSE otherwise.
    ///
    /// [1]: StatementObject#variant.Group
    pub fn is_group(&self) -> bool {
        matches!(self, StatementObject::Group(_))
    }

    /// Return TRUE if this is an [StatementRef][1] variant or FALSE otherwise.
    ///
    /// [1]: StatementObject#variant.StatementRef
    pub fn is_statement_ref(&self) -> bool {
        matches!(self, StatementObject::StatementRef(_))
    }
}

impl fmt::Display for StatementObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementObject::Agent(x) => write!(f, "{x}"),
            StatementObject::Group(x) => write!(f, "{x}"),
            StatementObject::StatementRef(x) => write!(f, "{x}"),
            StatementObject::Activity(x) => write!(f, "{x}"),
        }
    }
}

impl Fingerprint for StatementObject {
    fn fingerprint<H: Hasher>(&self, state: &mut H) {
        match self {
            StatementObject::Agent(x) => x.fingerprint(state),
            StatementObject::Group(x) => x.fingerprint(state),
            StatementObject::StatementRef(x) => x.fingerprint(state),
            StatementObject::Activity(x) => x.fingerprint(state),
        }
    }
}
