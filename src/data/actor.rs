// SPDX-License-Identifier: GPL-3.0-or-later

use crate::data::{Account, Agent, Fingerprint, Group, MyEmailAddress, fingerprint::fingerprint_it};
use core::fmt;
use iri_string::types::UriStr;
use serde::{
    Deserialize, Serialize,
    de::{self, Error},
};
use serde_json::Map;
use std::hash::Hasher;
use tracing::error;

/// Representation of an individual ([Agent]) or group ([Group]) (a) referenced
/// in a [Statement][1] involved in an action within an [Activity][2] or (b) is
/// the `authority` asserting the truthfulness of [Statement][1]s.
///
/// [1]: crate::Statement
/// [2]: crate::Activity
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Actor {
    /// The [Actor] is effectively an [Agent].
    Agent(Agent),
    /// The [Actor] is effectively a [Group] of [Agent]s.
    Group(Group),
}

impl Actor {
    /// Return TRUE if this is an [Agent] variant; FALSE otherwise.
    pub fn is_agent(&self) -> bool {
        matches!(self, Actor::Agent(_))
    }

    /// Return TRUE if this is a [Group] variant; FALSE otherwise.
    pub fn is_group(&self) -> bool {
        matches!(self, Actor::Group(_))
    }

    // ===== convenience methods common to every Actor =====

    /// Return `name` field if set; `None` otherwise.
    pub fn name(&self) -> Option<&str> {
        match self {
            Actor::Agent(x) => x.name(),
            Actor::Group(x) => x.name(),
        }
    }

    /// Return `mbox` field if set; `None` otherwise.
    pub fn mbox(&self) -> Option<&MyEmailAddress> {
        match self {
            Actor::Agent(x) => x.mbox(),
            Actor::Group(x) => x.mbox(),
        }
    }

    /// Return `mbox_sha1sum` field (hex-encoded SHA1 hash of this entity's
    /// `mbox` URI) if set; `None` otherwise.
    pub fn mbox_sha1sum(&self) -> Option<&str> {
        match self {
            Actor::Agent(x) => x.mbox_sha1sum(),
            Actor::Group(x) => x.mbox_sha1sum(),
        }
    }

    /// Return `openid` field (openID URI of this entity) if set; `None`
    /// otherwise.
    pub fn openid(&self) -> Option<&UriStr> {
        match self {
            Actor::Agent(x) => x.openid(),
            Actor::Group(x) => x.openid(),
        }
    }

    /// Return `account` field (reference to this entity's [Account]) if set;
    /// `None` otherwise.
    pub fn account(&self) -> Option<&Account> {
        match self {
            Actor::Agent(x) => x.account(),
            Actor::Group(x) => x.account(),
        }
    }

    /// Return the fingerprint of this instance.
    pub fn uid(&self) -> u64 {
        fingerprint_it(self)
    }

    /// Return TRUE if this is _Equivalent_ to `that`; FALSE otherwise.
    pub fn equivalent(&self, that: &Actor) -> bool {
        self.uid() == that.uid()
    }
}

impl<'de> Deserialize<'de> for Actor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let val = serde_json::Value::deserialize(deserializer)?;
        match Map::deserialize(val.clone()) {
            Ok(x) => {
                if x.contains_key("objectType") {
                    if let Ok(x) = Agent::deserialize(val.clone()) {
                        if x.check_object_type() {
                            return Ok(Actor::Agent(x));
                        }
                    }
                    if let Ok(x) = Group::deserialize(val) {
                        Ok(Actor::Group(x))
                    } else {
                        Err(D::Error::unknown_variant("actor", &["Agent", "Group"]))
                    }
                } else {
                    // NOTE (rsn) 20241121 - only Agent is allowed to not have an
                    // explicit 'objectType' property in its serialization...
                    if let Ok(x) = Agent::deserialize(val.clone()) {
                        Ok(Actor::Agent(x))
                    } else {
                        error!("Alleged Actor has no 'objectType' and is NOT an Agent");
                        Err(D::Error::unknown_field("actor", &["Agent", "Group"]))
                    }
                }
            }
            Err(x) => {
                error!("Failed deserializing '{}' as Actor: {}", val, x);
                Err(de::Error::unknown_field("actor", &["Agent", "Group"]))
            }
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Agent(x) => write!(f, "{x}"),
            Actor::Group(x) => write!(f, "{x}"),
        }
    }
}

impl Fingerprint for Actor {
    fn fingerprint<H: Hasher>(&self, state: &mut H) {
        match self {
            Actor::Agent(x) => x.fingerprint(state),
            Actor::Group(x) => x.fingerprint(state),
        }
    }
}
