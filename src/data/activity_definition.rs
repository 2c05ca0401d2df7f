// SPDX-License-Identifier: GPL-3.0-or-later

use crate::data::{Fingerprint, LanguageMap, MyLanguageTag};
use core::fmt;
use iri_string::types::{IriStr, IriString};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::hash::{Hash, Hasher};

/// Structure that provides additional information (metadata) related to an
/// [Activity][crate::Activity].
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDefinition {
    name: Option<LanguageMap>,
    description: Option<LanguageMap>,
    #[serde(rename = "type")]
    type_: Option<IriString>,
    more_info: Option<IriString>,
}

impl ActivityDefinition {
    /// Return the `name` for the given language `tag` if it exists; `None`
    /// otherwise.
    pub fn name(&self, tag: &MyLanguageTag) -> Option<&str> {
        match &self.name {
            Some(lm) => lm.get(tag),
            None => None,
        }
    }

    /// Return the `description` for the given language `tag` if it exists;
    /// `None` otherwise.
    pub fn description(&self, tag: &MyLanguageTag) -> Option<&str> {
        match &self.description {
            Some(lm) => lm.get(tag),
            None => None,
        }
    }

    /// Return the `type_` field if set; `None` otherwise.
    pub fn type_(&self) -> Option<&IriStr> {
        self.type_.as_deref()
    }

    /// Return the `more_info` field if set; `None` otherwise.
    ///
    /// When set, it's an IRL that points to information about the associated
    /// [Activity][crate::Activity] possibly incl. a way to launch it.
    pub fn more_info(&self) -> Option<&IriStr> {
        self.more_info.as_deref()
    }
}

impl fmt::Display for ActivityDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vec = vec![];
        if self.name.is_some() {
            vec.push(format!("name: {}", self.name.as_ref().unwrap()));
        }
        if self.description.is_some() {
            vec.push(format!(
                "description: {}",
                self.description.as_ref().unwrap()
            ));
        }
        if self.type_.is_some() {
            vec.push(format!("type: \"{}\"", self.type_.as_ref().unwrap()));
        }
        if self.more_info.is_some() {
            vec.push(format!(
                "moreInfo: \"{}\"",
                self.more_info.as_ref().unwrap()
            ));
        }
        let res = vec
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "ActivityDefinition{{ {res} }}")
    }
}

impl Fingerprint for ActivityDefinition {
    fn fingerprint<H: Hasher>(&self, state: &mut H) {
        if self.name.is_some() {
            self.name.as_ref().unwrap().fingerprint(state);
        }
        if self.description.is_some() {
            self.description.as_ref().unwrap().fingerprint(state);
        }
        self.type_.hash(state);
        self.more_info.hash(state);
    }
}
