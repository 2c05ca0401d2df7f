// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{
    MyLanguageTag,
    data::{ActivityDefinition, Fingerprint, ObjectType},
};
use core::fmt;
use iri_string::types::{IriStr, IriString};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::hash::{Hash, Hasher};

/// Structure making up "this" in "I did this"; it is something with which an
/// [Actor][1] interacted. It can be a unit of instruction, experience, or
/// performance that is to be tracked in meaningful combination with a [Verb][2].
///
/// Interpretation of [Activity] is broad, meaning that activities can even be
/// tangible objects such as a chair (real or virtual). In the [Statement][3]
/// "Anna tried a cake recipe", the recipe constitutes the [Activity]. Other
/// examples may include a book, an e-learning course, a hike, or a meeting.
///
/// [1]: crate::Actor
/// [2]: crate::Verb
/// [3]: crate::Statement
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Activity {
    #[serde(rename = "objectType")]
    object_type: Option<ObjectType>,
    id: IriString,
    definition: Option<ActivityDefinition>,
}

impl Activity {
    /// Return TRUE if the `objectType` property is as expected; FALSE otherwise.
    pub fn check_object_type(&self) -> bool {
        if self.object_type.is_none() {
            true
        } else {
            self.object_type.as_ref().unwrap() == &ObjectType::Activity
        }
    }

    /// Return `id` field as an IRI.
    pub fn id(&self) -> &IriStr {
        &self.id
    }

    /// Return `id` field as a string reference.
    pub fn id_as_str(&self) -> &str {
        self.id.as_str()
    }

    /// Return `definition` field if set; `None` otherwise.
    pub fn definition(&self) -> Option<&ActivityDefinition> {
        self.definition.as_ref()
    }

    // ===== convenience pass-through methods to the `definition` field =====

    /// Convenience pass-through method to the `definition` field.
    /// Return `name` for the given language `tag` if it exists; `None` otherwise.
    pub fn name(&self, tag: &MyLanguageTag) -> Option<&str> {
        match &self.definition {
            None => None,
            Some(def) => def.name(tag),
        }
    }

    /// Convenience pass-through method to the `definition` field.
    /// Return `description` for the given language `tag` if it exists; `None`
    /// otherwise.
    pub fn description(&self, tag: &MyLanguageTag) -> Option<&str> {
        match &self.definition {
            None => None,
            Some(def) => def.description(tag),
        }
    }

    /// Convenience pass-through method to the `definition` field.
    /// Return `type_` if set; `None` otherwise.
    pub fn type_(&self) -> Option<&IriStr> {
        match &self.definition {
            None => None,
            Some(def) => def.type_(),
        }
    }

    /// Convenience pass-through method to the `definition` field.
    /// Return `more_info` if set; `None` otherwise.
    ///
    /// When set, it's an IRL that points to information about the associated
    /// [Activity] possibly incl. a way to launch it.
    pub fn more_info(&self) -> Option<&IriStr> {
        match &self.definition {
            None => None,
            Some(def) => def.more_info(),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vec = vec![];
        vec.push(format!("id: \"{}\"", self.id));
        if self.definition.is_some() {
            vec.push(format!("definition: {}", self.definition.as_ref().unwrap()))
        }
        let res = vec
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Activity{{ {res} }}")
    }
}

impl Fingerprint for Activity {
    fn fingerprint<H: Hasher>(&self, state: &mut H) {
        // discard `object_type`
        let (x, y) = self.id.as_slice().to_absolute_and_fragment();
        x.normalize().to_string().hash(state);
        y.hash(state);
        if self.definition.is_some() {
            self.definition.as_ref().unwrap().fingerprint(state);
        }
    }
}
