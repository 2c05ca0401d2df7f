// SPDX-License-Identifier: GPL-3.0-or-later

use crate::data::{Fingerprint, LanguageMap, MyLanguageTag, fingerprint_it};
use core::fmt;
use iri_string::types::{IriStr, IriString};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::hash::{Hash, Hasher};

/// Structure consisting of an IRI (Internationalized Resource Identifier) and
/// a set of labels corresponding to multiple languages or dialects which
/// provide human-readable meanings of the [Verb].
///
/// A [Verb] **always** appears in a [Statement][crate::Statement].
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
pub struct Verb {
    id: IriString,
    display: Option<LanguageMap>,
}

impl Verb {
    /// Return the `id` field.
    pub fn id(&self) -> &IriStr {
        &self.id
    }

    /// Return the `id` field as a string.
    pub fn id_as_str(&self) -> &str {
        self.id.as_str()
    }

    /// Return the human readable representation of the Verb in the specified
    /// language `tag`. These labels do not have any impact on the meaning of
    /// a [Statement][crate::Statement] where a [Verb] is used, but serve to
    /// give human-readable display of that meaning in different languages.
    pub fn display(&self, tag: &MyLanguageTag) -> Option<&str> {
        match &self.display {
            Some(lm) => lm.get(tag),
            None => None,
        }
    }

    /// Return a reference to the [`display`][LanguageMap] if this instance has
    /// one; `None` otherwise.
    pub fn display_as_map(&self) -> Option<&LanguageMap> {
        self.display.as_ref()
    }

    /// Return the fingerprint of this instance.
    pub fn uid(&self) -> u64 {
        fingerprint_it(self)
    }

    /// Return TRUE if this is _Equivalent_ to `that`; FALSE otherwise.
    pub fn equivalent(&self, that: &Verb) -> bool {
        self.uid() == that.uid()
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vec = vec![];

        vec.push(format!("id: \"{}\"", self.id));
        if let Some(z_display) = self.display.as_ref() {
            vec.push(format!("display: {z_display}"));
        }

        let res = vec
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Verb{{ {res} }}")
    }
}

impl Fingerprint for Verb {
    fn fingerprint<H: Hasher>(&self, state: &mut H) {
        let (x, y) = self.id.as_slice().to_absolute_and_fragment();
        x.normalize().to_string().hash(state);
        y.hash(state);
        if self.display.is_some() {
            self.display.as_ref().unwrap().fingerprint(state);
        }
    }
}
