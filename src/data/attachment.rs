// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{
    MyLanguageTag,
    data::{Fingerprint, LanguageMap},
};
use core::fmt;
use iri_string::types::{IriStr, IriString};
use mime::Mime;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};
use std::hash::{Hash, Hasher};

/// Structure representing an important piece of data that is part of a
/// _Learning Record_. Could be an essay, a video, etc...
///
/// Another example could be the image of a certificate that was granted as a
/// result of an experience.
#[serde_as]
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    usage_type: IriString,
    display: LanguageMap,
    description: Option<LanguageMap>,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    content_type: Mime,
    length: i64,
    sha2: String,
    file_url: Option<IriString>,
}

impl Attachment {
    /// Return `usage_type` as an IRI.
    pub fn usage_type(&self) -> &IriStr {
        self.usage_type.as_ref()
    }

    /// Return `display` for the given language `tag` if it exists; `None` otherwise.
    pub fn display(&self, tag: &MyLanguageTag) -> Option<&str> {
        self.display.get(tag)
    }

    /// Return a reference to [`display`][LanguageMap].
    pub fn display_as_map(&self) -> &LanguageMap {
        &self.display
    }

    /// Return `description` for the given language `tag` if it exists; `None`
    /// otherwise.
    pub fn description(&self, tag: &MyLanguageTag) -> Option<&str> {
        match &self.description {
            Some(map) => map.get(tag),
            None => None,
        }
    }

    /// Return a reference to [`description`][LanguageMap] if set; `None` otherwise.
    pub fn description_as_map(&self) -> Option<&LanguageMap> {
        self.description.as_ref()
    }

    /// Return `content_type`.
    pub fn content_type(&self) -> &Mime {
        &self.content_type
    }

    /// Return `length` (in bytes).
    pub fn length(&self) -> i64 {
        self.length
    }

    /// Return `sha2` (hash sum).
    pub fn sha2(&self) -> &str {
        self.sha2.as_str()
    }

    /// Return `file_url` if set; `None` otherwise.
    pub fn file_url(&self) -> Option<&IriStr> {
        self.file_url.as_deref()
    }

    /// Return `file_url` as string reference if set; `None` otherwise.
    pub fn file_url_as_str(&self) -> Option<&str> {
        if let Some(z_file_url) = self.file_url.as_ref() {
            Some(z_file_url.as_ref())
        } else {
            None
        }
    }
}

impl fmt::Display for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vec = vec![];

        vec.push(format!("usageType: \"{}\"", self.usage_type));
        vec.push(format!("display: {}", self.display));
        if let Some(z_description) = self.description.as_ref() {
            vec.push(format!("description: {z_description}"));
        }
        vec.push(format!("contentType: \"{}\"", self.content_type));
        vec.push(format!("length: {}", self.length));
        vec.push(format!("sha2: \"{}\"", self.sha2));
        if let Some(z_file_url) = self.file_url.as_ref() {
            vec.push(format!("fileUrl: \"{z_file_url}\""));
        }

        let res = vec
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Attachment{{ {res} }}")
    }
}

impl Fingerprint for Attachment {
    fn fingerprint<H: Hasher>(&self, state: &mut H) {
        self.usage_type.hash(state);
        self.display.fingerprint(state);
        if self.description.is_some() {
            self.description.as_ref().unwrap().fingerprint(state);
        }
        self.content_type.to_string().hash(state);
        self.length.hash(state);
        // the hash sum stands in for the raw contents
        self.sha2.hash(state);
        self.file_url.hash(state);
    }
}
