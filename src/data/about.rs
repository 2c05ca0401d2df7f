// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{MyError, MyVersion, V200};
use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Structure containing information about an LRS, incl. the xAPI version(s)
/// it supports.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct About {
    // IMPORTANT (rsn) 20240526 - this field is set as a Vector of String and
    // not a Vector of MyVersion b/c it's used in higher level layers that do
    // not need to concern themselves w/ how i work around the constraint re.
    // serialization imposed by the semver::Version.
    #[serde(rename = "version")]
    versions: Vec<String>,
}

impl About {
    /// Return the list of supported xAPI versions.
    pub fn versions(&self) -> Result<Vec<MyVersion>, MyError> {
        let mut vec = vec![];
        for x in self.versions.iter() {
            vec.push(MyVersion::from_str(x)?);
        }
        Ok(vec)
    }
}

impl Default for About {
    fn default() -> Self {
        About {
            versions: vec![V200.to_owned()],
        }
    }
}

impl fmt::Display for About {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "About{{ versions: [{}] }}",
            &self
                .versions
                .iter()
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
