// SPDX-License-Identifier: GPL-3.0-or-later

use crate::data::Fingerprint;
use core::fmt;
use iri_string::types::{IriStr, IriString};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Structure sometimes used by [Agent][1]s and [Group][2]s to identify them.
///
/// It's one of the 4 _Inverse Functional Identifiers_ (IFI) xAPI cites as a
/// means of identifying unambiguously an [Actor][3].
///
/// [1]: crate::Agent
/// [2]: crate::Group
/// [3]: crate::Actor
#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct Account {
    #[serde(rename = "homePage")]
    home_page: IriString,
    name: String,
}

impl Account {
    /// Return the `home_page` field as an IRI.
    pub fn home_page(&self) -> &IriStr {
        &self.home_page
    }

    /// Return the `home_page` field as a string reference.
    pub fn home_page_as_str(&self) -> &str {
        self.home_page.as_str()
    }

    /// Return the `name` field.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account{{ homePage: \"{}\", name: \"{}\" }}",
            self.home_page_as_str(),
            self.name
        )
    }
}

impl Fingerprint for Account {
    fn fingerprint<H: Hasher>(&self, state: &mut H) {
        let (x, y) = self.home_page.as_slice().to_absolute_and_fragment();
        x.normalize().to_string().hash(state);
        y.hash(state);
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fingerprint_it;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_serde() {
        const JSON: &str = r#"{"homePage":"https://inter.net/","name":"user"}"#;

        let de_result = serde_json::from_str::<Account>(JSON);
        assert!(de_result.is_ok());
        let a1 = de_result.unwrap();
        assert_eq!(a1.home_page_as_str(), "https://inter.net/");
        assert_eq!(a1.name(), "user");

        let se_result = serde_json::to_string(&a1);
        assert!(se_result.is_ok());
        let json = se_result.unwrap();
        assert_eq!(json, JSON);

        // how properties are ordered in the JSON string is irrelevant
        const JSON_: &str = r#"{"name":"user","homePage":"https://inter.net/"}"#;
        let de_result = serde_json::from_str::<Account>(JSON_);
        assert!(de_result.is_ok());
        let a2 = de_result.unwrap();
        assert_eq!(a1, a2);
    }

    #[traced_test]
    #[test]
    fn test_fingerprint_normalized_irl() {
        const JSON1: &str = r#"{"homePage":"HTTP://Inter.Net/","name":"user"}"#;
        const JSON2: &str = r#"{"homePage":"http://inter.net/","name":"user"}"#;

        let a1 = serde_json::from_str::<Account>(JSON1).unwrap();
        let a2 = serde_json::from_str::<Account>(JSON2).unwrap();

        // scheme + host case differences vanish after normalization...
        assert_eq!(fingerprint_it(&a1), fingerprint_it(&a2));
        // ...even when the raw IRIs say otherwise
        assert_ne!(a1.home_page_as_str(), a2.home_page_as_str());
    }
}
