// SPDX-License-Identifier: GPL-3.0-or-later

use crate::data::{DataError, Fingerprint};
use core::fmt;
use email_address::EmailAddress;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};
use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

/// Implementation of Email-Address that wraps [EmailAddress] to better satisfy
/// the requirements of xAPI while reducing the verbosity making the mandatory
/// `mailto:` scheme prefix optional.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MyEmailAddress(
    #[serde(serialize_with = "mbox_ser", deserialize_with = "mbox_des")] EmailAddress,
);

impl MyEmailAddress {
    pub(crate) fn from(email: EmailAddress) -> Self {
        MyEmailAddress(email)
    }

    /// Return this email address formatted as a URI. Will also URI-encode the
    /// address itself. So, `name@example.org` becomes `mailto:name@example.org`.
    pub fn to_uri(&self) -> String {
        self.0.to_uri()
    }
}

impl FromStr for MyEmailAddress {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let email = if let Some(x) = s.strip_prefix("mailto:") {
            x
        } else {
            s
        };
        Ok(MyEmailAddress::from(EmailAddress::from_str(email)?))
    }
}

impl fmt::Display for MyEmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Fingerprint for MyEmailAddress {
    fn fingerprint<H: Hasher>(&self, state: &mut H) {
        self.0.as_str().to_lowercase().hash(state);
    }
}

impl AsRef<EmailAddress> for MyEmailAddress {
    fn as_ref(&self) -> &EmailAddress {
        &self.0
    }
}

/// `serde` JSON deserialization visitor for correctly parsing email addresses
/// whether or not they are prefixed w/ the `mailto` scheme.
struct EmailAddressVisitor;

impl<'de> Visitor<'de> for EmailAddressVisitor {
    type Value = EmailAddress;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an [mailto:]email-address")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let email = if let Some(x) = value.strip_prefix("mailto:") {
            x
        } else {
            value
        };
        match EmailAddress::from_str(email) {
            Ok(x) => Ok(x),
            Err(x) => Err(de::Error::custom(x)),
        }
    }
}

/// Serializer implementation for the wrapped EMail type.
fn mbox_ser<S>(this: &EmailAddress, ser: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    ser.serialize_str(this.to_uri().as_str())
}

/// Deserializer implementation for the wrapped Email type.
fn mbox_des<'de, D>(des: D) -> Result<EmailAddress, D::Error>
where
    D: Deserializer<'de>,
{
    des.deserialize_str(EmailAddressVisitor)
}
