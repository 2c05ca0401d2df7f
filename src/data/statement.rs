// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{
    data::{
        check_for_nulls, fingerprint_it, stored_ser, Actor, Attachment, DataError, Fingerprint,
        MyTimestamp, MyVersion, StatementObject, Verb,
    },
    emit_error,
};
use chrono::{DateTime, SecondsFormat, Utc};
use core::fmt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;
use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};
use uuid::Uuid;

/// Structure showing evidence of any sort of experience or event to be tracked
/// in xAPI as a _Learning Record_.
///
/// A set of several [Statement]s, each representing an event in time, might
/// be used to track complete details about a _learning experience_.
///
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Statement {
    id: Option<Uuid>,
    actor: Actor,
    verb: Verb,
    object: StatementObject,
    timestamp: Option<MyTimestamp>,
    #[serde(serialize_with = "stored_ser")]
    stored: Option<DateTime<Utc>>,
    authority: Option<Actor>,
    version: Option<MyVersion>,
    attachments: Option<Vec<Attachment>>,
}

impl Statement {
    /// Construct a [Statement] from a JSON map.
    pub fn from_json_obj(map: Map<String, Value>) -> Result<Self, DataError> {
        for (k, v) in &map {
            // NOTE (rsn) 20241104 - from "4.2.1 Table Guidelines": "The LRS
            // shall reject Statements with any null values (except inside
            // extensions)."
            if v.is_null() {
                emit_error!(DataError::Constraint(format!("Key '{}' is null", k).into()))
            } else if k != "extensions" {
                check_for_nulls(v)?
            }
        }
        // finally convert it to a Statement...
        let stmt: Statement = serde_json::from_value(Value::Object(map.to_owned()))?;
        Ok(stmt)
    }

    /// Return the `id` field (a UUID) if set; `None` otherwise. It's assigned by
    /// the LRS if not already set by the LRP.
    pub fn id(&self) -> Option<&Uuid> {
        self.id.as_ref()
    }

    /// Set the `id` field of this instance to the given value.
    pub fn set_id(&mut self, id: Uuid) {
        self.id = Some(id)
    }

    /// Return the [Actor] whom the [Statement] is about. The [Actor] is either
    /// an [Agent][1] or a [Group][2].
    ///
    /// [1]: crate::Agent
    /// [2]: crate::Group
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Return the _action_ taken by the _actor_.
    pub fn verb(&self) -> &Verb {
        &self.verb
    }

    /// Return an [Activity][1], an [Agent][2], or another [Statement] that is
    /// the [Object][StatementObject] of this instance.
    ///
    /// [1]: crate::Activity
    /// [2]: crate::Agent
    pub fn object(&self) -> &StatementObject {
        &self.object
    }

    /// Return the timestamp of when the events described within this [Statement]
    /// occurred as a `chrono::DateTime` if set; `None`  otherwise.
    pub fn timestamp(&self) -> Option<&DateTime<Utc>> {
        if self.timestamp.is_none() {
            None
        } else {
            Some(self.timestamp.as_ref().unwrap().inner())
        }
    }

    /// Return the timestamp of when this [Statement] was persisted if set;
    /// `None` otherwise.
    pub fn stored(&self) -> Option<&DateTime<Utc>> {
        self.stored.as_ref()
    }

    pub(crate) fn set_stored(&mut self, val: DateTime<Utc>) {
        self.stored = Some(val);
    }

    /// Return the [Agent][crate::Agent] or the [Group][crate::Group] who is
    /// asserting this [Statement] is TRUE if set or `None` otherwise.
    pub fn authority(&self) -> Option<&Actor> {
        self.authority.as_ref()
    }

    /// Return the [Statement]'s associated xAPI version if set; `None` otherwise.
    ///
    /// When set, it's expected to be formatted according to [Semantic Versioning
    /// 1.0.0][1].
    ///
    /// [1]: https://semver.org/spec/v1.0.0.html
    pub fn version(&self) -> Option<&MyVersion> {
        if self.version.is_none() {
            None
        } else {
            Some(self.version.as_ref().unwrap())
        }
    }

    /// Return a reference to the potentially empty array of [`attachments`][Attachment].
    pub fn attachments(&self) -> &[Attachment] {
        match &self.attachments {
            Some(x) => x,
            None => &[],
        }
    }

    /// Return a pretty-printed output of `self`.
    pub fn print(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| String::from("$Statement"))
    }

    /// Return the fingerprint of this instance.
    pub fn uid(&self) -> u64 {
        fingerprint_it(self)
    }

    /// Return TRUE if this is _Equivalent_ to `that` and FALSE otherwise.
    ///
    /// Two [Statement]s are _Equivalent_ when they carry the same byte-content
    /// in every property except `id` and `stored`. In particular `timestamp`,
    /// `authority`, `version`, `attachments`, and referenced [Activity][1]
    /// definitions all count towards the verdict.
    ///
    /// [1]: crate::Activity
    pub fn equivalent(&self, that: &Statement) -> bool {
        self.uid() == that.uid()
    }
}

impl Fingerprint for Statement {
    fn fingerprint<H: Hasher>(&self, state: &mut H) {
        // discard `id` and `stored`; every other property counts
        self.actor.fingerprint(state);
        self.verb.fingerprint(state);
        self.object.fingerprint(state);
        if self.timestamp.is_some() {
            self.timestamp.as_ref().unwrap().inner().hash(state);
        }
        if self.authority.is_some() {
            self.authority.as_ref().unwrap().fingerprint(state);
        }
        if self.version.is_some() {
            self.version.as_ref().unwrap().to_string().hash(state);
        }
        if self.attachments.is_some() {
            Fingerprint::fingerprint_slice(self.attachments.as_ref().unwrap(), state);
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vec = vec![];

        if self.id().is_some() {
            // always use the hyphenated lowercase format for UUIDs...
            vec.push(format!(
                "id: \"{}\"",
                self.id
                    .as_ref()
                    .unwrap()
                    .hyphenated()
                    .encode_lower(&mut Uuid::encode_buffer())
            ));
        }
        vec.push(format!("actor: {}", self.actor));
        vec.push(format!("verb: {}", self.verb));
        vec.push(format!("object: {}", self.object));
        if self.timestamp.is_some() {
            vec.push(format!(
                "timestamp: \"{}\"",
                self.timestamp.as_ref().unwrap()
            ))
        }
        if self.stored.is_some() {
            let ts = self.stored.as_ref().unwrap();
            vec.push(format!(
                "stored: \"{}\"",
                ts.to_rfc3339_opts(SecondsFormat::Millis, true)
            ))
        }
        if self.authority.is_some() {
            vec.push(format!("authority: {}", self.authority.as_ref().unwrap()))
        }
        if self.version.is_some() {
            vec.push(format!("version: \"{}\"", self.version.as_ref().unwrap()))
        }
        if self.attachments.is_some() {
            let items = self.attachments.as_deref().unwrap();
            vec.push(format!(
                "attachments: [{}]",
                items
                    .iter()
                    .map(|x| x.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        }
        let res = vec
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Statement{{ {} }}", res)
    }
}

impl FromStr for Statement {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let map: Map<String, Value> = serde_json::from_str(s)?;
        Self::from_json_obj(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    #[should_panic]
    fn test_extra_properties() {
        const S: &str = r#"{
"actor":{"objectType":"Agent","name":"xAPI mbox","mbox":"mailto:xapi@adlnet.gov"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/attended","display":{"en-US":"attended"}},
"object":{"objectType":"Activity","id":"http://www.example.com/meetings/occurances/34534"},
"iD":"46bf512f-56ec-45ef-8f95-1f4b352386e6"}"#;

        let map: Map<String, Value> = serde_json::from_str(S).unwrap();
        assert!(!map.contains_key("id"));
        assert!(!map.contains_key("ID"));
        assert!(!map.contains_key("Id"));
        assert!(map.contains_key("iD"));
        let s = serde_json::from_value::<Statement>(Value::Object(map));
        assert!(s.is_err());

        // now try from_str; which calls from_json_obj... it should panic
        Statement::from_str(S).unwrap();
    }

    #[traced_test]
    #[test]
    fn test_extensions_w_nulls() {
        const S: &str = r#"{
"actor":{"objectType":"Agent","name":"xAPI account","mbox":"mailto:xapi@adlnet.gov"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/attended","display":{"en-GB":"attended"}},
"object":{
  "objectType":"Activity",
  "id":"http://www.example.com/meetings/occurances/34534",
  "definition":{
    "type":"http://adlnet.gov/expapi/activities/meeting",
    "name":{"en-GB":"example meeting","en-US":"example meeting"},
    "description":{"en-GB":"An example meeting.","en-US":"An example meeting."},
    "moreInfo":"http://virtualmeeting.example.com/345256",
    "extensions":{"http://example.com/null":null}}}}"#;

        assert!(Statement::from_str(S).is_ok());
    }

    #[traced_test]
    #[test]
    fn test_null_values() {
        const S: &str = r#"{
"actor":{"objectType":"Agent","name":"xAPI account","mbox":"mailto:xapi@adlnet.gov"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/attended","display":{"en-US":"attended"}},
"object":{"objectType":"Activity","id":"http://www.example.com/meetings/occurances/34534"},
"timestamp":null}"#;

        assert!(Statement::from_str(S).is_err());

        // same when the null is buried deeper...
        const S2: &str = r#"{
"actor":{"objectType":"Agent","name":null,"mbox":"mailto:xapi@adlnet.gov"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/attended","display":{"en-US":"attended"}},
"object":{"objectType":"Activity","id":"http://www.example.com/meetings/occurances/34534"}}"#;

        assert!(Statement::from_str(S2).is_err());
    }

    #[traced_test]
    #[test]
    fn test_equivalence() -> Result<(), DataError> {
        const S1: &str = r#"{
"id":"12345678-1234-5678-1234-567812345678",
"actor":{"objectType":"Agent","name":"xAPI mbox","mbox":"mailto:xapi@adlnet.gov"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/attended","display":{"en-US":"attended"}},
"object":{"objectType":"Activity","id":"http://www.example.com/meetings/occurances/34534"}}"#;
        const S2: &str = r#"{
"id":"fd41c918-b88b-4b20-a0a5-a4c32391aaa0",
"actor":{"objectType":"Agent","name":"xAPI mbox","mbox":"mailto:xapi@adlnet.gov"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/attended","display":{"en-US":"attended"}},
"object":{"objectType":"Activity","id":"http://www.example.com/meetings/occurances/34534"}}"#;
        const S3: &str = r#"{
"id":"12345678-1234-5678-1234-567812345678",
"actor":{"objectType":"Agent","name":"xAPI mbox","mbox":"mailto:xapi@adlnet.gov"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/attended","display":{"en-US":"attended"}},
"object":{"objectType":"Activity","id":"http://www.example.com/meetings/occurances/34534"},
"timestamp":"2015-11-18T12:17:00Z"}"#;
        const S4: &str = r#"{
"id":"12345678-1234-5678-1234-567812345678",
"actor":{"objectType":"Agent","name":"xAPI mbox","mbox":"mailto:xapi@adlnet.gov"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/attended","display":{"en-US":"attended"}},
"object":{"objectType":"Activity","id":"http://www.example.com/meetings/occurances/34534"},
"version":"1.0.3"}"#;

        let s1 = Statement::from_str(S1)?;
        let s2 = Statement::from_str(S2)?;
        let s3 = Statement::from_str(S3)?;
        let s4 = Statement::from_str(S4)?;

        // a different `id` never breaks equivalence...
        assert!(s1 != s2);
        assert!(s1.equivalent(&s2));
        // ...but `timestamp` + `version` do
        assert!(!s1.equivalent(&s3));
        assert!(!s1.equivalent(&s4));

        // `stored` is LRS book-keeping and never counts
        let mut s5 = s1.clone();
        s5.set_stored(Utc::now());
        assert!(s1.equivalent(&s5));

        Ok(())
    }
}
