// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(missing_docs)]

mod about;
mod account;
mod activity;
mod activity_definition;
mod actor;
mod agent;
mod attachment;
mod data_error;
mod email_address;
mod fingerprint;
mod group;
mod language_map;
mod language_tag;
mod object_type;
mod statement;
mod statement_object;
mod statement_ref;
mod timestamp;
mod verb;
mod version;

pub use about::*;
pub use account::*;
pub use activity::*;
pub use activity_definition::*;
pub use actor::*;
pub use agent::*;
pub use attachment::*;
use chrono::{DateTime, SecondsFormat, Utc};
pub use data_error::DataError;
pub use email_address::*;
pub use fingerprint::*;
pub use group::*;
pub use language_map::*;
pub use language_tag::*;
pub use object_type::*;
use serde::Serializer;
pub use statement::*;
pub use statement_object::*;
pub use statement_ref::*;

pub use timestamp::MyTimestamp;
pub use verb::*;
pub use version::*;

use crate::emit_error;
use serde_json::Value;

/// Recursively check if a JSON Object contains 'null' values.
fn check_for_nulls(val: &Value) -> Result<(), DataError> {
    if let Some(obj) = val.as_object() {
        // NOTE (rsn) 20241104 - from "4.2.1 Table Guidelines": "The LRS
        // shall reject Statements with any null values (except inside
        // extensions)."
        for (k, v) in obj.iter() {
            if v.is_null() {
                emit_error!(DataError::Constraint(
                    format!("Key '{}' is 'null'", k).into()
                ))
            } else if k != "extensions" {
                check_for_nulls(v)?
            }
        }
    }
    Ok(())
}

/// A Serializer implementation that ensures `stored` timestamps show
/// milli-second precision.
fn stored_ser<S>(this: &Option<DateTime<Utc>>, ser: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if this.is_some() {
        let s = this
            .as_ref()
            .unwrap()
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        ser.serialize_str(&s)
    } else {
        ser.serialize_none()
    }
}
