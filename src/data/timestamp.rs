// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{data::DataError, emit_error};
use chrono::{DateTime, SecondsFormat, Utc};
use core::fmt;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;
use tracing::error;

/// Own structure to enforce xAPI requirements for timestamps.
#[derive(Clone, Debug, DeserializeFromStr, PartialEq, SerializeDisplay)]
pub struct MyTimestamp(DateTime<Utc>);

impl MyTimestamp {
    /// Constructor from a known unchecked [DateTime] instance.
    pub fn from(inner: DateTime<Utc>) -> Self {
        MyTimestamp(inner)
    }

    /// Return a reference to the inner wrapped [DateTime] value.
    pub fn inner(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl FromStr for MyTimestamp {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = DateTime::parse_from_rfc3339(s).map_err(|x| {
            error!("Failed parse '{}' as an RFC-3339 date-time: {}", s, x);
            DataError::Time(x)
        })?;
        let offset_seconds = parsed.offset().local_minus_utc();
        if offset_seconds == 0 && (s.ends_with("-00:00") || s.ends_with("-0000")) {
            emit_error!(DataError::Constraint("negative 0 offset".into()))
        }

        Ok(MyTimestamp(parsed.with_timezone(&Utc)))
    }
}

impl fmt::Display for MyTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
