// SPDX-License-Identifier: GPL-3.0-or-later

use std::borrow::Cow;
use thiserror::Error;

/// Enumeration of different error types raised by methods in the data module.
#[derive(Debug, Error)]
pub enum DataError {
    /// JSON serialization / deserialization error.
    #[error("JSON error: {0}")]
    JSON(
        #[doc(hidden)]
        #[from]
        serde_json::Error,
    ),

    /// IRI and URI parsing error.
    #[error("IRI/URI error: {0}")]
    IRI(
        #[doc(hidden)]
        #[from]
        iri_string::validate::Error,
    ),

    /// EmailAddress syntax error.
    #[error("EMail error: {0}")]
    Email(
        #[doc(hidden)]
        #[from]
        email_address::Error,
    ),

    /// MIME type parsing error.
    #[error("MIME error: {0:?}")]
    MIME(
        #[doc(hidden)]
        #[from]
        mime::FromStrError,
    ),

    /// Malformed UUID error.
    #[error("UUID error: {0:?}")]
    UUID(
        #[doc(hidden)]
        #[from]
        uuid::Error,
    ),

    /// Date, time and timestamp parsing error.
    #[error("Date-Time error: {0}")]
    Time(
        #[doc(hidden)]
        #[from]
        chrono::format::ParseError,
    ),

    /// Invalid Language Tag error.
    #[error("Language Tag error: {0:?}")]
    LanguageTag(
        #[doc(hidden)]
        #[from]
        language_tags::ParseError,
    ),

    /// Language Tag validation error.
    #[error("Language Tag validation error: {0:?}")]
    LTValidationError(
        #[doc(hidden)]
        #[from]
        language_tags::ValidationError,
    ),

    /// Semantic version parsing error.
    #[error("Semantic version error: {0:?}")]
    SemVer(
        #[doc(hidden)]
        #[from]
        semver::Error,
    ),

    /// A semantic constraint violation; e.g. a `null` property value.
    #[error("Constraint violation: {0}")]
    Constraint(#[doc(hidden)] Cow<'static, str>),
}
