// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(missing_docs)]

//!
//! This project implements the _Statement Resource_ of an xAPI 2.0.0 LRS
//! w/ the idempotent-PUT conflict semantics of section 4.1.6.1 of the
//! standard.
//!
//! It consists of three main modules that roughly map to (a) a data layer
//! that defines the Rust bindings for the xAPI types involved, (b) a storage
//! layer behind a repository abstraction that takes care of persisting and
//! fetching Statements, and finally (c) a Web server to handle the LRS
//! calls proper.
//!
//! # Third-party crates
//!
//! This project depends on few best-of-breed crates to achieve correct
//! compliance w/ other [IETF][1] and [ISO][2] standards referenced in xAPI.
//!
//! Here's a list of the most important ones:
//!
//! 1. Deserialization and Serialization:
//!     * [serde][3]: for the basic serialization + deserialization capabilities.
//!     * [serde_json][4]: for the JSON format bindings.
//!     * [serde_with][5]: for custom helpers.
//!
//! 2. IRI[^1] and URI[^2]:
//!     * [iri-string][6]: for IRIs and URIs incl. support for [serde]
//!
//! 3. UUID[^3]:
//!     * [uuid][7]: for handling generating, parsing and formatting UUIDs.
//!
//! 4. Date and Time:
//!     * [chrono][8]: for timezone-aware date and time handling.
//!
//! 5. Language Tags and MIME types:
//!     * [language-tags][9]: for parsing, formatting and comparing language
//!       tags as specified in [BCP 47][10].
//!     * [mime][11]: for support of MIME types (a.k.a. Media Types) when
//!       dealing w/ [Attachment]s.
//!
//! 6. Email Address:
//!     * [email_address][12]: for parsing and validating email addresses.
//!
//! 7. Semantic Version:
//!     * [semver][13]: for semantic version parsing and generation as per
//!       [Semantic Versioning 2.0.0][14].
//!
//! [1]: https://www.ietf.org/
//! [2]: https://www.iso.org/
//! [3]: https://crates.io/crates/serde
//! [4]: https://crates.io/crates/serde_json
//! [5]: https://crates.io/crates/serde_with
//! [6]: https://crates.io/crates/iri-string
//! [7]: https://crates.io/crates/uuid
//! [8]: https://crates.io/crates/chrono
//! [9]: https://crates.io/crates/language-tags
//! [10]: https://datatracker.ietf.org/doc/bcp47/
//! [11]: https://crates.io/crates/mime
//! [12]: https://crates.io/crates/email_address
//! [13]: https://crates.io/crates/semver
//! [14]: https://semver.org/
//!
//! [^1]: IRI: Internationalized Resource Identifier.
//! [^2]: URI: Uniform Resource Identifier.
//! [^3]: UUID: Universally Unique Identifier --see
//! <https://en.wikipedia.org/wiki/Universally_unique_identifier>.
//!

mod config;
mod data;
mod db;
mod error;
mod lrs;

pub use config::*;
pub use data::*;
pub use db::{MemoryStore, StatementRepository};
pub use error::MyError;
pub use lrs::{CONSISTENT_THRU_HDR, VERSION_HDR, build, resources};

/// The xAPI version this project supports.
pub const V200: &str = "2.0.0";

/// Generate a message (in the style of `format!` macro), log it at level
/// _error_ and raise a [runtime error][crate::MyError#variant.Runtime].
#[macro_export]
macro_rules! runtime_error {
    ( $( $arg: tt )* ) => {
        {
            let msg = std::fmt::format(core::format_args!($($arg)*));
            tracing::error!("{}", msg);
            return Err($crate::MyError::Runtime(msg.into()));
        }
    }
}

/// Log `$err` at level _error_ before returning it.
#[macro_export]
macro_rules! emit_error {
    ( $err: expr ) => {{
        tracing::error!("{}", $err);
        return Err($err);
    }};
}
