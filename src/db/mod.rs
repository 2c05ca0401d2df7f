// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(missing_docs)]

//! The storage layer behind a repository abstraction.
//!
//! Handlers never talk to a concrete engine. They see [StatementRepository],
//! a trait object wired into Rocket's managed state when the server is
//! built. The only implementation here is [MemoryStore], a thread-safe
//! in-memory map that behaves like a persistence engine would -- incl.
//! stamping the `stored` timestamp on writes.

mod memory;

pub use memory::MemoryStore;

use crate::{MyError, data::Statement};
use uuid::Uuid;

/// Contract a storage engine must honor to persist + find [Statement]s.
#[rocket::async_trait]
pub trait StatementRepository: Send + Sync {
    /// Find a previously stored [Statement] given its `uuid`.
    ///
    /// An unknown `uuid` is not an error; it yields `Ok(None)`.
    async fn find_statement_by_id(&self, uuid: &Uuid) -> Result<Option<Statement>, MyError>;

    /// Persist `statement`, stamping its `stored` property w/ the current
    /// time in the process.
    ///
    /// The `statement` must have an `id`. In addition, when `is_new` is
    /// TRUE, said `id` must not be one we already know. Callers are
    /// expected to check first; violating either rule is a [Runtime]
    /// [MyError][1] error.
    ///
    /// [1]: crate::MyError#variant.Runtime
    async fn store_statement(&self, statement: Statement, is_new: bool) -> Result<(), MyError>;
}
