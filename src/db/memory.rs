// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{MyError, config, data::Statement, db::StatementRepository, runtime_error};
use chrono::Utc;
use dashmap::{DashMap, Entry};
use tracing::debug;
use uuid::Uuid;

/// An in-memory [StatementRepository] backed by a [DashMap] keyed by the
/// Statements' identifiers.
///
/// No substitute for real persistence but it honors the same contract; in
/// particular it stamps `stored` on writes, and hands out deep copies on
/// reads so callers never observe interior mutation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    statements: DashMap<Uuid, Statement>,
}

impl MemoryStore {
    /// Construct a new instance sized from the configured capacity.
    pub fn new() -> Self {
        MemoryStore {
            statements: DashMap::with_capacity(config().store_capacity),
        }
    }

    /// Number of [Statement]s currently held.
    pub fn count(&self) -> usize {
        self.statements.len()
    }
}

#[rocket::async_trait]
impl StatementRepository for MemoryStore {
    async fn find_statement_by_id(&self, uuid: &Uuid) -> Result<Option<Statement>, MyError> {
        Ok(self.statements.get(uuid).map(|x| x.value().clone()))
    }

    async fn store_statement(&self, mut statement: Statement, is_new: bool) -> Result<(), MyError> {
        let uuid = match statement.id() {
            Some(x) => *x,
            None => runtime_error!("Refuse storing a Statement w/ no 'id'"),
        };
        statement.set_stored(Utc::now());
        // single entry call so the exists check + insert are atomic
        match self.statements.entry(uuid) {
            Entry::Occupied(_) if is_new => {
                runtime_error!("Statement ({}) already exists", uuid)
            }
            x => {
                x.insert(statement);
                debug!("Stored Statement ({})", uuid);
                Ok(())
            }
        }
    }
}
