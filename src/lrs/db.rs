// SPDX-License-Identifier: GPL-3.0-or-later

//! Data structure and logic for wiring a [StatementRepository] implementation
//! into Rocket's managed state at build time.

use crate::db::{MemoryStore, StatementRepository};
use rocket::{
    Build, Rocket,
    fairing::{self, Fairing, Info, Kind},
};
use tracing::{debug, info};

/// Rocket managed state accessible to handlers referencing it in their signature.
pub(crate) struct DB {
    store: Box<dyn StatementRepository>,
}

impl DB {
    /// Return a Fairing implementation we can use for attaching to Rocket
    /// when building the server.
    pub(crate) fn fairing(testing: bool) -> DBFairing {
        DBFairing { testing }
    }

    /// Real workhorse called by the Fairing implementation on Rocket Ignition.
    fn init(fairing: &DBFairing) -> Self {
        // NOTE (rsn) 20250612 - testing or not, the same in-memory engine is
        // wired for now. this is where a persistence engine would be selected
        // when `testing` is FALSE.
        debug!("init... testing? {}", fairing.testing);
        let store = Box::new(MemoryStore::new());

        info!("Statements store ready!");
        DB { store }
    }

    pub(crate) fn repository(&self) -> &dyn StatementRepository {
        self.store.as_ref()
    }
}

/// Structure for implementing Rocket Fairing. It constructs the Statements
/// store on Rocket Ignition and sets it as a Rocket Managed State.
pub(crate) struct DBFairing {
    testing: bool,
}

#[rocket::async_trait]
impl Fairing for DBFairing {
    fn info(&self) -> Info {
        Info {
            name: "Statements Store",
            kind: Kind::Singleton | Kind::Ignite,
        }
    }

    async fn on_ignite(&self, r: Rocket<Build>) -> fairing::Result {
        let db = DB::init(self);
        Ok(r.manage(db))
    }
}
