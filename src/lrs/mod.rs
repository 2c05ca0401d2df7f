// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(missing_docs)]

//! The Web server layer proper -- Rocket routes, fairings, request guards
//! and responders that together make up the LRS surface of this project.

mod db;
mod headers;
pub mod resources;
mod server;

pub(crate) use db::DB;
pub(crate) use headers::*;
pub use headers::{CONSISTENT_THRU_HDR, VERSION_HDR};
pub(crate) use resources::*;
pub use server::build;
