// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(non_snake_case)]

//! Statement Resource (/statements)
//!
//! Statements are the key data structure of xAPI. This resource facilitates
//! their storage w/ the idempotent-PUT conflict semantics of section 4.1.6.1.
//!
//! Any deviation from section [4.1.6.1 Statement Resource (/statements)][1] of
//! the xAPI specification is a bug.
//!
//! [1]: https://opensource.ieee.org/xapi/xapi-base-standard-documentation/-/blob/main/9274.1.xAPI%20Base%20Standard%20for%20LRSs.md#4161-statement-resource-statements

use crate::{
    data::Statement,
    db::StatementRepository,
    lrs::{
        DB,
        headers::Headers,
        resources::{WithETag, compute_etag, no_content},
    },
};
use rocket::{Responder, State, http::Status, put, routes};
use std::str::FromStr;
use tracing::{debug, error};
use uuid::Uuid;

/// A derived Rocket Responder structure w/ a No Content Status and an `Etag`
/// header.
#[derive(Responder)]
struct PutResponse {
    inner: WithETag,
}

#[doc(hidden)]
pub fn routes() -> Vec<rocket::Route> {
    routes![put_json, __put]
}

/// From section 4.1.6.1 Statement Resource (/statements) [PUT Request][1]:
///
/// Summary: Stores a single Statement with the given id.
/// Body: The Statement object to be stored.
/// Returns: 204 No Content
///
/// * The LRS may respond before Statements that have been stored are available
///   for retrieval.
/// * An LRS shall not make any modifications to its state based on receiving a
///   Statement with a statementId that it already has a Statement for. Whether
///   it responds with 409 Conflict or 204 No Content, it shall not modify the
///   Statement or any other Object.
/// * If the LRS receives a Statement with an id it already has a Statement for,
///   it should verify the received Statement matches the existing one and should
///   return 409 Conflict if they do not match.
///
/// [1]: <https://opensource.ieee.org/xapi/xapi-base-standard-documentation/-/blob/main/9274.1.1%20xAPI%20Base%20Standard%20for%20LRSs.md#put-request>
///
#[put("/?<statementId>", data = "<json>", format = "application/json")]
async fn put_json(
    c: Headers,
    statementId: Option<&str>,
    json: &str,
    db: &State<DB>,
) -> Result<PutResponse, Status> {
    debug!("----- put_json -----");
    debug!("c = {:?}", c);

    let uuid = match statementId {
        None => {
            error!("Missing 'statementId' query parameter");
            return Err(Status::BadRequest);
        }
        Some(x) => match Uuid::parse_str(x) {
            Err(x) => {
                error!("Statement ID is not a valid UUID: {}", x);
                return Err(Status::BadRequest);
            }
            Ok(x) => x,
        },
    };
    debug!("statement UUID = {}", uuid);

    let mut statement = match Statement::from_str(json) {
        Ok(x) => x,
        Err(x) => {
            error!("Failed unmarshalling Statement: {}", x);
            return Err(Status::BadRequest);
        }
    };

    // NOTE (rsn) 202410004 /4.1.3 Content Types/ - When receiving a PUT or
    // POST request with application/json content-type, an LRS shall respond
    // w/ HTTP 400 Bad Request if, when present, Attachment objects in the
    // Statement(s) do not have populated fileUrl property.
    let mut count = 0;
    for att in statement.attachments() {
        if att.file_url().is_none() {
            count += 1;
        }
    }
    if count > 0 {
        error!("Found {} Attachment(s) w/ unpopulated 'fileUrl'", count);
        return Err(Status::BadRequest);
    }

    if statement.id().is_none() {
        statement.set_id(uuid)
    } else if *statement.id().unwrap() != uuid {
        // conflicting identifiers never touch the store...
        error!("Statement ID in URL does not match one in body");
        return Err(Status::Conflict);
    }

    persist_one(db, statement).await
}

// IMPORTANT (rsn) 20241111 - CTS runs show that requests w/ malformed CT
// headers are sent to the LRS.  unfortunately however Rocket responds to those
// requests w/ a 404 not 400 :(  this is a stop-gap to catch such requests...
#[put("/", data = "<ignored>", rank = 1)]
async fn __put(ignored: &str) -> Status {
    debug!("----- __put -----");
    let _ = ignored;
    Status::BadRequest
}

/// xAPI requirements for PUT Statements stipulate that an LRS receiving a
/// Statement w/ an id it already has a Statement for shall not modify its
/// state; it verifies the received Statement matches the existing one and
/// answers 409 Conflict when they do not.
async fn persist_one(db: &State<DB>, statement: Statement) -> Result<PutResponse, Status> {
    debug!("statement = {}", statement);

    let repository = db.repository();
    let uuid = *statement.id().unwrap();
    match repository.find_statement_by_id(&uuid).await {
        Ok(None) => (),
        Ok(Some(that)) => {
            // we already have one w/ the same UUID. whether we answer 204 or
            // 409 hinges on the two being Equivalent...
            return if that.equivalent(&statement) {
                debug!("Existing Statement ({}) matches incoming one", uuid);
                match compute_etag::<Statement>(&statement) {
                    Err(x) => {
                        error!("Failed computing ETag: {}", x);
                        Err(Status::InternalServerError)
                    }
                    Ok(etag) => Ok(PutResponse {
                        inner: no_content(&etag),
                    }),
                }
            } else {
                // TODO (rsn) 20240727 - add a body to the response...
                error!("Existing Statement ({}) differs from incoming one", uuid);
                Err(Status::Conflict)
            };
        }
        Err(x) => {
            error!("Failed: {}", x);
            return Err(Status::InternalServerError);
        }
    }

    // compute the ETag before the store takes ownership...
    let etag = match compute_etag::<Statement>(&statement) {
        Err(x) => {
            error!("Failed computing ETag: {}", x);
            return Err(Status::InternalServerError);
        }
        Ok(x) => x,
    };

    if let Err(x) = repository.store_statement(statement, true).await {
        error!("Failed: {}", x);
        return Err(Status::InternalServerError);
    }

    Ok(PutResponse {
        inner: no_content(&etag),
    })
}
