// SPDX-License-Identifier: GPL-3.0-or-later

//! The resources (end-points) this server handles.

pub mod about;
pub mod statement;

use crate::{DataError, MyError, lrs::server::get_consistent_thru};
use chrono::{DateTime, SecondsFormat, Utc};
use etag::EntityTag;
use rocket::{
    Responder,
    http::{Header, Status, hyper::header},
    serde::json::Json,
};
use serde::Serialize;
use tracing::{debug, error};

/// A derived Rocket Responder structure w/ an OK Status, a body consisting
/// of the JSON Serialized string of a generic type `T`, an `Etag` and
/// `Last-Modified` Headers.
#[derive(Responder)]
#[response(status = 200, content_type = "json")]
pub(crate) struct WithResource<T> {
    inner: Json<T>,
    etag: Header<'static>,
    last_modified: Header<'static>,
}

/// A derived Rocket Responder w/ a No Content Status and an ETag Header only.
#[derive(Responder)]
pub(crate) struct WithETag {
    inner: Status,
    etag: Header<'static>,
}

/// Given a string reference `s`, hash its bytes and return an `EntityTag`
/// instance built from the resulting hash.
pub(crate) fn etag_from_str(s: &str) -> EntityTag {
    EntityTag::from_data(s.as_bytes())
}

/// Given an instance of a type `T` that is `serde` _Serializable_, try
/// serializing it to JSON and return an `EntityTag` from the result.
///
/// Raise [MyError] if an error occurs in the process.
pub(crate) fn compute_etag<T>(res: &T) -> Result<EntityTag, MyError>
where
    T: ?Sized + Serialize,
{
    // serialize it...
    let json = serde_json::to_string(res).map_err(|x| MyError::Data(DataError::JSON(x)))?;
    Ok(etag_from_str(&json))
}

/// Internal function to effectively construct and emit a Rocket response
/// w/ all the needed arguments.
///
/// The `timestamp` parameter is the value that will be used to populate the
/// `Last-Modified` header. If it's `None` the global CONSISTENT_THRU value
/// will be used.
pub(crate) async fn do_emit_response<T: Serialize>(
    resource: T,
    timestamp: Option<DateTime<Utc>>,
) -> Result<WithResource<T>, Status> {
    let etag = match compute_etag(&resource) {
        Ok(x) => x,
        Err(x) => {
            error!("Failed computing ETag: {}", x);
            return Err(Status::InternalServerError);
        }
    };
    debug!("Etag = '{}'", etag);

    let last_modified = if let Some(x) = timestamp {
        x.to_rfc3339_opts(SecondsFormat::Millis, true)
    } else {
        get_consistent_thru()
            .await
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    };
    debug!("Last-Modified = '{}'", last_modified);

    Ok(WithResource {
        inner: Json(resource),
        etag: Header::new(header::ETAG.as_str(), etag.to_string()),
        last_modified: Header::new(header::LAST_MODIFIED.as_str(), last_modified),
    })
}

/// Given `$resource` of type `$type` that is `serde` _Serializable_...
///
/// 1. compute the Resource's **`Etag`**, and instantiate both **`Etag`** and
///    **`Last-Modified`** Headers,
/// 2. return a _Response_ of the form `Result<WithResource<T>, Status>`.
#[macro_export]
macro_rules! emit_response {
    ( $resource:expr => $T:ident, $timestamp:expr ) => {
        $crate::lrs::resources::do_emit_response::<$T>($resource, Some($timestamp)).await
    };

    ( $resource:expr => $T:ident ) => {
        $crate::lrs::resources::do_emit_response::<$T>($resource, None).await
    };
}

/// Generate a Rocket Response w/ an HTTP Status of 204 (No Content) and an
/// `Etag` Header w/ the given value.
pub(crate) fn no_content(etag: &EntityTag) -> WithETag {
    WithETag {
        inner: Status::NoContent,
        etag: Header::new(header::ETAG.as_str(), etag.to_string()),
    }
}
