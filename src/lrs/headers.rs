// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{MyError, data::MyVersion};
use rocket::{
    Request,
    http::Status,
    request::{FromRequest, Outcome},
};
use std::{borrow::Cow, str::FromStr};
use tracing::error;

/// The xAPI specific **`X-Experience-API-Version`** HTTP header name.
pub const VERSION_HDR: &str = "X-Experience-API-Version";

/// The xAPI specific **`X-Experience-API-Consistent-Through`** HTTP header name.
pub const CONSISTENT_THRU_HDR: &str = "X-Experience-API-Consistent-Through";

/// A Rocket Request Guard to help handle HTTP headers defined in xAPI.
#[derive(Debug)]
pub(crate) struct Headers {
    /// xAPI Version: Every request to the LRS and every response from the
    /// LRS shall include an HTTP header named `X-Experience-API-Version`
    /// and the version as the value. For example for version 2.0.0...
    ///   `X-Experience-API-Version: 2.0.0`
    /// IMPORTANT (rsn) 20240521 - given that at this time i only support
    /// 2.0.x i only check for the header at the reception of a request and
    /// reject the request if it's not the right version. in the future i
    /// will be storing the 'want' version here and handle it appropriately
    /// in each handler.
    #[allow(dead_code)]
    version: String,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Headers {
    type Error = MyError;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let version = match req.headers().get_one(VERSION_HDR) {
            Some(x) => match MyVersion::from_str(x) {
                Ok(x) => {
                    if !(x.major() == 2 && x.minor() == 0) {
                        let msg = format!("xAPI v.{x} wanted but i only support 2.0.x");
                        error!("{}", msg);
                        // should be 418 I'm a teapot
                        return Outcome::Error((Status::BadRequest, MyError::Runtime(msg.into())));
                    }
                    x
                }
                Err(y) => {
                    let msg = format!("xAPI version header ({x}) has invalid syntax: {y}");
                    error!("{}", msg);
                    return Outcome::Error((Status::BadRequest, MyError::Runtime(msg.into())));
                }
            },
            None => {
                let msg = "Missing xAPI version header";
                error!("{}", msg);
                return Outcome::Error((Status::BadRequest, MyError::Runtime(Cow::Borrowed(msg))));
            }
        };

        Outcome::Success(Headers {
            version: version.to_string(),
        })
    }
}
