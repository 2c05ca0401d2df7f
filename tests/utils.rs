// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(dead_code)]

use rocket::http::{ContentType, Header, hyper::header};
use xapi_store::{V200, VERSION_HDR};

/// A Test Context structure used in integration tests to ensure setting up
/// and tearing down a Local Rocket Client thus ensuring Rocket is gracefully
/// shut down at the end of tests.
pub(crate) struct MyTestContext {
    pub client: rocket::local::blocking::Client,
}

impl test_context::TestContext for MyTestContext {
    fn setup() -> MyTestContext {
        let __rocket = xapi_store::build(true);
        let client = rocket::local::blocking::Client::tracked(__rocket)
            .expect("Failed creating Local Rocket client");
        MyTestContext { client }
    }

    fn teardown(self) {
        self.client.terminate();
    }
}

pub(crate) fn accept_json() -> Header<'static> {
    Header::new(header::ACCEPT.as_str(), "application/json")
}

pub(crate) fn v2() -> Header<'static> {
    Header::new(VERSION_HDR, V200.to_string())
}

pub(crate) fn content_type(mime: &ContentType) -> Header<'static> {
    Header::new(header::CONTENT_TYPE.as_str(), mime.to_string())
}
