// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(non_snake_case)]

mod utils;

use chrono::{DateTime, Utc};
use rocket::{
    http::{ContentType, Header, Status, hyper::header},
    uri,
};
use std::str::FromStr;
use test_context::test_context;
use tracing_test::traced_test;
use utils::{MyTestContext, accept_json, content_type, v2};
use uuid::Uuid;
use xapi_store::{CONSISTENT_THRU_HDR, MyError, Statement, V200, VERSION_HDR};

#[test]
fn test_serde() {
    const S1: &str = r#"{
        "id":"01919422-a115-7121-99e5-88d5486ad5f4",
        "actor":{ "objectType":"Agent", "name":"xAPI account", "mbox":"mailto:xapi@adlnet.gov" },
        "verb":{
            "id":"http://adlnet.gov/expapi/verbs/attended",
            "display":{ "en-GB":"attended","en-US":"attended" }
        },
        "object":{ "objectType":"Activity", "id":"http://www.example.com/meetings/occurances/34534" },
        "attachments":[{
            "usageType":"http://example.com/attachment-usage/test",
            "display":{ "en-US":"A test attachment" },
            "description":{ "en-US":"A test attachment (description)" },
            "contentType":"text/plain; charset=ascii",
            "length":27,
            "sha2":"495395e777cd98da653df9615d09c0fd6bb2f8d4788394cd53c56a3bfdcd848a",
            "fileUrl":"http://over.there.com/file.txt"
        }]}"#;

    let s = serde_json::from_str::<Statement>(S1).unwrap();

    let uuid = s.id().unwrap();
    let expected = Uuid::from_str("01919422-a115-7121-99e5-88d5486ad5f4").unwrap();
    assert_eq!(uuid, &expected);

    let actor = s.actor();
    assert!(actor.is_agent());
    assert_eq!(actor.name(), Some("xAPI account"));
    assert_eq!(actor.mbox().unwrap().to_uri(), "mailto:xapi@adlnet.gov");

    let verb = s.verb();
    assert_eq!(verb.id_as_str(), "http://adlnet.gov/expapi/verbs/attended");

    assert!(s.object().is_activity());

    assert_eq!(s.attachments().len(), 1);
    let att = &s.attachments()[0];
    assert_eq!(att.file_url_as_str(), Some("http://over.there.com/file.txt"));
    assert_eq!(att.length(), 27);
}

#[test_context(MyTestContext)]
#[traced_test]
#[test]
fn test_missing_statement_id(ctx: &mut MyTestContext) -> Result<(), MyError> {
    const S: &str = r#"{
"actor":{"objectType":"Agent","name":"Project Tin Can API","mbox":"mailto:user@example.com"},
"verb":{"id":"http://example.com/xapi/verbs#sent-a-statement","display":{"en-US":"sent"}},
"object":{
    "id":"http://example.com/xapi/activity/simplestatement",
    "definition":{
    "name":{"en-US":"simple statement"},
    "description":{"en-US":"A simple Experience API statement."}}}}"#;

    let client = &ctx.client;

    // a single-Statement PUT requires a `statementId` query parameter...
    let req = client
        .put("/statements")
        .body(S)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(v2());

    let resp = req.dispatch();
    assert_eq!(resp.status(), Status::BadRequest);

    Ok(())
}

#[test_context(MyTestContext)]
#[traced_test]
#[test]
fn test_invalid_uuid(ctx: &mut MyTestContext) -> Result<(), MyError> {
    const S: &str = r#"{
"actor":{"objectType":"Agent","name":"Project Tin Can API","mbox":"mailto:user@example.com"},
"verb":{"id":"http://example.com/xapi/verbs#sent-a-statement","display":{"en-US":"sent"}},
"object":{"id":"http://example.com/xapi/activity/simplestatement"}}"#;

    let client = &ctx.client;

    let req = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(statementId = Some("not-a-uuid"))
        ))
        .body(S)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(v2());

    let resp = req.dispatch();
    assert_eq!(resp.status(), Status::BadRequest);

    Ok(())
}

#[test_context(MyTestContext)]
#[traced_test]
#[test]
fn test_etag(ctx: &mut MyTestContext) -> Result<(), MyError> {
    const S: &str = r#"{
"id":"fd41c918-b88b-4b20-a0a5-a4c32391aaa0",
"timestamp":"2015-11-18T12:17:00+00:00",
"actor":{"objectType":"Agent","name":"Project Tin Can API","mbox":"mailto:user@example.com"},
"verb":{"id":"http://example.com/xapi/verbs#sent-a-statement","display":{"en-US":"sent"}},
"authority":{"objectType":"Agent", "mbox":"mailto:bob_authority@example.com"},
"object":{
    "id":"http://example.com/xapi/activity/simplestatement",
    "definition":{
    "name":{"en-US":"simple statement"},
    "description":{"en-US":"A simple Experience API statement."}}}}"#;

    let client = &ctx.client;

    // PUT must return an etag.
    let req1 = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(
                statementId = Some("fd41c918b88b4b20a0a5a4c32391aaa0")
            )
        ))
        .body(S)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(v2());

    let resp1 = req1.dispatch();
    assert_eq!(resp1.status(), Status::NoContent);
    // every response should carry the xAPI version header...
    assert_eq!(resp1.headers().get_one(VERSION_HDR), Some(V200));
    let etag_hdr = resp1.headers().get_one(header::ETAG.as_str());
    assert!(etag_hdr.is_some());

    Ok(())
}

#[test_context(MyTestContext)]
#[traced_test]
#[test]
fn test_idempotent_put(ctx: &mut MyTestContext) -> Result<(), MyError> {
    const S: &str = r#"{
"id":"fd41c918-b88b-4b20-a0a5-a4c32391aaa0",
"timestamp":"2015-11-18T12:17:00+00:00",
"actor":{"objectType":"Agent","name":"Project Tin Can API","mbox":"mailto:user@example.com"},
"verb":{"id":"http://example.com/xapi/verbs#sent-a-statement","display":{"en-US":"sent"}},
"object":{
    "id":"http://example.com/xapi/activity/simplestatement",
    "definition":{
    "name":{"en-US":"simple statement"},
    "description":{"en-US":"A simple Experience API statement."}}}}"#;

    let client = &ctx.client;
    // work w/ timestamps in millis.  subtract 1 since we don't suffer network
    // lags when testing...
    let now = Utc::now().timestamp_millis() - 1;

    // 1. PUT a new Statement...
    let req1 = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(
                statementId = Some("fd41c918b88b4b20a0a5a4c32391aaa0")
            )
        ))
        .body(S)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(v2());

    let resp1 = req1.dispatch();
    // should return No Content + a Consistent-Through xAPI header...
    assert_eq!(resp1.status(), Status::NoContent);
    let consistent_thru_hdr = resp1.headers().get_one(CONSISTENT_THRU_HDR);
    assert!(consistent_thru_hdr.is_some());
    let timestamp = DateTime::parse_from_rfc3339(consistent_thru_hdr.unwrap())
        .unwrap()
        .timestamp_millis();
    assert!(now < timestamp);
    let etag1 = resp1.headers().get_one(header::ETAG.as_str());
    assert!(etag1.is_some());

    // 2. replaying the same Statement should be a no-op, not a conflict...
    let req2 = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(
                statementId = Some("fd41c918b88b4b20a0a5a4c32391aaa0")
            )
        ))
        .body(S)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(v2());

    let resp2 = req2.dispatch();
    assert_eq!(resp2.status(), Status::NoContent);
    let etag2 = resp2.headers().get_one(header::ETAG.as_str());
    assert!(etag2.is_some());
    // both calls saw byte-identical content...
    assert_eq!(etag1.unwrap(), etag2.unwrap());

    Ok(())
}

#[test_context(MyTestContext)]
#[traced_test]
#[test]
fn test_assigns_query_uuid(ctx: &mut MyTestContext) -> Result<(), MyError> {
    // no `id` property; the `statementId` query parameter should be assigned...
    const S: &str = r#"{
"actor":{"objectType":"Agent","name":"agent 99","mbox":"mailto:a99@xapi.net"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/attended","display":{"en-GB":"attended"}},
"object":{"objectType":"Activity","id":"http://www.example.com/meetings/occurances/34534"}}"#;

    let client = &ctx.client;

    // 1. PUT it w/ a known UUID...
    let req1 = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(
                statementId = Some("01919457-5015-7591-bc64-d3a08e6c2c86")
            )
        ))
        .body(S)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(v2());

    let resp1 = req1.dispatch();
    assert_eq!(resp1.status(), Status::NoContent);

    // 2. replaying it w/ the same UUID should find the stored Statement
    // equivalent even though that one now has an `id`...
    let req2 = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(
                statementId = Some("01919457-5015-7591-bc64-d3a08e6c2c86")
            )
        ))
        .body(S)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(v2());

    let resp2 = req2.dispatch();
    assert_eq!(resp2.status(), Status::NoContent);

    // 3. ...while under a different UUID it's a brand new Statement.
    let req3 = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(
                statementId = Some("01919457-5015-7c41-89a9-4c33a41b645f")
            )
        ))
        .body(S)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(v2());

    let resp3 = req3.dispatch();
    assert_eq!(resp3.status(), Status::NoContent);

    Ok(())
}

#[test_context(MyTestContext)]
#[traced_test]
#[test]
fn test_non_matching_uuid(ctx: &mut MyTestContext) -> Result<(), MyError> {
    const S: &str = r#"{
"id":"fd41c918-b88b-4b20-a0a5-a4c32391aaa0",
"timestamp":"2015-11-18T12:17:00+00:00",
"actor":{"objectType":"Agent","name":"Project Tin Can API","mbox":"mailto:user@example.com"},
"verb":{"id":"http://example.com/xapi/verbs#sent-a-statement","display":{"en-US":"sent"}},
"object":{
    "id":"http://example.com/xapi/activity/simplestatement",
    "definition":{
    "name":{"en-US":"simple statement"},
    "description":{"en-US":"A simple Experience API statement."}}}}"#;
    // a different Statement altogether, w/ no `id` property...
    const OTHER: &str = r#"{
"actor":{"objectType":"Agent","name":"agent 86","mbox":"mailto:a86@xapi.net"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/attended","display":{"en-US":"attended"}},
"object":{"objectType":"Activity","id":"http://www.example.com/meetings/occurances/34534"}}"#;

    let client = &ctx.client;

    // `statementId` query parameter must be the same as the Statement's `id`
    // property...
    let req1 = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(
                statementId = Some("fd41c918b88b4b20a0a5a4c32391aaa1")
            )
        ))
        .body(S)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(v2());

    let resp1 = req1.dispatch();
    assert_eq!(resp1.status(), Status::Conflict);

    // the conflict should've left the store untouched.  PUTting a different
    // Statement w/ that same UUID must now succeed...
    let req2 = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(
                statementId = Some("fd41c918b88b4b20a0a5a4c32391aaa1")
            )
        ))
        .body(OTHER)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(v2());

    let resp2 = req2.dispatch();
    assert_eq!(resp2.status(), Status::NoContent);

    Ok(())
}

#[test_context(MyTestContext)]
#[traced_test]
#[test]
fn test_conflict(ctx: &mut MyTestContext) -> Result<(), MyError> {
    const S1: &str = r#"{
"actor":{"objectType":"Agent","name":"agent 99","mbox":"mailto:a99@xapi.net"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/attended","display":{"en-GB":"attended"}},
"object":{"objectType":"Activity","id":"http://www.example.com/meetings/occurances/34534"}}"#;
    // same UUID but a different Verb...
    const S2: &str = r#"{
"actor":{"objectType":"Agent","name":"agent 99","mbox":"mailto:a99@xapi.net"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/reported","display":{"en-GB":"reported"}},
"object":{"objectType":"Activity","id":"http://www.example.com/meetings/occurances/34534"}}"#;

    let client = &ctx.client;

    // 1. PUT a new Statement...
    let req1 = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(
                statementId = Some("1dc85813a33448ccb1964c6e798599b8")
            )
        ))
        .body(S1)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(v2());

    let resp1 = req1.dispatch();
    assert_eq!(resp1.status(), Status::NoContent);

    // 2. PUT a different Statement w/ the same UUID.  should fail...
    let req2 = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(
                statementId = Some("1dc85813a33448ccb1964c6e798599b8")
            )
        ))
        .body(S2)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(v2());

    let resp2 = req2.dispatch();
    assert_eq!(resp2.status(), Status::Conflict);

    Ok(())
}

#[test_context(MyTestContext)]
#[traced_test]
#[test]
fn test_attachment_wo_file_url(ctx: &mut MyTestContext) -> Result<(), MyError> {
    // a JSON PUT can only reference attachment raw data by `fileUrl`...
    const S: &str = r#"{
"actor":{"objectType":"Agent","name":"xAPI account","mbox":"mailto:xapi@adlnet.gov"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/attended","display":{"en-GB":"attended"}},
"object":{"objectType":"Activity","id":"http://www.example.com/meetings/occurances/34534"},
"attachments":[{
  "usageType":"http://example.com/attachment-usage/test",
  "display":{"en-US":"A test attachment"},
  "description":{"en-US":"A test attachment (description)"},
  "contentType":"text/plain; charset=ascii",
  "length":27,
  "sha2":"495395e777cd98da653df9615d09c0fd6bb2f8d4788394cd53c56a3bfdcd848a"
}]}"#;

    let client = &ctx.client;

    let req = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(
                statementId = Some("fd41c918b88b4b20a0a5a4c32391aaa0")
            )
        ))
        .body(S)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(v2());

    let resp = req.dispatch();
    assert_eq!(resp.status(), Status::BadRequest);

    Ok(())
}

#[test_context(MyTestContext)]
#[traced_test]
#[test]
fn test_missing_version_header(ctx: &mut MyTestContext) -> Result<(), MyError> {
    const S: &str = r#"{
"actor":{"objectType":"Agent","name":"agent 99","mbox":"mailto:a99@xapi.net"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/attended","display":{"en-GB":"attended"}},
"object":{"objectType":"Activity","id":"http://www.example.com/meetings/occurances/34534"}}"#;

    let client = &ctx.client;

    // note the absence of an xAPI version header...
    let req = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(
                statementId = Some("1dc85813a33448ccb1964c6e798599b8")
            )
        ))
        .body(S)
        .header(ContentType::JSON)
        .header(accept_json());

    let resp = req.dispatch();
    assert_eq!(resp.status(), Status::BadRequest);

    Ok(())
}

#[test_context(MyTestContext)]
#[traced_test]
#[test]
fn test_unsupported_version(ctx: &mut MyTestContext) -> Result<(), MyError> {
    const S: &str = r#"{
"actor":{"objectType":"Agent","name":"agent 99","mbox":"mailto:a99@xapi.net"},
"verb":{"id":"http://adlnet.gov/expapi/verbs/attended","display":{"en-GB":"attended"}},
"object":{"objectType":"Activity","id":"http://www.example.com/meetings/occurances/34534"}}"#;

    let client = &ctx.client;

    let req = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(
                statementId = Some("1dc85813a33448ccb1964c6e798599b8")
            )
        ))
        .body(S)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(Header::new(VERSION_HDR, "1.0.3"));

    let resp = req.dispatch();
    assert_eq!(resp.status(), Status::BadRequest);

    Ok(())
}

#[test_context(MyTestContext)]
#[traced_test]
#[test]
fn test_bad_content_type(ctx: &mut MyTestContext) -> Result<(), MyError> {
    let client = &ctx.client;

    // PUT w/ a Content-Type other than `application/json`...
    let req = client
        .put("/statements?statementId=fd41c918b88b4b20a0a5a4c32391aaa0")
        .body("foo")
        .header(content_type(&ContentType::Text))
        .header(accept_json())
        .header(v2());

    let resp = req.dispatch();
    assert_eq!(resp.status(), Status::BadRequest);

    Ok(())
}

#[test_context(MyTestContext)]
#[traced_test]
#[test]
fn test_null_property_value(ctx: &mut MyTestContext) -> Result<(), MyError> {
    // `timestamp` is explicitly null...
    const S: &str = r#"{
"timestamp":null,
"actor":{"objectType":"Agent","name":"Project Tin Can API","mbox":"mailto:user@example.com"},
"verb":{"id":"http://example.com/xapi/verbs#sent-a-statement","display":{"en-US":"sent"}},
"object":{"id":"http://example.com/xapi/activity/simplestatement"}}"#;

    let client = &ctx.client;

    let req = client
        .put(uri!(
            "/statements",
            xapi_store::resources::statement::put_json(
                statementId = Some("fd41c918b88b4b20a0a5a4c32391aaa0")
            )
        ))
        .body(S)
        .header(ContentType::JSON)
        .header(accept_json())
        .header(v2());

    let resp = req.dispatch();
    assert_eq!(resp.status(), Status::BadRequest);

    Ok(())
}
