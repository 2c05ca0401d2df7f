// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{
    V200,
    lrs::{CONSISTENT_THRU_HDR, DB, VERSION_HDR, resources},
};
use chrono::{DateTime, SecondsFormat, Utc};
use rocket::{
    Build, Request, Rocket, catch, catchers,
    fairing::AdHoc,
    futures::lock::Mutex,
    http::{Header, Method},
    response::status,
    time::{OffsetDateTime, format_description::well_known::Rfc2822},
};
use std::{mem, sync::LazyLock, time::SystemTime};
use tracing::{debug, error, info};

/// Server Singleton of timestamp when this store was likely altered --i.e.
/// received a PUT request.
static CONSISTENT_THRU: LazyLock<Mutex<DateTime<Utc>>> =
    LazyLock::new(|| Mutex::new(DateTime::UNIX_EPOCH));

pub(crate) async fn get_consistent_thru() -> DateTime<Utc> {
    CONSISTENT_THRU.lock().await.to_utc()
}

pub(crate) async fn set_consistent_thru(now: DateTime<Utc>) {
    let mut m = CONSISTENT_THRU.lock().await;
    let was = mem::replace(&mut *m, now);
    info!("CONSISTENT_THRU changed from {} to {}", was, now);
}

async fn update_consistent_thru() {
    set_consistent_thru(Utc::now()).await;
}

/// Request-local arrival timestamp used for service time reporting.
#[derive(Copy, Clone)]
struct TimerStart(Option<DateTime<Utc>>);

/// Entry point for constructing a Local Rocket and use it for either testing
/// or not.
pub fn build(testing: bool) -> Rocket<Build> {
    let figment = rocket::Config::figment();
    rocket::custom(figment)
        .mount("/about", resources::about::routes())
        .mount("/statements", resources::statement::routes())
        .attach(DB::fairing(testing))
        // startup hook
        .attach(AdHoc::on_liftoff("Liftoff Hook", move |_| {
            Box::pin(async move {
                let now: OffsetDateTime = SystemTime::now().into();
                info!(
                    "xapi-store {} starting up on {:?}",
                    env!("CARGO_PKG_VERSION"),
                    now.format(&Rfc2822).unwrap()
                );
            })
        }))
        // hook to time requests + update last-altered singleton...
        .attach(AdHoc::on_request(
            "Update consistent-thru timestamp",
            |req, _| {
                Box::pin(async move {
                    req.local_cache(|| TimerStart(Some(Utc::now())));
                    if req.uri().path().starts_with("/statements")
                        && req.method() == Method::Put
                    {
                        update_consistent_thru().await;
                    }
                })
            },
        ))
        // hook to add xAPI headers to responses as needed...
        .attach(AdHoc::on_response("xAPI response headers", |req, resp| {
            Box::pin(async move {
                // add xAPI Version header to every response...
                resp.set_header(Header::new(VERSION_HDR, V200.to_string()));

                // add X-Experience-API-Consistent-Through header if missing in
                // `/statements` responses...
                if req.uri().path().ends_with("statements")
                    && !resp.headers().contains(CONSISTENT_THRU_HDR)
                {
                    let val = get_consistent_thru()
                        .await
                        .to_rfc3339_opts(SecondsFormat::Millis, true);
                    debug!("Added XCT header as {}", val);
                    resp.set_header(Header::new(CONSISTENT_THRU_HDR, val));
                }

                // report how long servicing the request took...
                let timer = req.local_cache(|| TimerStart(None));
                if let Some(arrival) = timer.0 {
                    let duration = Utc::now()
                        .signed_duration_since(arrival)
                        .num_nanoseconds();
                    let duration_str = match duration {
                        Some(ns) => format!("{:.3}", ns as f64 / 1_000_000.0),
                        None => "---".to_string(),
                    };
                    let value = format!(
                        "{}; {} ms",
                        arrival.to_rfc3339_opts(SecondsFormat::Micros, true),
                        duration_str
                    );
                    debug!("X-Stop-Watch: {}", value);
                    resp.set_raw_header("X-Stop-Watch", value);
                }
            })
        }))
        // shutdown hook
        .attach(AdHoc::on_shutdown("Shutdown Hook", |_| {
            Box::pin(async move {
                let now: OffsetDateTime = SystemTime::now().into();
                info!(
                    "xapi-store {} shutting down on {:?}",
                    env!("CARGO_PKG_VERSION"),
                    now.format(&Rfc2822).unwrap()
                );
            })
        }))
        // wire the catchers...
        .register("/", catchers![bad_request, not_found, unknown_route])
}

#[catch(400)]
fn bad_request(req: &Request) -> &'static str {
    error!("----- 400 -----");
    debug!("req = {:?}", req);
    "400 - Bad request :("
}

#[catch(404)]
fn not_found(req: &Request) -> &'static str {
    error!("----- 404 -----");
    debug!("req = {:?}", req);
    "404 - Resource not found :("
}

#[catch(422)]
fn unknown_route(req: &Request) -> status::BadRequest<String> {
    error!("----- 422 -----");
    debug!("req = {:?}", req);
    status::BadRequest(req.uri().to_string())
}
