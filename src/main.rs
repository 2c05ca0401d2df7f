// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::Local;
use dotenvy::var;
use rocket::launch;
use std::fs;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};
use xapi_store::{build, config};

#[launch]
async fn rocket() -> _ {
    let log_dir = config().log_dir();
    fs::create_dir_all(log_dir).expect("Failed creating logs dir :(");
    let rust_log = var("RUST_LOG").unwrap_or("info".to_owned());
    let filter = tracing_subscriber::EnvFilter::builder()
        .parse(rust_log)
        .expect("Failed parsing RUST_LOG :(");
    let now = Local::now();
    let file = fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(format!(
            "{}/xapi-{}.log",
            log_dir,
            now.format("%Y%m%d-%H%M%S")
        ))
        .unwrap();
    let file_logger = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(file)
        .with_ansi(false)
        .with_filter(filter);

    let console_logger = tracing_subscriber::fmt::layer().with_filter(LevelFilter::INFO);

    tracing_subscriber::registry()
        .with(file_logger)
        .with(console_logger)
        .init();

    build(false) // false == not for testing
}
