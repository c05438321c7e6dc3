// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dropshot server for static zone metadata
//!
//! This crate provides a standalone program that serves a fixed table of
//! DNS-facing zone metadata over HTTP.  There's no backing store: the
//! [`zones::ZoneTable`] is built once when the server starts and shared,
//! read-only, by every request handler.
//!
//! 1. [`zones`] holds the table and the logic for arranging its records into
//!    response envelopes
//! 2. [`http_server`] implements [`zone_info_api::ZoneInfoApi`] on top of it
//! 3. [`config`] loads the server's TOML configuration

pub mod config;
pub mod http_server;
pub mod zones;

use anyhow::anyhow;
use slog::o;

/// Starts the HTTP server.
pub fn start_server(
    log: slog::Logger,
    dropshot_config: &dropshot::ConfigDropshot,
) -> Result<dropshot::HttpServer<http_server::Context>, anyhow::Error> {
    let http_api = http_server::api();
    let http_api_context = http_server::Context::new(zones::ZoneTable::new());

    dropshot::ServerBuilder::new(
        http_api,
        http_api_context,
        log.new(o!("component" => "http")),
    )
    .config(dropshot_config.clone())
    .start()
    .map_err(|error| anyhow!("setting up HTTP server: {:#}", error))
}

/// Writes the OpenAPI document for the server's API to stdout.
pub fn run_openapi() -> Result<(), anyhow::Error> {
    openapi_document(&mut std::io::stdout())
}

pub fn openapi_document(
    out: &mut dyn std::io::Write,
) -> Result<(), anyhow::Error> {
    zone_info_api::zone_info_api_mod::stub_api_description()
        .map_err(|error| anyhow!("building API description: {}", error))?
        .openapi("Zone Info Service API", semver::Version::new(0, 0, 1))
        .description("Static DNS zone metadata for hosted services")
        .write(out)
        .map_err(|error| anyhow!("writing OpenAPI document: {}", error))
}
