// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Executable that serves static zone metadata over HTTP

use anyhow::Context;
use anyhow::anyhow;
use camino::Utf8PathBuf;
use clap::Parser;
use slog::info;
use std::net::SocketAddr;
use zone_info_server::config::Config;

#[derive(Debug, Parser)]
#[clap(name = "zone-info-server", about = "Serves static zone metadata")]
struct Args {
    #[clap(
        short = 'O',
        long = "openapi",
        help = "Print the OpenAPI Spec document and exit",
        action
    )]
    openapi: bool,

    /// Path to a TOML config file; built-in defaults are used if omitted
    #[clap(name = "CONFIG_FILE_PATH", action)]
    config_file_path: Option<Utf8PathBuf>,

    /// Address to listen on, overriding the config file
    #[clap(long, action)]
    http_address: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    if args.openapi {
        return zone_info_server::run_openapi();
    }

    let mut config = match &args.config_file_path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config file {:?}", path))?,
        None => Config::default(),
    };
    if let Some(http_address) = args.http_address {
        config.dropshot.bind_address = http_address;
    }

    let log = config
        .log
        .to_logger("zone-info-server")
        .context("failed to create logger")?;

    info!(&log, "config"; "config" => ?config);

    let dropshot_server =
        zone_info_server::start_server(log.clone(), &config.dropshot)?;
    info!(&log, "listening"; "local_addr" => %dropshot_server.local_addr());

    dropshot_server
        .await
        .map_err(|error_message| anyhow!("server exiting: {}", error_message))
}
