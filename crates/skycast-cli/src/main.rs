//! Terminal renderer for Skycast.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Driving the geocoding and forecast collaborators
//! - Human-friendly output of the view model

use clap::Parser;

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    skycast_core::init()?;

    let cmd = cli::Cli::parse();
    cmd.run().await
}
