mod cli;
mod render;

use anyhow::Context;
use clap::Parser;
use passport_chain::{ChainConfig, CollectionViewer, SnapshotSource};
use passport_logging::{LogConfig, SubscriberBuilder};
use serde_json::json;

use crate::cli::{Cli, Command};
use crate::render::ItemSummary;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = SubscriberBuilder::new()
        .with_config(LogConfig::default().with_level(&cli.log_level))
        .init()?;

    let config = match &cli.config {
        Some(path) => ChainConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ChainConfig::default(),
    };
    tracing::debug!(network = config.network.label(), endpoint = config.rpc_endpoint(), "Config loaded");

    let viewer = CollectionViewer::new(SnapshotSource::new(&cli.snapshot), config);

    let output = match &cli.command {
        Command::Owned { address, .. } => {
            let (filter, sort) = cli.command.filter_spec().unwrap_or_default();
            let view = viewer.owned_view(address, &filter, sort).await?;
            if cli.json {
                let items: Vec<_> = view.items.iter().map(ItemSummary::new).collect();
                serde_json::to_string_pretty(&json!({
                    "total_owned": view.total_owned,
                    "rejected": view.rejected.len(),
                    "items": items,
                }))?
            } else {
                render::owned(&view)
            }
        }
        Command::Bloodline { address } => {
            let view = viewer.bloodline(address).await?;
            if cli.json {
                serde_json::to_string_pretty(&view.stats)?
            } else {
                render::bloodline(&view, address)
            }
        }
        Command::Item { object_id } => {
            let item = viewer.item(object_id).await?;
            if cli.json {
                serde_json::to_string_pretty(&ItemSummary::new(&item))?
            } else {
                render::item_detail(&item)
            }
        }
        Command::Stats => {
            let counters = viewer.counters().await?;
            if cli.json {
                serde_json::to_string_pretty(&counters)?
            } else {
                render::counters(&counters, viewer.config().network.label())
            }
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}
