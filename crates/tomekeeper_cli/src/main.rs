//! CLI entry point.
//!
//! # Responsibility
//! - Load configuration, pick the backing store and print the inventory
//!   view with its stats.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `tomekeeper_cli [--config PATH] [QUERY...]`

use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use tomekeeper_core::{
    build_store, init_logging_from_config, load_config, CatalogService, DataSource,
};

const ENV_CONFIG_PATH: &str = "TOMEKEEPER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "tomekeeper.toml";

#[derive(Parser, Debug)]
#[command(name = "tomekeeper_cli", version, about = "Print the bookshop inventory view")]
struct CliArgs {
    /// Path to the TOML configuration file.
    #[arg(long, env = ENV_CONFIG_PATH, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Search terms, joined with spaces.
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match load_config(Some(args.config.as_path())) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging_from_config(&config.logging) {
        eprintln!("warning: file logging disabled: {err}");
    }

    let store = match build_store(&config.store) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let service = CatalogService::new(store);
    service.load().await;
    if service.source() == DataSource::Fallback {
        eprintln!("warning: catalog service unreachable; showing sample data");
    }
    let view = service.set_query(&args.query.join(" "));

    println!(
        "tomekeeper_core version={} store={}",
        tomekeeper_core::core_version(),
        service.store_mode().as_str()
    );
    for item in &view {
        println!(
            "{:>4}  {:<20}  {:<45}  {:<22}  {:>8.2}  {:>4}",
            item.id, item.code, item.title, item.creator, item.unit_price, item.quantity_on_hand
        );
    }

    let stats = service.stats();
    println!(
        "titles={} units={} value={:.2} avg_price={:.2} shown={}",
        stats.title_count,
        stats.total_units,
        stats.total_value,
        stats.average_unit_price,
        view.len()
    );
    info!(
        "event=cli_list module=cli status=ok shown={} total={}",
        view.len(),
        stats.title_count
    );
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn config_flag_and_query_terms_are_split() {
        let args =
            CliArgs::try_parse_from(["tomekeeper_cli", "--config", "/tmp/tk.toml", "harry", "potter"])
                .unwrap();
        assert_eq!(args.config.to_str(), Some("/tmp/tk.toml"));
        assert_eq!(args.query.join(" "), "harry potter");
    }

    #[test]
    fn dangling_config_flag_is_an_error() {
        assert!(CliArgs::try_parse_from(["tomekeeper_cli", "--config"]).is_err());
    }
}
