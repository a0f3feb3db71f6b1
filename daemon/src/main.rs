//! consort daemon: entry point for starting a multi-group node.

use anyhow::Context;
use clap::Parser;
use consort_network::GroupRouter;
use consort_node::{LogFormat, LogSettings};
use consort_types::ConfigTree;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "consort-daemon", about = "consortium multi-group node daemon")]
struct Cli {
    /// Path to the node's TOML configuration file.
    #[arg(long, default_value = "conf/config.toml", env = "CONSORT_CONFIG")]
    config: PathBuf,

    /// Path to the node key file (hex Ed25519 private key).
    #[arg(long, default_value = "conf/node.key", env = "CONSORT_NODE_KEY")]
    node_key: PathBuf,

    /// Log filter, overrides `[log] level` from the config file.
    #[arg(long, env = "CONSORT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format ("human" or "json"), overrides `[log] format`.
    #[arg(long, env = "CONSORT_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Bring up every configured group and print the group routing table.
    Run {
        /// Print the routing table as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Generate a fresh node key file at `--node-key`.
    Keygen {
        /// Replace an existing key file.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Keygen { force } => {
            if cli.node_key.exists() && !force {
                anyhow::bail!(
                    "{} already exists, pass --force to replace it",
                    cli.node_key.display()
                );
            }
            let kp = consort_crypto::generate_keypair()?;
            consort_crypto::write_keypair(&cli.node_key, &kp)?;
            println!("{}", kp.public);
        }
        Command::Run { json } => {
            let config = ConfigTree::from_toml_file(&cli.config)
                .with_context(|| format!("loading {}", cli.config.display()))?;

            let mut log = LogSettings::from_tree(&config)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("[log] section of {}", cli.config.display()))?;
            if let Some(level) = cli.log_level {
                log.level = level;
            }
            if let Some(format) = cli.log_format {
                log.format = format;
            }
            consort_node::init_logging(log.format, &log.level)
                .context("installing tracing subscriber")?;

            let kp = consort_crypto::load_keypair(&cli.node_key)?;
            tracing::info!(node_id = %kp.public, "starting consort node");

            let mut router = GroupRouter::new(kp.public);
            let ledgers = consort_node::bootstrap(&config, &kp, &mut router).map_err(|e| {
                tracing::error!(error = %e, "group bootstrap failed, node will not start");
                e
            })?;
            tracing::info!(
                sealing = ?ledgers.sealing_groups(),
                "node bootstrap complete"
            );

            if let Some(table) = router.table() {
                if json {
                    println!("{}", serde_json::to_string_pretty(table)?);
                } else {
                    for ledger in ledgers.ledgers() {
                        let group = ledger.group_id();
                        println!(
                            "group {group} ({:?}, data {}):",
                            ledger.role(),
                            ledger.data_path().display()
                        );
                        for participant in router.participants(group)? {
                            println!("  {participant}");
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
