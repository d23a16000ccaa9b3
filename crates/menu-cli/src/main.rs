use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;

mod commands;

#[derive(Parser)]
#[command(name = "menu")]
#[command(about = "Menu order desk", version, long_about = None)]
struct Cli {
    /// Layered config paths in merge order (later files override earlier ones)
    #[arg(long = "config", global = true)]
    config_paths: Vec<String>,

    /// Fail instead of warning when a config key is not consumed
    #[arg(long, global = true, default_value_t = false)]
    strict_config: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the order form: categories, remaining allowance, item rows
    Catalog,

    /// One-shot order: apply picks, place, print history, optionally export
    Order {
        /// Selection as "<item>=<qty>"; repeatable
        #[arg(long = "pick", required = true)]
        picks: Vec<String>,

        /// Export the history here after placing (.csv selects CSV, anything else text)
        #[arg(long)]
        export: Option<String>,
    },

    /// Interactive line loop on stdin (type `help`)
    Session,

    /// Show version information
    About,

    /// Print effective configuration and its hash
    Settings,
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    let loaded = commands::load_config(&cli.config_paths)?;
    let config = loaded.menu()?;
    init_tracing(&config.log_level);
    tracing::debug!(
        config_hash = %loaded.config_hash,
        layers = cli.config_paths.len(),
        "config loaded"
    );
    commands::check_unused_keys(&loaded, cli.strict_config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.cmd {
        Commands::Catalog => commands::catalog(config, &mut out)?,
        Commands::Order { picks, export } => {
            commands::order::run_order(config, &picks, export.as_deref(), &mut out)?
        }
        Commands::Session => {
            let stdin = io::stdin();
            commands::session::run_session(config, &loaded, stdin.lock(), &mut out)?
        }
        Commands::About => commands::about(&mut out)?,
        Commands::Settings => commands::settings(&loaded, &config, &mut out)?,
    }

    Ok(())
}

/// Logs go to stderr; stdout is the user surface.
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();
}
