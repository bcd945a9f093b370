//! zap dashboard binary.
//!
//! # Usage
//!
//! ```bash
//! # Watch a live broker
//! mosquitto_sub -v -t '$SYS/#' -F '%t\t%p' | zap
//!
//! # Replay a capture with the clients panel on the left
//! zap --input capture.tsv --panels clients-first --log-file zap.log
//! ```

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use zap_tui::{
    DashboardConfig, FeedConfig, FeedError, Runtime, TerminalDriver, feed, spawn_feed, terminal,
    ui::PanelOrder,
};

/// Live terminal dashboard for MQTT broker statistics
#[derive(Parser, Debug)]
#[command(name = "zap")]
#[command(about = "Live terminal dashboard for MQTT broker $SYS statistics")]
#[command(version)]
struct Args {
    /// File of `topic<separator>payload` lines
    ///
    /// If not provided, lines are read from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Text between topic and payload on each line
    #[arg(long, default_value = feed::DEFAULT_SEPARATOR)]
    separator: String,

    /// Panel arrangement
    #[arg(long, value_enum, default_value_t = PanelOrder::MessagesFirst)]
    panels: PanelOrder,

    /// Redraw interval in milliseconds
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// Feed queue capacity
    #[arg(long, default_value = "1024")]
    queue: usize,

    /// Write logs to this file (the terminal belongs to the dashboard)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() {
    let args = Args::parse();

    let code = match run(args).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("zap: {e}");
            1
        },
    };

    // The blocking stdin reader cannot be cancelled, so do not wait for the
    // runtime to join it.
    std::process::exit(code);
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &args.log_file {
        init_logging(path, &args.log_level)?;
    }

    let config = DashboardConfig {
        tick_interval: Duration::from_millis(args.tick_ms),
        queue_capacity: args.queue,
    };
    config.validate()?;

    let feed_config = FeedConfig { separator: args.separator };
    feed_config.validate()?;

    let handle = match &args.input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .map_err(|source| FeedError::Open { path: path.clone(), source })?;
            spawn_feed(BufReader::new(file), feed_config, &config)
        },
        None => spawn_feed(BufReader::new(tokio::io::stdin()), feed_config, &config),
    };
    let (events, feed_task) = handle.into_parts();

    install_panic_hook();
    let driver = match TerminalDriver::new(args.panels) {
        Ok(driver) => driver,
        Err(e) => {
            feed_task.abort();
            return Err(e.into());
        },
    };

    tracing::info!("dashboard starting");
    let result = Runtime::new(driver, events, &config).run().await;
    feed_task.abort();

    let dashboard = result?;
    tracing::info!(metrics = dashboard.store().len(), "dashboard closed");
    Ok(())
}

fn init_logging(path: &Path, level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .try_init()?;
    Ok(())
}

/// Put the terminal back before the default hook prints the panic.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Err(e) = terminal::release() {
            tracing::error!(error = %e, "failed to restore terminal in panic hook");
        }
        default_hook(info);
    }));
}
