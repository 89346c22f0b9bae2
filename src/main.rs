use anyhow::anyhow;
use bgtask_demo::config::Config;
use bgtask_demo::logging::init_tracing;
use bgtask_demo::shutdown::ShutdownCoordinator;
use bgtask_demo::ui::runtime::{run, run_headless};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "bgtask-demo",
    version,
    about = "One screen, one button: runs a background task and shows its result"
)]
struct Cli {
    /// Config file (default: ~/.config/bgtask-demo/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the background task delay in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Run without a terminal UI and print the label to stdout on every change
    #[arg(long)]
    headless: bool,

    /// Number of button presses in headless mode
    #[arg(long, default_value_t = 1)]
    presses: usize,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_main(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    init_tracing(&config.logging).map_err(|err| anyhow!("Failed to initialise logging: {err}"))?;
    tracing::info!(
        delay_ms = config.task.delay_ms,
        tick_rate_ms = config.ui.tick_rate_ms,
        headless = cli.headless,
        "Configuration loaded"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("bgtask-worker")
        .build()
        .map_err(|err| anyhow!("Failed to start async runtime: {err}"))?;
    let shutdown = ShutdownCoordinator::new();

    if cli.headless {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_headless(
            &config,
            runtime.handle().clone(),
            &shutdown,
            cli.presses,
            &mut out,
        )?;
    } else {
        run(&config, runtime.handle().clone(), &shutdown)?;
    }

    shutdown.signal();
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("Exited cleanly");
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(delay_ms) = cli.delay_ms {
        config.task.delay_ms = delay_ms;
    }
    if let Some(path) = &cli.log_file {
        config.logging.file = Some(path.clone());
    }
    config.validate()?;
    Ok(config)
}
