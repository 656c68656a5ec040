use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod args;
mod controller;
mod events;
mod lookup;
mod profile;
mod render;
mod state;
mod ui;


use self::args::Cli;
use self::controller::AppController;
use self::render::RenderOptions;
use self::state::AppState;
use self::ui::Output;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Before tracing init so RUST_LOG may come from .env
    let dotenv = dotenvy::dotenv();
    init_tracing(&cli.log_level, &cli.log_format);
    if let Err(e) = dotenv {
        tracing::debug!("No .env loaded: {}", e);
    }

    if let Some(path) = &cli.init_config {
        profile::init_config(path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = profile::load_config(cli.config.as_deref())?;
    cli.apply(&mut config);

    let output = Output {
        json: cli.json,
        render: RenderOptions {
            color: config.ui.color && atty::is(atty::Stream::Stdout),
            interactive: cli.word().is_none(),
        },
    };

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state.clone());
    let (mut tasks, handle) = controller.spawn_tasks().await;

    let session = async {
        match cli.word() {
            Some(word) => ui::lookup_once(&handle, &word, output).await,
            None => ui::ui_loop(state.clone(), handle.clone(), output)
                .await
                .map(|_| true),
        }
    };

    let succeeded = tokio::select! {
        result = session => result,
        _ = signal::ctrl_c() => {
            tracing::info!("Interrupted");
            Ok(true)
        }
    };

    handle.shutdown().await;
    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("lookup task failed: {e}"),
            Err(e) => tracing::error!("lookup task panicked: {e}"),
        }
    }

    if !succeeded? {
        std::process::exit(1);
    }
    Ok(())
}

/// Log to stderr so rendered output on stdout stays clean
fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
