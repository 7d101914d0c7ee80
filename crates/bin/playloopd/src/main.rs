//! # playloopd — playloop daemon
//!
//! Composition root that wires the adapters together and runs the loop.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env vars)
//! - Initialize tracing
//! - Construct the virtual player adapter and the timer scheduler
//! - Construct the playback engine, injecting adapters via port traits
//! - Drive the simulated player clock
//! - Run the event loop until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::time::Duration;

use playloop_adapter_virtual::VirtualPlayer;
use playloop_app::engine::PlaybackEngine;
use playloop_app::ports::SystemClock;
use playloop_app::run_loop::{self, InputEvent};
use playloop_app::scheduler::TokioTimerScheduler;
use playloop_domain::session::Session;
use playloop_domain::snapshot::PackageName;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use self::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let package = PackageName::new(&config.player.package)?;
    let controls = config.control_ids();

    let (events_tx, mut events_rx) = mpsc::channel::<InputEvent>(256);

    // Adapters
    let scheduler = TokioTimerScheduler::new(events_tx.clone());
    let player = VirtualPlayer::new(package.clone(), controls.clone(), events_tx);

    // Engine and session
    let engine = PlaybackEngine::new(package, controls, player.clone(), scheduler, SystemClock);
    let mut session = Session::new(config.durations());

    // Advance the simulated player clock at one tick per second.
    let ticker = player.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        loop {
            interval.tick().await;
            if ticker.tick().await.is_err() {
                break;
            }
        }
    });

    player.open().await?;
    tracing::info!("playloopd running, press Ctrl-C to stop");

    tokio::select! {
        result = run_loop::run(&engine, &mut session, &mut events_rx) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutting down");
        }
    }

    Ok(())
}
