//! paxsim — headless single-aisle boarding run.
//!
//! ```text
//! paxsim [CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! Without a config file the default session is used (125 passengers,
//! Front-2-Back).  `PAXSIM_STRATEGY` overrides the strategy
//! (`FRONT2BACK`, `BACK2FRONT`, `RANDOM`).  Logging follows `RUST_LOG`.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pax_output::{CsvEventWriter, SessionOutputObserver};
use pax_seating::BoardingStrategy;
use pax_session::{BoardingSession, SessionConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const STEP_SECS:          f64 = 1.0 / 30.0; // one animation frame
const PROGRESS_EVERY:     u64 = 300;        // log every 10 simulated seconds
const DEFAULT_OUTPUT_DIR: &str = "output";
const STRATEGY_VAR:       &str = "PAXSIM_STRATEGY";

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config(path: Option<&PathBuf>) -> Result<SessionConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SessionConfig::default(),
    };

    if let Ok(value) = env::var(STRATEGY_VAR) {
        config.strategy = value
            .parse::<BoardingStrategy>()
            .with_context(|| format!("{STRATEGY_VAR}={value}"))?;
    }
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args_os().skip(1).map(PathBuf::from);
    let config_path = args.next();
    let output_dir = args.next().unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    // 1. Session.
    let config = load_config(config_path.as_ref())?;
    println!("=== paxsim — single-aisle boarding ===");
    println!(
        "Passengers: {}  |  Strategy: {}  |  Walk: {}/s  |  Stagger: {}s",
        config.passenger_count,
        config.strategy,
        config.timeline.walking_speed,
        config.timeline.stagger,
    );
    let mut session = BoardingSession::from_config(config)?;

    // 2. Output.
    let writer = CsvEventWriter::new(&output_dir)
        .with_context(|| format!("opening output dir {}", output_dir.display()))?;
    let mut observer = SessionOutputObserver::new(writer);

    // 3. Run on a fixed step until everyone is seated.
    let wall = Instant::now();
    session.start_boarding()?;
    let mut step = 0u64;
    while !session.is_complete() {
        session.advance(STEP_SECS, &mut observer);
        step += 1;
        if step % PROGRESS_EVERY == 0 {
            let c = session.counters();
            info!(now = %session.now(), boarded = c.boarded, seated = c.seated, "boarding");
        }
    }
    observer.finish();
    if let Some(e) = observer.take_error() {
        warn!(error = %e, "output incomplete");
    }

    // 4. Report.
    let snapshot = session.snapshot();
    println!();
    print!("{}", snapshot.seat_map());
    println!();
    println!(
        "All {} passengers seated at {} ({} steps, {:.2?} wall)",
        snapshot.seated,
        snapshot.clock,
        step,
        wall.elapsed(),
    );
    println!("Output written to {}", output_dir.display());
    Ok(())
}
