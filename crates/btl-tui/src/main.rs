//! Standalone TUI binary for Behind the Lie.

use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use btl_core::{Difficulty, ScenarioRepository};
use btl_tui::app::App;

#[derive(Parser)]
#[command(
    name = "btl",
    about = "Behind the Lie: a whodunit interrogation game",
    version
)]
struct Args {
    /// Scenario data file (CSV)
    #[arg(long, default_value = "data/scenarios.csv")]
    data: PathBuf,

    /// Starting difficulty (easy, medium, hard)
    #[arg(long, default_value = "easy")]
    difficulty: String,

    /// Number of suspects (3-5)
    #[arg(long, default_value = "4")]
    suspects: usize,

    /// Milliseconds between reveal ticks
    #[arg(long, default_value = "50")]
    tick_ms: u64,

    /// RNG seed; omit for a fresh game every run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    // An unreadable data file is not fatal: the repository stays empty and
    // the menu reports that no scenarios are available.
    let mut repository = ScenarioRepository::new();
    let load_note = match fs::read_to_string(&args.data) {
        Ok(text) => {
            let summary = repository.load(text.lines());
            if summary.skipped > 0 {
                format!(
                    "Loaded {} scenarios ({} malformed rows skipped)",
                    summary.scenarios, summary.skipped
                )
            } else {
                format!("Loaded {} scenarios", summary.scenarios)
            }
        }
        Err(e) => format!("Could not read {}: {e}", args.data.display()),
    };

    let difficulty = Difficulty::parse(&args.difficulty).unwrap_or(Difficulty::Easy);
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let app = App::new(repository, rng, difficulty, args.suspects, load_note);

    if let Err(e) = btl_tui::terminal::run(app, Duration::from_millis(args.tick_ms)) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
