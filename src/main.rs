use anyhow::Result;
use bloomia_core::init_logging;
use bloomia_io::settings::Settings;
use bloomia_lib::app::headless::{run_headless, HeadlessOptions};
use bloomia_lib::app::App;
use bloomia_lib::model::SessionMetrics;
use bloomia_tui::Tui;
use chrono::Local;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the game in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Settings file (player name and scoreboard credentials)
    #[arg(long, default_value = "bloomia-settings.json")]
    settings: PathBuf,

    /// Fixed seed for every run (headless: first of consecutive seeds)
    #[arg(long)]
    seed: Option<u32>,

    /// Number of runs to play in headless mode
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Player name saved to the settings file
    #[arg(long)]
    name: Option<String>,

    /// Scoreboard base URL saved to the settings file
    #[arg(long)]
    scoreboard_url: Option<String>,

    /// Scoreboard anon key saved to the settings file
    #[arg(long)]
    anon_key: Option<String>,

    /// Delete the settings file before starting
    #[arg(long)]
    clear_settings: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

/// Applies CLI overrides and writes them back when anything changed.
fn resolve_settings(args: &Args) -> Result<Settings> {
    if args.clear_settings {
        Settings::clear(&args.settings)?;
    }
    let mut settings = Settings::load(&args.settings);
    let before = settings.clone();
    if let Some(name) = &args.name {
        settings.player_name = name.clone();
    }
    if let Some(url) = &args.scoreboard_url {
        settings.supabase_url = url.clone();
    }
    if let Some(key) = &args.anon_key {
        settings.supabase_anon_key = key.clone();
    }
    if settings != before {
        settings = settings.save(&args.settings)?;
    }
    Ok(settings)
}

fn log_path() -> PathBuf {
    Path::new("logs").join(format!("bloomia-{}.log", Local::now().format("%Y%m%d-%H%M%S")))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.mode {
        Mode::Headless => {
            init_logging(None)?;
            let config = App::load_config(&args.config);
            resolve_settings(&args)?;
            let opts = HeadlessOptions {
                seed: args.seed,
                runs: args.runs,
                ..Default::default()
            };
            let metrics = SessionMetrics::new();
            for summary in run_headless(&config, &opts, &metrics) {
                println!("{}", serde_json::to_string(&summary)?);
            }
            metrics.log_summary();
        }
        Mode::Standard => {
            init_logging(Some(&log_path()))?;
            let config = App::load_config(&args.config);
            let settings = resolve_settings(&args)?;
            tracing::info!(fingerprint = %config.fingerprint(), "Configuration loaded");

            let mut tui = Tui::new()?;
            tui.init()?;

            let mut app = App::new(config, settings);
            app.fixed_seed = args.seed;
            let res = app.run(&mut tui).await;

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            }
        }
    }

    Ok(())
}
