// algotty: step-by-step search and sort visualizer for the terminal

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use algotty::config::{Config, RawParam};
use algotty::headless::{run_headless, HeadlessOptions};
use algotty::registry::Registry;
use algotty::ui::App;
use algotty::value::Value;

/// Environment variable holding the log filter
const LOG_ENV: &str = "ALGOTTY_LOG";

#[derive(Parser, Debug)]
#[command(author, version, about = "Step-by-step search and sort visualizer")]
struct Args {
    /// Algorithm id to open (see --list)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Comma separated input array, e.g. "5,-2,8.5"
    #[arg(long, allow_hyphen_values = true)]
    array: Option<String>,

    /// Search target
    #[arg(short, long, allow_hyphen_values = true)]
    target: Option<Value>,

    /// Delay between frames in milliseconds
    #[arg(short, long)]
    speed: Option<u64>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List the available algorithms and exit
    #[arg(long)]
    list: bool,

    /// Print frames to stdout instead of opening the TUI
    #[arg(long)]
    headless: bool,

    /// Headless: do not wait between frames
    #[arg(long, requires = "headless")]
    no_delay: bool,

    /// Headless: print plain text without colors
    #[arg(long)]
    no_color: bool,

    /// Write logs to this file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn print_algorithms(registry: &Registry) {
    for group in registry.topics() {
        println!("{}:", group.topic);
        for meta in group.algorithms {
            println!("  {:<16} {}", meta.id, meta.name);
        }
    }
}

/// Layer command-line flags over the loaded config
fn apply_args(config: &mut Config, args: &Args) {
    if let Some(algorithm) = &args.algorithm {
        config.initial_algorithm = algorithm.clone();
    }
    let algorithm = config.initial_algorithm.clone();
    if let Some(speed) = args.speed {
        config.default_speed_ms = speed;
        // the flag beats a per-algorithm speed from the file
        if let Some(fields) = config.params.get_mut(&algorithm) {
            fields.remove("speed");
        }
    }
    if let Some(array) = &args.array {
        config.set_param(&algorithm, "array", RawParam::Text(array.clone()));
    }
    if let Some(target) = args.target {
        config.set_param(&algorithm, "target", RawParam::Number(target));
    }
}

/// Install the fmt subscriber. The TUI owns the terminal, so without a log
/// file its output is discarded.
fn init_logging(
    log_file: Option<&Path>,
    filter: Option<&str>,
    headless: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(filter.unwrap_or("info")))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
        None if headless => builder.with_writer(io::stderr).init(),
        None => builder.with_writer(io::sink).init(),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let registry = Registry::builtin();

    if args.list {
        print_algorithms(&registry);
        return Ok(());
    }

    let mut config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    apply_args(&mut config, &args);
    if let Err(e) = config.validate(&registry) {
        eprintln!("Error: {}", e);
        eprintln!("Run with --list to see the available algorithms.");
        std::process::exit(1);
    }

    let log_file = args.log.as_deref().or(config.log_file.as_deref());
    init_logging(log_file, config.log_filter.as_deref(), args.headless)?;

    if args.headless {
        let algorithm = config.initial_algorithm.clone();
        let inputs = match registry.get(&algorithm) {
            Ok(meta) => config.inputs_for(&algorithm, meta.params),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        let options = HeadlessOptions {
            color: !args.no_color,
            delay: !args.no_delay,
        };
        match run_headless(registry, &algorithm, &inputs, options, io::stdout().lock()) {
            Ok(completion) => {
                tracing::info!(
                    algorithm = %algorithm,
                    frames = completion.frames,
                    "headless run finished"
                );
                return Ok(());
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(registry, config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
