use arithkit::Settings;
use arithkit::cli::commands::{compute, config, demo};
use arithkit::cli::{Cli, Commands};
use arithkit::logging;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(settings) => {
            logging::init_with_config(&settings.logging);
            match &cli.config {
                Some(path) => tracing::debug!("settings loaded from {}", path.display()),
                None => tracing::debug!("settings loaded (version {})", settings.version),
            }
            settings
        }
        Err(e) => {
            logging::init();
            tracing::warn!("Configuration error: {e}. Using defaults.");
            Settings::default()
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        None => demo::run(&mut out),
        Some(Commands::Factorial { n }) => compute::run_factorial(n, &mut out),
        Some(Commands::Add { a, b }) => compute::run_add(a, b, &mut out),
        Some(Commands::Config) => config::run_config(&settings, &mut out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
