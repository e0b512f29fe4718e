//! Catch balance simulator CLI.
//!
//! Run Monte Carlo simulations of catches to check rarity and bait balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # 100,000 plain catches
//!   cargo run --bin simulate -- -b Worms -l 3       # Worms with lure III
//!   cargo run --bin simulate -- --seed 42           # Reproducible run

use std::env;
use std::path::PathBuf;
use std::process;

use lurecast::config::{default_config_dir, InMemorySource, Settings, YamlDirSource};
use lurecast::simulator::{run_simulation, SimConfig};
use lurecast::{Catalogs, ValuationService};

struct Options {
    config: SimConfig,
    config_dir: Option<PathBuf>,
    use_defaults: bool,
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);
    let config = &options.config;

    let (catalogs, settings) = match load(&options) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              LURECAST CATCH SIMULATOR                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Trials:         {}", config.trials);
    println!("  Rarities:       {}", catalogs.rarities.len());
    if let Some(bait) = &config.bait {
        println!("  Bait:           {}", bait);
    }
    if config.lure_level > 0 {
        println!("  Lure Level:     {}", config.lure_level);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let valuation = ValuationService::from_settings(&settings);
    let report = match run_simulation(&catalogs, config, &valuation) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if config.verbosity >= 1 {
        println!("{}", report.to_text());
    }

    if options.json {
        let filename = format!(
            "catch_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report: {}", e);
                process::exit(1);
            }
        }
    }
}

fn load(options: &Options) -> Result<(Catalogs, Settings), Box<dyn std::error::Error>> {
    if options.use_defaults {
        return Ok((
            Catalogs::load(&InMemorySource::with_defaults())?,
            Settings::default(),
        ));
    }

    let dir = match &options.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    let source = YamlDirSource::new(dir);
    Ok((Catalogs::load(&source)?, source.settings()?))
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        config: SimConfig::default(),
        config_dir: None,
        use_defaults: false,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--trials" => {
                if i + 1 < args.len() {
                    options.config.trials = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "-b" | "--bait" => {
                if i + 1 < args.len() {
                    options.config.bait = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "-l" | "--lure" => {
                if i + 1 < args.len() {
                    options.config.lure_level = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    options.config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-c" | "--config-dir" => {
                if i + 1 < args.len() {
                    options.config_dir = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--defaults" => {
                options.use_defaults = true;
            }
            "-v" | "--verbose" => {
                options.config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                options.config.verbosity = 0;
            }
            "--json" => {
                options.json = true;
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
            }
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Lurecast Catch Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --trials <N>       Number of catch attempts (default: 100,000)");
    println!("    -b, --bait <NAME>      Use this bait for every attempt");
    println!("    -l, --lure <L>         Lure enchantment level (default: 0)");
    println!("    -s, --seed <S>         Random seed for reproducibility");
    println!("    -c, --config-dir <D>   Config directory (default: ~/.lurecast)");
    println!("    --defaults             Use the built-in rarities and baits");
    println!("    -v, --verbose          Print every catch");
    println!("    -q, --quiet            Skip the text report");
    println!("    --json                 Save JSON report");
    println!("    -h, --help             Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                          # Default run");
    println!("    cargo run --bin simulate -- -b \"Ultra Worms\" -l 3 # Bait and lure");
    println!("    cargo run --bin simulate -- --seed 42 --json      # Reproducible, saved");
}
