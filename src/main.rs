use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use lurecast::config::{default_config_dir, YamlDirSource};
use lurecast::core::constants::{DEFAULT_LEADERBOARD_LIMIT, PROGRESSION_FILE};
use lurecast::error::CatchError;
use lurecast::{
    CatalogHandle, CatchResolver, EconomyFormatter, JsonProgressionStore, PlayerId,
    ProgressionStore, TemplateFormatter, ValuationService,
};

/// Services shared by every command, built once at startup.
struct App {
    source: YamlDirSource,
    catalogs: Arc<CatalogHandle>,
    resolver: CatchResolver,
    valuation: ValuationService,
    formatter: TemplateFormatter,
    store: JsonProgressionStore,
}

impl App {
    fn open(dir: PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let source = YamlDirSource::new(dir);
        let settings = source.settings()?;
        let catalogs = Arc::new(CatalogHandle::load(&source)?);
        let store = JsonProgressionStore::open(source.dir().join(PROGRESSION_FILE))?;

        Ok(Self {
            resolver: CatchResolver::new(Arc::clone(&catalogs)),
            valuation: ValuationService::from_settings(&settings),
            formatter: TemplateFormatter::from_settings(&settings),
            source,
            catalogs,
            store,
        })
    }
}

type CommandResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let config_dir = take_option(&mut args, &["--config-dir", "-c"]).map(PathBuf::from);

    let command = match args.first() {
        Some(command) => command.clone(),
        None => {
            print_help();
            process::exit(1);
        }
    };

    match command.as_str() {
        "--version" | "-v" => {
            println!("lurecast {}", env!("CARGO_PKG_VERSION"));
            process::exit(0);
        }
        "--help" | "-h" => {
            print_help();
            process::exit(0);
        }
        _ => {}
    }

    let dir = match config_dir {
        Some(dir) => dir,
        None => match default_config_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
    };

    let mut app = match App::open(dir) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to start: {}", e);
            process::exit(1);
        }
    };

    let mut rest = args[1..].to_vec();
    let result = match command.as_str() {
        "cast" => cast(&mut app, &mut rest),
        "leaderboard" => leaderboard(&app, &mut rest),
        "reset" => reset(&mut app, &rest),
        "check" => check(&app),
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Run 'lurecast --help' for usage.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn cast(app: &mut App, args: &mut Vec<String>) -> CommandResult {
    let bait = take_option(args, &["--bait", "-b"]);
    let lure: u32 = take_option(args, &["--lure", "-l"])
        .map(|l| l.parse::<u32>())
        .transpose()?
        .unwrap_or(0);
    let count: u32 = take_option(args, &["--count", "-n"])
        .map(|n| n.parse::<u32>())
        .transpose()?
        .unwrap_or(1);
    let player: Option<PlayerId> = take_option(args, &["--player", "-p"])
        .map(|p| p.parse::<PlayerId>())
        .transpose()?;

    let mut rng = rand::thread_rng();
    let mut total = 0.0;

    for _ in 0..count {
        let catch = match app.resolver.resolve(bait.as_deref(), lure, &mut rng) {
            Ok(catch) => catch,
            Err(CatchError::Resolution(e)) => {
                println!("Nothing bites: {}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let value = app.valuation.value_of(&catch, 1);
        total += value;
        println!(
            "Caught a {} fish{} worth {}{}",
            catch.rarity.key,
            if catch.critical { " (critical!)" } else { "" },
            app.formatter.format(value),
            if catch.should_broadcast() {
                " - announced to everyone"
            } else {
                ""
            }
        );

        if let Some(player) = player {
            app.store.record_catch(player, &catch, value)?;
        }
    }

    if count > 1 {
        println!("Total: {}", app.formatter.format(total));
    }
    app.store.flush()?;
    Ok(())
}

fn leaderboard(app: &App, args: &mut Vec<String>) -> CommandResult {
    let rarity = take_option(args, &["--rarity", "-r"]);
    let limit: usize = take_option(args, &["--limit", "-n"])
        .map(|n| n.parse::<usize>())
        .transpose()?
        .unwrap_or(DEFAULT_LEADERBOARD_LIMIT);

    let snapshot = app.catalogs.snapshot();
    let entries = app
        .store
        .leaderboard(&snapshot.rarities, rarity.as_deref(), limit)?;

    println!("Leaderboard ({})", rarity.as_deref().unwrap_or("all rarities"));
    if entries.is_empty() {
        println!("  No catches yet.");
    }
    for (rank, entry) in entries.iter().enumerate() {
        println!("  {:>2}. {}  {}", rank + 1, entry.player, entry.score);
    }
    Ok(())
}

fn reset(app: &mut App, args: &[String]) -> CommandResult {
    let player: PlayerId = match args.first() {
        Some(id) => id.parse()?,
        None => return Err("usage: lurecast reset <player-uuid>".into()),
    };

    if app.store.reset_player(player)? {
        app.store.flush()?;
        println!("Reset statistics for {}", player);
    } else {
        println!("No statistics recorded for {}", player);
    }
    Ok(())
}

fn check(app: &App) -> CommandResult {
    let snapshot = app.catalogs.reload(&app.source)?;

    println!("Config directory: {}", app.source.dir().display());
    println!("Rarities:");
    for rarity in snapshot.rarities.all() {
        println!(
            "  {:<12} chance {:>6.2}  weight {:>4}  sells for {}",
            rarity.key,
            rarity.base_chance,
            rarity.leaderboard_weight,
            app.formatter.format(rarity.sell_price)
        );
    }
    println!("Baits:");
    for bait in snapshot.baits.all() {
        println!(
            "  {:<12} +{} on [{}], {}% critical, {} uses",
            bait.key,
            bait.bonus_chance,
            bait.targets.join(", "),
            bait.critical_chance,
            bait.uses
        );
    }
    Ok(())
}

/// Remove `--flag value` from `args` and return the value.
fn take_option(args: &mut Vec<String>, names: &[&str]) -> Option<String> {
    let i = args.iter().position(|a| names.contains(&a.as_str()))?;
    if i + 1 < args.len() {
        let value = args.remove(i + 1);
        args.remove(i);
        Some(value)
    } else {
        args.remove(i);
        None
    }
}

fn print_help() {
    println!("Lurecast - fishing catch resolver\n");
    println!("Usage: lurecast [--config-dir DIR] <command>\n");
    println!("Commands:");
    println!("  cast [--bait NAME] [--lure N] [--count N] [--player UUID]");
    println!("                          Cast a line and value the catch");
    println!("  leaderboard [--rarity KEY] [--limit N]");
    println!("                          Show the top players");
    println!("  reset <UUID>            Clear a player's statistics");
    println!("  check                   Reload and validate the configuration");
    println!("  --version               Show version information");
    println!("  --help                  Show this help message");
}
