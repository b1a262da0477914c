use std::env;
use std::fs;
use std::path::PathBuf;

use civica_core::actions::AppAction;
use civica_core::actions::RuntimeAction;
use civica_core::config::Config;
use civica_core::persistence::SessionEventStore;
use civica_core::reducer::reduce;
use civica_core::seed;
use civica_core::state::SessionState;

mod ui;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        return run_shell(None);
    };

    match command.as_str() {
        "--help" | "-h" | "help" => {
            print_help();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("civica {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "run" => {
            let data_dir = parse_data_arg(args.collect::<Vec<_>>())?;
            run_shell(data_dir)
        }
        _ => {
            print_help();
            Err(format!("unknown command: {command}").into())
        }
    }
}

fn parse_data_arg(args: Vec<String>) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    let mut data_dir = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--data" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--data requires a path".into());
                };
                data_dir = Some(PathBuf::from(value));
                i += 2;
            }
            other => {
                return Err(format!("unsupported argument: {other}").into());
            }
        }
    }
    Ok(data_dir)
}

fn run_shell(data_dir: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = data_dir.unwrap_or_else(default_data_dir);
    fs::create_dir_all(&data_dir)?;
    let store = SessionEventStore::open(data_dir.join("session-events.jsonl"))?;

    let config = load_config();
    let mut state = SessionState::new(config.clone());

    let (issues, rewards) = match config.seed.issues_file.as_deref() {
        Some(path) => {
            let file = seed::load_seed(path)?;
            let rewards = if file.rewards.is_empty() {
                seed::demo_rewards()
            } else {
                file.rewards.clone()
            };
            (file.into_issues(), rewards)
        }
        None => (seed::demo_issues(), seed::demo_rewards()),
    };
    reduce(&mut state, AppAction::Runtime(RuntimeAction::SeedIssues(issues)))?;
    reduce(
        &mut state,
        AppAction::Runtime(RuntimeAction::SeedRewards(rewards)),
    )?;

    ui::run(state, store, seed::demo_users())
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("civica")
}

fn load_config() -> Config {
    let Some(path) = dirs::config_dir().map(|dir| dir.join("civica").join("config.toml")) else {
        return Config::default();
    };
    let Ok(text) = fs::read_to_string(&path) else {
        return Config::default();
    };
    match toml::from_str(&text) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("warning: ignoring malformed {}: {err}", path.display());
            Config::default()
        }
    }
}

fn print_help() {
    println!("civica {}", env!("CARGO_PKG_VERSION"));
    println!("Usage:");
    println!("  civica               start the shell");
    println!("  civica run [--data PATH]");
    println!("  civica --help");
    println!("  civica --version");
}
