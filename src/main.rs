/* 3rd party libraries */
use clap::{Arg, ArgMatches, Command};
use crossbeam_channel as cbc;
use env_logger::Env;
use std::io;
use std::num::ParseIntError;

/* Custom libraries */
use elevator_bank::config::{self, DEFAULT_CONFIG_PATH};
use elevator_bank::unwrap_or_exit;
use elevator_bank::{Cli, ElevatorSystem, Event};

/* Main */
fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let matches = Command::new("elevator-bank")
        .about("Dispatches a small bank of elevators from an interactive menu")
        .arg(
            Arg::new("config")
                .long("config")
                .takes_value(true)
                .default_value(DEFAULT_CONFIG_PATH)
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("elevators")
                .long("elevators")
                .takes_value(true)
                .help("Number of elevators, overrides the configuration file"),
        )
        .arg(
            Arg::new("capacity")
                .long("capacity")
                .takes_value(true)
                .help("Capacity of every elevator, overrides the configuration file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print elevator status as JSON"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or(DEFAULT_CONFIG_PATH);
    let mut config = unwrap_or_exit!(config::load_config(config_path));
    if let Some(n_elevators) = unwrap_or_exit!(parse_override(&matches, "elevators")) {
        config.system.n_elevators = n_elevators;
    }
    if let Some(capacity) = unwrap_or_exit!(parse_override(&matches, "capacity")) {
        config.system.capacity = capacity;
    }

    // Initialize the notification channel and the system
    let (event_tx, event_rx) = cbc::unbounded::<Event>();
    let system = unwrap_or_exit!(ElevatorSystem::from_config(&config.system, event_tx));

    // Run the menu on the terminal
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut cli = Cli::new(
        system,
        event_rx,
        stdin.lock(),
        stdout.lock(),
        matches.is_present("json"),
    );
    cli.run()
}

// Command line values take precedence over the configuration file
fn parse_override(matches: &ArgMatches, name: &str) -> Result<Option<u32>, ParseIntError> {
    matches.value_of(name).map(str::parse::<u32>).transpose()
}
