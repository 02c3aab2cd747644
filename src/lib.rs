#![deny(clippy::all)]

use clap::{value_t, App, Arg, ArgMatches};

use lazy_static::lazy_static;
use log::info;
use thiserror::Error;

use std::collections::HashMap;
use std::io::{self, Write};

use searcher::{search_with, FifoFrontier, NodeRef, PriorityFrontier, SearchOptions, SearchResult};

pub mod vacuum;

use vacuum::{VacuumProblem, VacuumState, VacuumTrace, VacuumWorld};

type Error = anyhow::Error;
type Strategy = fn(&VacuumProblem, SearchOptions) -> SearchResult<VacuumTrace>;
type VacuumNode = NodeRef<VacuumProblem>;

const DEFAULT_START: &str = "dirty,dirty,A";
const DEFAULT_FRONTIER: &str = "priority";

lazy_static! {
    static ref STRATEGIES: HashMap<&'static str, Strategy> = {
        let mut s: HashMap<&'static str, Strategy> = HashMap::new();
        s.insert(
            "priority",
            search_with::<PriorityFrontier<VacuumNode>, VacuumProblem>,
        );
        s.insert("fifo", search_with::<FifoFrontier<VacuumNode>, VacuumProblem>);
        s
    };
}

pub fn app() -> App<'static, 'static> {
    App::new("Vacuum World")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Clean a two-square world with best-first search")
        .arg(
            Arg::with_name("start")
                .value_name("START")
                .required(false)
                .takes_value(true)
                .help("Starting state, as <clean|dirty>,<clean|dirty>,<A|B>"),
        )
        .arg(
            Arg::with_name("frontier")
                .short("f")
                .long("frontier")
                .value_name("FRONTIER")
                .takes_value(true)
                .help("Frontier strategy: priority or fifo"),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("STEPS")
                .takes_value(true)
                .help("Give up after visiting this many nodes"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .value_name("EVERY")
                .takes_value(true)
                .help("Log progress every EVERY nodes"),
        )
        .arg(
            Arg::with_name("table")
                .short("t")
                .long("table")
                .help("Print the transition table before searching"),
        )
}

/// Settings for a single run, gathered from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub start: VacuumState,
    pub frontier: String,
    pub options: SearchOptions,
    pub table: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start: VacuumState::new(
                vacuum::Dirt::Dirty,
                vacuum::Dirt::Dirty,
                vacuum::Location::A,
            ),
            frontier: DEFAULT_FRONTIER.to_string(),
            options: SearchOptions::default(),
            table: false,
        }
    }
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let start = matches.value_of("start").unwrap_or(DEFAULT_START).parse()?;

        let frontier = matches.value_of("frontier").unwrap_or(DEFAULT_FRONTIER);
        if !STRATEGIES.contains_key(frontier) {
            return Err(VacuumError::UnknownStrategy(frontier.to_string()).into());
        }

        let limit = if matches.is_present("limit") {
            Some(value_t!(matches, "limit", usize)?)
        } else {
            None
        };

        let verbose = if matches.is_present("verbose") {
            Some(value_t!(matches, "verbose", usize)?)
        } else {
            None
        };

        Ok(Config {
            start,
            frontier: frontier.to_string(),
            options: SearchOptions { limit, verbose },
            table: matches.is_present("table"),
        })
    }
}

pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();
    let config = Config::from_matches(&matches)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)
}

/// Search for a way to clean the world, and write out every node visited
/// followed by the plan which was found.
pub fn run(config: &Config, out: &mut dyn Write) -> Result<(), Error> {
    let strategy = STRATEGIES
        .get(config.frontier.as_str())
        .ok_or_else(|| VacuumError::UnknownStrategy(config.frontier.clone()))?;

    let problem = VacuumWorld::new().cleaning(config.start);
    if config.table {
        write!(out, "{}", problem)?;
    }

    info!(
        "Searching from {} with the {} frontier",
        config.start, config.frontier
    );
    let trace = strategy(&problem, config.options)?;

    for node in trace.iter() {
        writeln!(out, "{}", node)?;
    }

    let plan: Vec<String> = trace.solution().iter().map(|a| a.to_string()).collect();
    let cost = trace.goal().map(|g| *g.cost()).unwrap_or_default();
    writeln!(out, "Solution: {} (cost {})", plan.join(" "), cost)?;

    Ok(())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VacuumError {
    #[error("Invalid state {0:?}, expected <clean|dirty>,<clean|dirty>,<A|B>")]
    InvalidState(String),

    #[error("No frontier strategy named {0:?}")]
    UnknownStrategy(String),
}
