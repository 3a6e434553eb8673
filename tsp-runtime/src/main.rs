use anyhow::{anyhow, Result};
use clap::{arg, Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use tsp_challenges::{example_graph, DistanceMatrix};
use tsp_runtime::{generate_graph, run_benchmark, solve_report, Comparator};
use tsp_structs::{config::RuntimeConfig, core::GraphReport};
use tsp_utils::{init_logger, jsonify, jsonify_pretty, parse_level_filter};

fn cli() -> Command {
    Command::new("tsp-runtime")
        .about("Solves small travelling salesman instances exactly and compares methods")
        .arg_required_else_help(true)
        .arg(
            arg!(--config [CONFIG] "Config json string or path to json file")
                .value_parser(clap::value_parser!(String))
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (off, error, warn, info, debug, trace)")
                .default_value("warn")
                .value_parser(clap::value_parser!(String))
                .global(true),
        )
        .arg(
            Arg::new("max-brute-force-n")
                .long("max-brute-force-n")
                .value_name("N")
                .help("Largest number of cities brute force is attempted for")
                .value_parser(clap::value_parser!(usize))
                .global(true),
        )
        .arg(
            Arg::new("max-held-karp-n")
                .long("max-held-karp-n")
                .value_name("N")
                .help("Largest number of cities Held-Karp is attempted for")
                .value_parser(clap::value_parser!(usize))
                .global(true),
        )
        .arg(
            arg!(--pretty "Pretty print the json output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("solve")
                .about("Solves a distance matrix with every method")
                .arg(
                    arg!(<MATRIX> "Matrix json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(Command::new("example").about("Prints the 6 city example graph"))
        .subcommand(
            Command::new("generate")
                .about("Generates a random symmetric graph")
                .arg(arg!(<N> "Number of cities").value_parser(clap::value_parser!(usize)))
                .arg(
                    arg!(--seed [SEED] "Seed for the random graph")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("benchmark")
                .about("Compares every method on random graphs of increasing size")
                .arg(
                    Arg::new("start-n")
                        .long("start-n")
                        .value_name("N")
                        .help("Smallest number of cities")
                        .default_value("3")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("end-n")
                        .long("end-n")
                        .value_name("N")
                        .help("Largest number of cities")
                        .default_value("10")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--seed [SEED] "Seed of the first random graph")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let level = parse_level_filter(required::<String>(matches, "log-level")?.as_str())?;
    init_logger(level)?;

    let config = RuntimeConfig::load(matches.get_one::<String>("config").map(String::as_str))?
        .with_overrides(
            matches.get_one::<usize>("max-brute-force-n").copied(),
            matches.get_one::<usize>("max-held-karp-n").copied(),
        );
    let pretty = matches.get_flag("pretty");

    match matches.subcommand() {
        Some(("solve", sub_m)) => {
            let comparator = Comparator::new(config.comparator.clone());
            print(
                &solve_report(&comparator, &required::<String>(sub_m, "MATRIX")?)?,
                pretty,
            )
        }
        Some(("example", _)) => print(&graph_report(&example_graph()), pretty),
        Some(("generate", sub_m)) => {
            let seed = seed_or_random(sub_m);
            let matrix = generate_graph(&config.generator, required::<usize>(sub_m, "N")?, seed)?;
            print(&graph_report(&matrix), pretty)
        }
        Some(("benchmark", sub_m)) => {
            let report = run_benchmark(
                &Comparator::new(config.comparator.clone()),
                &config.generator,
                &config.benchmark,
                required::<usize>(sub_m, "start-n")?,
                required::<usize>(sub_m, "end-n")?,
                seed_or_random(sub_m),
            )?;
            print(&report, pretty)
        }
        _ => Err(anyhow!("Invalid subcommand")),
    }
}

fn graph_report(matrix: &DistanceMatrix) -> GraphReport {
    GraphReport {
        n: matrix.n(),
        distance_matrix: matrix.to_rows(),
    }
}

fn seed_or_random(matches: &ArgMatches) -> u64 {
    let seed = matches
        .get_one::<u64>("seed")
        .copied()
        .unwrap_or_else(rand::random::<u64>);
    log::info!("seed: {}", seed);
    seed
}

fn required<T>(matches: &ArgMatches, id: &str) -> Result<T>
where
    T: Clone + Send + Sync + 'static,
{
    matches
        .get_one::<T>(id)
        .cloned()
        .ok_or_else(|| anyhow!("Missing argument {}", id))
}

fn print<T: Serialize>(obj: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        jsonify_pretty(obj)?
    } else {
        jsonify(obj)?
    };
    println!("{}", json);
    Ok(())
}
