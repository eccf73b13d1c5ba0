//! Interactive shortest route finder
use anyhow::anyhow;
use atc_core::{
    layout,
    prelude::*,
    util::cli::{self, Cfg},
};
use log::info;
use reedline_repl_rs::clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.graph.info()))
}

fn find_path(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let start = args
        .get_one::<String>("start")
        .map(String::as_str)
        .unwrap_or_default();
    let end = args
        .get_one::<String>("end")
        .map(String::as_str)
        .unwrap_or_default();

    let (result, stats) = PathQueryService::new(&context.graph).query_with_stats(start, end);

    let mut out = format!("[{}]\n{}", result.title(), result);
    if args.get_flag("stats") {
        out.push_str(&format!("\n{}", stats));
    }
    Ok(Some(out))
}

fn list_routes(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let routes = context.graph.list_routes();
    let listing = RouteListing(&routes);
    Ok(Some(format!("[{}]\n{}", listing.title(), listing)))
}

fn show_layout(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let lines: Vec<String> = layout::graph_positions(&context.graph)
        .into_iter()
        .map(|(code, position)| match position {
            Some(position) => format!("{code}: {position}"),
            None => format!("{code}: no fixed position"),
        })
        .collect();
    Ok(Some(lines.join("\n")))
}

fn measure_queries(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::seq::SliceRandom;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    let codes: Vec<&str> = context
        .graph
        .airports()
        .map(|airport| airport.code.as_str())
        .collect();
    if codes.is_empty() {
        return Ok(Some("No airports available.".to_string()));
    }

    let service = PathQueryService::new(&context.graph);
    let mut rng = rand::thread_rng();

    let mut res = String::new();
    for _ in 0..n {
        let (Some(start), Some(end)) = (codes.choose(&mut rng), codes.choose(&mut rng)) else {
            continue;
        };
        let (result, stats) = service.query_with_stats(start, end);
        if !result.is_found() {
            continue;
        }
        res.push_str(&format!(
            "{} -> {}: {:?}\n",
            start,
            end,
            stats.duration.unwrap_or_default()
        ));
    }

    Ok(Some(res))
}

struct Context {
    graph: RouteGraph,
}

impl Context {
    fn new(graph: RouteGraph) -> Self {
        Self { graph }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg: Cfg = cli::parse();
    let graph = cfg.load_graph()?;
    info!("{}", graph.info());

    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Route Finder")
        .with_version("v0.1.0")
        .with_description("Find the shortest route between two airports")
        .with_banner("Welcome to Route Finder")
        .with_history(cfg.history_file.clone(), cfg.history_size)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("path")
                .arg(
                    Arg::new("start")
                        .required(true)
                        .help("Code of the start airport"),
                )
                .arg(
                    Arg::new("end")
                        .required(true)
                        .help("Code of the destination airport"),
                )
                .arg(
                    Arg::new("stats")
                        .long("stats")
                        .action(ArgAction::SetTrue)
                        .help("Print search statistics"),
                )
                .about("Find the shortest path between two airports"),
            find_path,
        )
        .with_command(
            Command::new("routes").about("Show all available routes"),
            list_routes,
        )
        .with_command(
            Command::new("layout").about("Print the drawing position of every airport"),
            show_layout,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random queries to run"),
                )
                .about("Measure `n` random shortest path queries"),
            measure_queries,
        );

    repl.run().map_err(|err| anyhow!("REPL terminated: {err}"))
}
