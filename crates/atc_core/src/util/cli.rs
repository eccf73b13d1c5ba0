use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::graph::RouteGraph;

#[derive(Parser, Debug)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to a csv file with `from,to,weight` rows. The built-in routes are
    /// used if omitted
    #[arg(short, long, value_name = "file")]
    routes: Option<PathBuf>,

    /// File the REPL keeps its command history in
    #[arg(long, value_name = "file", default_value = "history")]
    history: PathBuf,

    /// Number of history entries to keep
    #[arg(long, default_value = "100")]
    history_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cfg {
    pub routes_file: Option<PathBuf>,
    pub history_file: PathBuf,
    pub history_size: usize,
}

impl Cfg {
    /// Builds the route graph this configuration points at.
    pub fn load_graph(&self) -> anyhow::Result<RouteGraph> {
        match &self.routes_file {
            Some(path) => RouteGraph::from_csv(path),
            None => RouteGraph::with_default_routes().context("Built-in route table is invalid"),
        }
    }
}

impl From<Cli> for Cfg {
    fn from(cli: Cli) -> Self {
        Cfg {
            routes_file: cli.routes,
            history_file: cli.history,
            history_size: cli.history_size,
        }
    }
}

pub fn parse() -> Cfg {
    Cli::parse().into()
}

pub fn parse_from<I, T>(args: I) -> Result<Cfg, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map(Cfg::from)
}
