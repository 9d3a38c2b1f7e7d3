use clap::{Parser, Subcommand, ValueEnum};
use point_quadtree_lib::Config;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Point Quadtree - index labeled points, export the tree to Graphviz and time it
pub struct Settings {
    /// Maximum points per quadtree node before subdivision
    #[clap(long, global = true, default_value = "4")]
    pub capacity: usize,

    /// Depth at which nodes stop subdividing
    #[clap(long, global = true, default_value = "20")]
    pub max_depth: u32,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Index the seven sample points, query them and remove one (default)
    Demo(DemoArgs),
    /// Build a tree from random points and write it as DOT or JSON
    Export(ExportArgs),
    /// Time insertion and range queries over growing inputs and write a CSV
    Bench(BenchArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Demo(DemoArgs::default())
    }
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct DemoArgs {
    /// Write the tree as DOT after inserting the sample points
    #[clap(long, value_name = "FILE")]
    pub dot_before: Option<PathBuf>,

    /// Write the tree as DOT after removing P5
    #[clap(long, value_name = "FILE")]
    pub dot_after: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Dot,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output format
    #[clap(short, long, value_enum, default_value = "dot")]
    pub format: ExportFormat,

    /// Output file, stdout when omitted
    #[clap(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of random points to index
    #[clap(short = 'n', long, default_value = "100")]
    pub points: usize,

    /// Seed for the point generator
    #[clap(long, default_value = "42")]
    pub seed: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct BenchArgs {
    /// Largest input size
    #[clap(long, default_value = "5000")]
    pub max_points: usize,

    /// Input size increment between runs
    #[clap(long, default_value = "100")]
    pub step: usize,

    /// Seed for the point generator
    #[clap(long, default_value = "42")]
    pub seed: u64,

    /// CSV file receiving `n,time_insert,time_range` rows
    #[clap(short, long, value_name = "FILE", default_value = "benchmark_results.csv")]
    pub output: PathBuf,
}

impl Settings {
    /// Parse the command line, exiting with clap's message on error
    pub fn from_cli() -> Self {
        match Settings::try_parse() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    /// Quadtree configuration from the global flags
    pub fn config(&self) -> Config {
        Config {
            max_points_per_node: self.capacity,
            max_depth: self.max_depth,
        }
    }
}
