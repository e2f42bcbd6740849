use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "frontier", about = "Prim's MST and Dijkstra's shortest paths over a JSON graph", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Minimum spanning tree (Prim's algorithm).
    Mst {
        graph: PathBuf,
        #[arg(long, default_value_t = 0)]
        start: usize,
        #[arg(long)]
        json: bool,
    },
    /// Shortest-path distances from the start vertex (Dijkstra's algorithm).
    ShortestPaths {
        graph: PathBuf,
        #[arg(long, default_value_t = 0)]
        start: usize,
        #[arg(long)]
        json: bool,
    },
    /// Explicit start-to-vertex paths for every vertex.
    Paths {
        graph: PathBuf,
        #[arg(long, default_value_t = 0)]
        start: usize,
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
        #[arg(long)]
        json: bool,
    },
    /// Print the graph and the records a run would start from.
    Dump {
        graph: PathBuf,
        #[arg(long, default_value_t = 0)]
        start: usize,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum AlgorithmArg {
    Prim,
    Dijkstra,
}
