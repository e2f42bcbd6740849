use std::path::Path as FsPath;

use anyhow::{Context, Result};
use frontier::config::RunConfig;
use frontier::graph::{
    get_shortest_paths_with_config, prim_get_mst_with_config, Graph, GraphSpec, Path, Records,
};
use serde::Serialize;

use crate::cli::{AlgorithmArg, Command};

pub fn execute_command(command: Command) -> Result<()> {
    let config = RunConfig::from_env();
    match command {
        Command::Mst { graph, start, json } => {
            let graph = load_graph(&graph)?;
            let mst = prim_get_mst_with_config(&graph, start, &config)?;
            if json {
                return print_json(&mst);
            }
            for edge in &mst.edges {
                println!("{edge}");
            }
            println!("total weight: {}", mst.total_weight()?);
            if !mst.is_spanning() {
                println!("graph is disconnected: {} of {} vertices spanned", mst.len() + 1, mst.num_vertices);
            }
        }
        Command::ShortestPaths { graph, start, json } => {
            let graph = load_graph(&graph)?;
            let tree = get_shortest_paths_with_config(&graph, start, &config)?;
            if json {
                return print_json(&tree);
            }
            for (v, dist) in tree.distances().into_iter().enumerate() {
                match dist {
                    Some(d) => println!("{v}: {d}"),
                    None => println!("{v}: unreachable"),
                }
            }
        }
        Command::Paths { graph, start, algorithm, json } => {
            let graph = load_graph(&graph)?;
            let paths = match algorithm {
                AlgorithmArg::Prim => prim_get_mst_with_config(&graph, start, &config)?.paths()?,
                AlgorithmArg::Dijkstra => get_shortest_paths_with_config(&graph, start, &config)?.paths()?,
            };
            if json {
                return print_json(&paths);
            }
            for (v, path) in paths.iter().enumerate() {
                println!("{v}: {}", render_path(path.as_ref())?);
            }
        }
        Command::Dump { graph, start } => {
            let graph = load_graph(&graph)?;
            print!("{graph}");
            let records = Records::new(&graph, start)?;
            print!("{records}");
            eprintln!("config: {}", config.summary());
        }
    }
    Ok(())
}

fn load_graph(path: &FsPath) -> Result<Graph> {
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let spec: GraphSpec =
        serde_json::from_slice(&data).with_context(|| format!("parsing graph {}", path.display()))?;
    Ok(Graph::from_spec(&spec)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_path(path: Option<&Path>) -> Result<String> {
    Ok(match path {
        None => "unreachable".to_string(),
        Some(p) if p.is_empty() => "start".to_string(),
        Some(p) => {
            let hops: Vec<String> = p.edges.iter().map(|e| e.to_string()).collect();
            format!("{}  (total {})", hops.join(" "), p.total_weight()?)
        }
    })
}
