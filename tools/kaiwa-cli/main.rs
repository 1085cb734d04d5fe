use clap::{Parser, Subcommand};
use kaiwa::command::visualizer::visualize_commands;
use kaiwa::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Compiles dialogue graphs into event commands and inspects their structure
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Compile an editor graph into event commands
    Compile {
        /// Path to the editor graph JSON file
        graph_path: String,

        /// Write the engine-format command JSON here instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Print a human-readable command listing
        #[arg(short, long)]
        listing: bool,

        /// Also save the compiled script as a binary artifact
        #[arg(long)]
        save: Option<String>,

        /// Text decoration for disabled dynamic choices
        #[arg(long)]
        disabled_prefix: Option<String>,
    },
    /// List everything reachable from a node
    Reach {
        graph_path: String,
        node_id: String,

        /// Walk edges backwards instead of forwards
        #[arg(short, long)]
        upstream: bool,
    },
    /// Print the shortest path between two nodes
    Path {
        graph_path: String,
        from: String,
        to: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        CliCommand::Compile {
            graph_path,
            output,
            listing,
            save,
            disabled_prefix,
        } => run_compile(&graph_path, output, listing, save, disabled_prefix),
        CliCommand::Reach {
            graph_path,
            node_id,
            upstream: backwards,
        } => run_reach(&graph_path, &node_id, backwards),
        CliCommand::Path {
            graph_path,
            from,
            to,
        } => run_path(&graph_path, &from, &to),
    }
}

fn load_graph(path: &str) -> GraphDocument {
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read graph file '{}': {}", path, e)));
    GraphDocument::from_editor_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load graph '{}': {}", path, e)))
}

fn script_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph".to_string())
}

fn run_compile(
    graph_path: &str,
    output: Option<String>,
    listing: bool,
    save: Option<String>,
    disabled_prefix: Option<String>,
) {
    let load_start = Instant::now();
    let document = load_graph(graph_path);
    let load_duration = load_start.elapsed();

    let mut builder = Compiler::builder(document);
    if let Some(prefix) = &disabled_prefix {
        builder = builder.with_disabled_choice_prefix(prefix);
    }
    let compiler = builder.build();

    let compile_start = Instant::now();
    let script = compiler.compile_script(&script_name(graph_path));
    let compile_duration = compile_start.elapsed();

    if script.commands.is_empty() {
        tracing::warn!("graph has no start node; output is empty");
    }

    if listing {
        eprintln!("{}", visualize_commands(&script.commands, &script.name));
    }

    let json = script
        .to_json_string()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode commands: {}", e)));
    match output {
        Some(path) => {
            fs::write(&path, json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write output '{}': {}", path, e))
            });
            tracing::info!(path = %path, "wrote command JSON");
        }
        None => println!("{}", json),
    }

    if let Some(path) = save {
        script
            .save(&path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save artifact: {}", e)));
        tracing::info!(path = %path, "saved compiled artifact");
    }

    tracing::info!(
        load = ?load_duration,
        compile = ?compile_duration,
        commands = script.commands.len(),
        "done"
    );
}

fn run_reach(graph_path: &str, node_id: &str, backwards: bool) {
    let document = load_graph(graph_path);
    let index = GraphIndex::build(&document);
    let reach = if backwards {
        upstream(&index, node_id)
    } else {
        downstream(&index, node_id)
    };

    let mut nodes: Vec<_> = reach.nodes.iter().collect();
    nodes.sort();
    let mut edges: Vec<_> = reach.edges.iter().collect();
    edges.sort();

    println!(
        "{} from '{}': {} node(s), {} edge(s)",
        if backwards { "Upstream" } else { "Downstream" },
        node_id,
        nodes.len(),
        edges.len()
    );
    for id in nodes {
        let kind = index.node(id).map_or("missing", |n| n.kind.name());
        println!("  node {} ({})", id, kind);
    }
    for id in edges {
        println!("  edge {}", id);
    }
}

fn run_path(graph_path: &str, from: &str, to: &str) {
    let document = load_graph(graph_path);
    let index = GraphIndex::build(&document);
    match shortest_path(&index, from, to) {
        Some(path) => println!("{}", path.join(" -> ")),
        None => {
            println!("'{}' is unreachable from '{}'", to, from);
            std::process::exit(2);
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
