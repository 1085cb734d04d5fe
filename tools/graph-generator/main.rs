use clap::Parser;
use kaiwa::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate random dialogue graphs in the editor format for stress-testing the compiler
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// Number of nodes between the start and end nodes
    #[arg(short, long, default_value_t = 50)]
    nodes: usize,

    /// Probability that a node also gets a back-edge to an earlier node
    #[arg(long, default_value_t = 0.05)]
    loops: f64,

    /// Probability that a node is muted
    #[arg(long, default_value_t = 0.05)]
    muted: f64,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if !(0.0..=1.0).contains(&cli.loops) || !(0.0..=1.0).contains(&cli.muted) {
        eprintln!("Error: --loops and --muted must be probabilities between 0 and 1");
        std::process::exit(1);
    }

    println!("Generating dialogue graph with {} inner node(s)...", cli.nodes);

    let mut generator = GraphGenerator::new(cli.nodes);
    let graph = generator.generate(&mut rng, cli.loops, cli.muted);

    let json_output = serde_json::to_string_pretty(&graph)?;

    // Check the generated document round-trips through the compiler before writing it.
    let document = GraphDocument::from_editor_json(&json_output)?;
    let commands = Compiler::new(document).compile();
    println!("-> Compiles to {} command(s).", commands.len());

    fs::write(&cli.output, json_output)?;
    println!("Successfully generated and saved graph to '{}'", cli.output);

    Ok(())
}

struct GraphGenerator {
    inner: usize,
    nodes: Vec<Value>,
    edges: Vec<Value>,
}

impl GraphGenerator {
    fn new(inner: usize) -> Self {
        Self {
            inner,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    fn node_id(i: usize) -> String {
        format!("n{}", i)
    }

    fn end_id(&self) -> String {
        Self::node_id(self.inner + 1)
    }

    /// A random forward target: a later inner node or the end node.
    fn forward_target(&self, rng: &mut ThreadRng, from: usize) -> String {
        let target = rng.random_range(from + 1..=self.inner + 1);
        Self::node_id(target)
    }

    fn connect(&mut self, source: &str, target: &str, handle: Option<String>) {
        let id = format!("e{}", self.edges.len());
        self.edges.push(json!({
            "id": id,
            "source": source,
            "target": target,
            "sourceHandle": handle,
        }));
    }

    fn generate(&mut self, rng: &mut ThreadRng, loops: f64, muted: f64) -> Value {
        self.nodes.push(json!({ "id": Self::node_id(0), "type": "start", "data": { "label": "Start" } }));
        self.connect(&Self::node_id(0), &Self::node_id(1usize.min(self.inner + 1)), None);

        for i in 1..=self.inner {
            let id = Self::node_id(i);
            let is_muted = rng.random_bool(muted);
            match rng.random_range(0..10) {
                0..=4 => {
                    self.nodes.push(json!({
                        "id": id, "type": "action",
                        "data": { "label": format!("Action {}", i), "muted": is_muted, "actions": random_actions(rng, i) }
                    }));
                    let target = self.forward_target(rng, i);
                    self.connect(&id, &target, None);
                }
                5..=6 => {
                    self.nodes.push(json!({
                        "id": id, "type": "condition",
                        "data": { "label": format!("Condition {}", i), "muted": is_muted, "condition": random_condition(rng) }
                    }));
                    for handle in ["true", "false"] {
                        let target = self.forward_target(rng, i);
                        self.connect(&id, &target, Some(handle.to_string()));
                    }
                }
                _ => {
                    let count = rng.random_range(2..=4);
                    let dynamic = rng.random_bool(0.3);
                    let choices: Vec<Value> = (0..count)
                        .map(|c| {
                            let mut choice = json!({ "id": format!("{}-c{}", id, c), "text": format!("Option {}", c + 1) });
                            if dynamic && c > 0 {
                                choice["hideCondition"] = random_condition(rng);
                            }
                            choice
                        })
                        .collect();
                    self.nodes.push(json!({
                        "id": id, "type": "menu",
                        "data": {
                            "label": format!("Menu {}", i), "muted": is_muted, "choices": choices,
                            "prompt": { "text": format!("Choose wisely ({})", i) }
                        }
                    }));
                    for c in 0..count {
                        let target = self.forward_target(rng, i);
                        self.connect(&id, &target, Some(format!("choice-{}", c)));
                    }
                }
            }

            if i > 1 && rng.random_bool(loops) {
                // A back-edge from a fresh action node keeps every handle single-use.
                let back = format!("{}-loop", id);
                self.nodes.push(json!({
                    "id": back, "type": "action",
                    "data": { "actions": [{ "type": "script", "script": format!("// loop {}", i) }] }
                }));
                let target = Self::node_id(rng.random_range(1..i));
                self.connect(&back, &target, None);
            }
        }

        self.nodes.push(json!({ "id": self.end_id(), "type": "end", "data": { "label": "End" } }));
        println!(
            "-> Generated {} node(s) and {} edge(s).",
            self.nodes.len(),
            self.edges.len()
        );
        json!({ "nodes": self.nodes, "edges": self.edges })
    }
}

fn random_actions(rng: &mut ThreadRng, i: usize) -> Vec<Value> {
    (0..rng.random_range(1..=3))
        .map(|a| match rng.random_range(0..4) {
            0 => json!({ "type": "showText", "text": format!("Line {} of node {}\nSecond line", a, i) }),
            1 => json!({ "type": "setVariable", "variableId": rng.random_range(1..20), "operation": "add", "value": rng.random_range(1..10) }),
            2 => json!({ "type": "setSwitch", "switchId": rng.random_range(1..20), "value": rng.random_bool(0.5) }),
            _ => json!({ "type": "script", "script": format!("console.log({});", i) }),
        })
        .collect()
}

fn random_condition(rng: &mut ThreadRng) -> Value {
    if rng.random_bool(0.5) {
        json!({ "type": "switch", "switchId": rng.random_range(1..20), "value": rng.random_bool(0.5) })
    } else {
        let ops = ["==", "!=", ">", "<", ">=", "<="];
        json!({
            "type": "variable",
            "variableId": rng.random_range(1..20),
            "operator": ops[rng.random_range(0..ops.len())],
            "value": rng.random_range(0..10),
        })
    }
}
