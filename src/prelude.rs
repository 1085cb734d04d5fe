//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the kaiwa crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kaiwa::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph_json = std::fs::read_to_string("path/to/graph.json")?;
//! let document = GraphDocument::from_editor_json(&graph_json)?;
//!
//! let script = Compiler::new(document).compile_script("intro");
//! std::fs::write("intro.json", script.to_json_string()?)?;
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::compiler::{Compiler, CompilerBuilder, CompilerOptions, DYNAMIC_CHOICE_VARIABLE};

// Graph model
pub use crate::graph::{
    Action, CancelMode, ComparisonOp, Condition, Edge, GraphDocument, GraphIndex, IntoGraph,
    MenuChoice, MenuNode, Message, Node, NodeKind, VariableOperation,
};

// Output
pub use crate::command::{Command, CompiledScript, Opcode, Parameter};

// Traversal
pub use crate::traversal::{Reachability, downstream, shortest_path, upstream};

// Editor format
pub use crate::editor::EditorDocument;

// Error types
pub use crate::error::{ArtifactError, ConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
