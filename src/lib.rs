//! # Kaiwa - Dialogue Graph Compiler
//!
//! **Kaiwa** compiles node-based dialogue graphs (branching conversations, choice
//! menus, conditional logic) into the flat, indent-annotated event-command lists that a
//! game engine's event interpreter executes. The compiler is static: it never runs the
//! logic it describes, it only lowers it.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Graph**: Parse the editor's JSON with [`editor::EditorDocument`], or
//!     implement [`graph::IntoGraph`] for your own format.
//! 2.  **Compile**: Build a [`compiler::Compiler`] from the `GraphDocument` and call
//!     `compile`. Branches become conditional blocks, menus become choice blocks, and
//!     loops or re-converging branches become label/jump pairs.
//! 3.  **Export**: Splice the resulting commands (or [`command::CompiledScript::to_json`])
//!     into an event page, or cache them with [`command::CompiledScript::save`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kaiwa::prelude::*;
//!
//! let document = GraphDocument::new(
//!     vec![
//!         Node::new("start", NodeKind::Start),
//!         Node::new("greet", NodeKind::Action(vec![Action::show_text("Hello there!")])),
//!         Node::new("end", NodeKind::End),
//!     ],
//!     vec![
//!         Edge::new("e1", "start", "greet"),
//!         Edge::new("e2", "greet", "end"),
//!     ],
//! );
//!
//! let compiler = Compiler::builder(document).build();
//! let commands = compiler.compile();
//!
//! // Show text header, one text line, and the terminator.
//! assert_eq!(commands.len(), 3);
//! println!("{}", kaiwa::command::visualizer::visualize_commands(&commands, "greeting"));
//! ```

pub mod command;
pub mod compiler;
pub mod editor;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod traversal;

pub use compiler::compile;
