use crate::command::{Command, CompiledScript};
use crate::graph::{GraphDocument, GraphIndex};

#[cfg(feature = "debug-tools")]
use {crate::command::visualizer, std::fs};

mod emitter;
pub mod menu;

use emitter::Emitter;

/// Game variable that receives the original choice index selected in a dynamic menu.
///
/// This slot is reserved process-wide: any other event writing to it while a dynamic
/// menu is waiting for input will misroute the selection.
pub const DYNAMIC_CHOICE_VARIABLE: u32 = 99;

/// Default decoration for visible-but-disabled dynamic choices (gray text colour).
pub const DEFAULT_DISABLED_CHOICE_PREFIX: &str = "\\C[8]";

/// Tunables applied to every compilation run.
#[derive(Debug, Clone)]
pub struct CompilerOptions {
    pub disabled_choice_prefix: String,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            disabled_choice_prefix: DEFAULT_DISABLED_CHOICE_PREFIX.to_string(),
        }
    }
}

/// Compiles a dialogue graph into a flat list of event commands.
///
/// Compilation is pure: calling `compile` repeatedly on the same compiler yields
/// identical output, and no state survives between calls.
pub struct Compiler {
    document: GraphDocument,
    options: CompilerOptions,
}

pub struct CompilerBuilder {
    document: GraphDocument,
    options: CompilerOptions,
}

impl CompilerBuilder {
    pub fn new(document: GraphDocument) -> Self {
        Self {
            document,
            options: CompilerOptions::default(),
        }
    }

    /// Overrides the text decoration applied to disabled dynamic choices.
    pub fn with_disabled_choice_prefix(mut self, prefix: &str) -> Self {
        self.options.disabled_choice_prefix = prefix.to_string();
        self
    }

    pub fn with_options(mut self, options: CompilerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            document: self.document,
            options: self.options,
        }
    }
}

impl Compiler {
    pub fn builder(document: GraphDocument) -> CompilerBuilder {
        CompilerBuilder::new(document)
    }

    pub fn new(document: GraphDocument) -> Self {
        CompilerBuilder::new(document).build()
    }

    pub fn document(&self) -> &GraphDocument {
        &self.document
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compiles the graph. The last command is always the top-level terminator,
    /// unless the graph has no Start node, in which case the list is empty.
    pub fn compile(&self) -> Vec<Command> {
        compile_with_options(&self.document, &self.options)
    }

    /// Compiles the graph into a named artifact.
    pub fn compile_script(&self, name: &str) -> CompiledScript {
        let script = CompiledScript::new(name, self.compile());

        #[cfg(feature = "debug-tools")]
        {
            let listing = visualizer::visualize_commands(&script.commands, name);
            let path = format!("tmp/script_{}_commands.txt", sanitize_filename(name));
            if let Err(e) = write_debug_file(&path, &listing) {
                tracing::warn!(path = %path, error = %e, "could not write debug listing");
            }
        }

        script
    }
}

/// Compiles `document` with default options.
pub fn compile(document: &GraphDocument) -> Vec<Command> {
    compile_with_options(document, &CompilerOptions::default())
}

pub fn compile_with_options(document: &GraphDocument, options: &CompilerOptions) -> Vec<Command> {
    let index = GraphIndex::build(document);
    tracing::debug!(
        nodes = index.node_count(),
        edges = document.edges.len(),
        convergence = index.convergence_nodes().len(),
        "compiling graph"
    );

    let commands = Emitter::new(&index, options).run();

    tracing::info!(
        nodes = document.nodes.len(),
        commands = commands.len(),
        "graph compiled"
    );
    commands
}

#[cfg(feature = "debug-tools")]
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect::<String>()
}

#[cfg(feature = "debug-tools")]
fn write_debug_file(path: &str, content: &str) -> std::io::Result<()> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
