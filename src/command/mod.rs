//! The compiled output: an ordered, indent-annotated list of event commands.

pub mod artifact;
pub mod opcode;
pub mod visualizer;

pub use artifact::CompiledScript;
pub use opcode::Opcode;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::fmt;

/// Script-type conditional branch, the only condition encoding this crate emits.
pub const CONDITION_TYPE_SCRIPT: i64 = 12;

/// Operand type for "constant" in a Control Variables command.
pub const OPERAND_CONSTANT: i64 = 0;

/// A single command parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parameter {
    Int(i64),
    Str(String),
    Bool(bool),
    List(Vec<Parameter>),
    Object(BTreeMap<String, String>),
}

impl Parameter {
    /// Converts the parameter into the JSON value the target interpreter reads.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Parameter::Int(n) => json!(n),
            Parameter::Str(s) => json!(s),
            Parameter::Bool(b) => json!(b),
            Parameter::List(items) => {
                serde_json::Value::Array(items.iter().map(Parameter::to_json).collect())
            }
            Parameter::Object(map) => json!(map),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Parameter::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Int(n) => write!(f, "{}", n),
            Parameter::Str(s) => write!(f, "{:?}", s),
            Parameter::Bool(b) => write!(f, "{}", b),
            Parameter::List(items) => write!(f, "[{}]", items.iter().join(", ")),
            Parameter::Object(map) => write!(
                f,
                "{{{}}}",
                map.iter().map(|(k, v)| format!("{}: {:?}", k, v)).join(", ")
            ),
        }
    }
}

impl From<i64> for Parameter {
    fn from(value: i64) -> Self {
        Parameter::Int(value)
    }
}

impl From<u32> for Parameter {
    fn from(value: u32) -> Self {
        Parameter::Int(value as i64)
    }
}

impl From<&str> for Parameter {
    fn from(value: &str) -> Self {
        Parameter::Str(value.to_string())
    }
}

impl From<String> for Parameter {
    fn from(value: String) -> Self {
        Parameter::Str(value)
    }
}

/// One entry of the compiled output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub opcode: Opcode,
    pub indent: u32,
    pub parameters: Vec<Parameter>,
}

/// Label name for a node. Derived from the id only, so output is stable across runs.
pub fn label_name(node_id: &str) -> String {
    format!("node_{}", node_id)
}

impl Command {
    pub fn new(opcode: Opcode, indent: u32, parameters: Vec<Parameter>) -> Self {
        Self {
            opcode,
            indent,
            parameters,
        }
    }

    /// The numeric command code.
    pub fn code(&self) -> u16 {
        self.opcode.code()
    }

    /// Converts the command into the `{code, indent, parameters}` object of the engine format.
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "code": self.code(),
            "indent": self.indent,
            "parameters": self.parameters.iter().map(Parameter::to_json).collect::<Vec<_>>(),
        })
    }

    /// Block end at `indent`, or the program terminator when `indent` is 0 and last.
    pub fn end(indent: u32) -> Self {
        Self::new(Opcode::End, indent, vec![])
    }

    pub fn label(indent: u32, node_id: &str) -> Self {
        Self::new(Opcode::Label, indent, vec![label_name(node_id).into()])
    }

    pub fn jump_to_label(indent: u32, node_id: &str) -> Self {
        Self::new(Opcode::JumpToLabel, indent, vec![label_name(node_id).into()])
    }

    pub fn conditional_branch(indent: u32, expression: String) -> Self {
        Self::new(
            Opcode::ConditionalBranch,
            indent,
            vec![Parameter::Int(CONDITION_TYPE_SCRIPT), expression.into()],
        )
    }

    pub fn conditional_else(indent: u32) -> Self {
        Self::new(Opcode::ConditionalElse, indent, vec![])
    }

    pub fn conditional_end(indent: u32) -> Self {
        Self::new(Opcode::ConditionalEnd, indent, vec![])
    }

    pub fn show_choices(
        indent: u32,
        texts: Vec<String>,
        cancel_code: i64,
        default_index: i64,
        window_position: i64,
        window_background: i64,
    ) -> Self {
        Self::new(
            Opcode::ShowChoices,
            indent,
            vec![
                Parameter::List(texts.into_iter().map(Parameter::Str).collect()),
                Parameter::Int(cancel_code),
                Parameter::Int(default_index),
                Parameter::Int(window_position),
                Parameter::Int(window_background),
            ],
        )
    }

    pub fn choice_branch(indent: u32, index: usize, text: &str) -> Self {
        Self::new(
            Opcode::ChoiceBranch,
            indent,
            vec![Parameter::Int(index as i64), text.into()],
        )
    }

    pub fn choice_cancel(indent: u32) -> Self {
        Self::new(Opcode::ChoiceCancel, indent, vec![])
    }

    pub fn choice_block_end(indent: u32) -> Self {
        Self::new(Opcode::ChoiceBlockEnd, indent, vec![])
    }

    pub fn show_text_header(
        indent: u32,
        face_name: &str,
        face_index: i64,
        background: i64,
        position: i64,
    ) -> Self {
        Self::new(
            Opcode::ShowText,
            indent,
            vec![
                face_name.into(),
                Parameter::Int(face_index),
                Parameter::Int(background),
                Parameter::Int(position),
            ],
        )
    }

    pub fn text_line(indent: u32, line: &str) -> Self {
        Self::new(Opcode::TextLine, indent, vec![line.into()])
    }

    /// A script split into a first line (355) and continuation lines (655).
    /// Always yields at least one command, even for an empty script.
    pub fn script(indent: u32, code: &str) -> Vec<Self> {
        let mut lines = code.lines();
        let first = lines.next().unwrap_or("");
        std::iter::once(Self::new(Opcode::Script, indent, vec![first.into()]))
            .chain(lines.map(|line| Self::new(Opcode::ScriptLine, indent, vec![line.into()])))
            .collect()
    }

    pub fn common_event(indent: u32, event_id: u32) -> Self {
        Self::new(Opcode::CommonEvent, indent, vec![event_id.into()])
    }

    /// Sets a single switch. `on` maps to operation 0, off to 1.
    pub fn control_switch(indent: u32, switch_id: u32, on: bool) -> Self {
        Self::new(
            Opcode::ControlSwitches,
            indent,
            vec![
                switch_id.into(),
                switch_id.into(),
                Parameter::Int(if on { 0 } else { 1 }),
            ],
        )
    }

    /// Applies `operation` (0..=5) with a constant operand to a single variable.
    pub fn control_variable(indent: u32, variable_id: u32, operation: i64, value: i64) -> Self {
        Self::new(
            Opcode::ControlVariables,
            indent,
            vec![
                variable_id.into(),
                variable_id.into(),
                Parameter::Int(operation),
                Parameter::Int(OPERAND_CONSTANT),
                Parameter::Int(value),
            ],
        )
    }

    pub fn plugin_command(
        indent: u32,
        plugin_name: &str,
        command_name: &str,
        args: BTreeMap<String, String>,
    ) -> Self {
        Self::new(
            Opcode::PluginCommand,
            indent,
            vec![
                plugin_name.into(),
                command_name.into(),
                Parameter::Object(args),
            ],
        )
    }
}

/// Converts a command list into the JSON array spliced into the engine's event data.
pub fn to_json_array(commands: &[Command]) -> serde_json::Value {
    serde_json::Value::Array(commands.iter().map(Command::to_json).collect())
}
