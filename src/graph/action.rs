use crate::command::Command;
use std::collections::BTreeMap;

/// The arithmetic applied by a `SetVariable` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariableOperation {
    #[default]
    Set,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl VariableOperation {
    /// Parses an operation name or symbol, falling back to `Set`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "add" | "+" | "+=" => VariableOperation::Add,
            "subtract" | "sub" | "-" | "-=" => VariableOperation::Subtract,
            "multiply" | "mul" | "*" | "*=" => VariableOperation::Multiply,
            "divide" | "div" | "/" | "/=" => VariableOperation::Divide,
            "modulo" | "mod" | "%" | "%=" => VariableOperation::Modulo,
            _ => VariableOperation::Set,
        }
    }

    /// Operation code (0..=5) of the Control Variables command.
    pub fn code(self) -> i64 {
        match self {
            VariableOperation::Set => 0,
            VariableOperation::Add => 1,
            VariableOperation::Subtract => 2,
            VariableOperation::Multiply => 3,
            VariableOperation::Divide => 4,
            VariableOperation::Modulo => 5,
        }
    }
}

/// A message window with its face graphic and placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub face_name: String,
    pub face_index: i64,
    pub background: i64,
    pub position: i64,
    pub text: String,
}

impl Message {
    /// A plain message: no face, normal window, bottom position.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            face_name: String::new(),
            face_index: 0,
            background: 0,
            position: 2,
            text: text.into(),
        }
    }

    /// Lowers the message into one header plus one text-line command per line.
    pub fn lower(&self, indent: u32) -> Vec<Command> {
        let header = Command::show_text_header(
            indent,
            &self.face_name,
            self.face_index,
            self.background,
            self.position,
        );
        let mut lines: Vec<Command> = self
            .text
            .lines()
            .map(|line| Command::text_line(indent, line))
            .collect();
        if lines.is_empty() {
            lines.push(Command::text_line(indent, ""));
        }
        std::iter::once(header).chain(lines).collect()
    }
}

/// One step executed by an Action node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Script {
        code: String,
    },
    SetVariable {
        variable_id: u32,
        operation: VariableOperation,
        value: i64,
    },
    SetSwitch {
        switch_id: u32,
        value: bool,
    },
    CommonEvent {
        event_id: u32,
    },
    ShowText(Message),
    PluginCommand {
        plugin_name: String,
        command_name: String,
        args: BTreeMap<String, String>,
    },
}

impl Action {
    pub fn script(code: impl Into<String>) -> Self {
        Action::Script { code: code.into() }
    }

    pub fn show_text(text: impl Into<String>) -> Self {
        Action::ShowText(Message::new(text))
    }

    /// Lowers the action into its event commands. Multi-line payloads yield several commands.
    pub fn lower(&self, indent: u32) -> Vec<Command> {
        match self {
            Action::Script { code } => Command::script(indent, code),
            Action::SetVariable {
                variable_id,
                operation,
                value,
            } => vec![Command::control_variable(
                indent,
                *variable_id,
                operation.code(),
                *value,
            )],
            Action::SetSwitch { switch_id, value } => {
                vec![Command::control_switch(indent, *switch_id, *value)]
            }
            Action::CommonEvent { event_id } => vec![Command::common_event(indent, *event_id)],
            Action::ShowText(message) => message.lower(indent),
            Action::PluginCommand {
                plugin_name,
                command_name,
                args,
            } => vec![Command::plugin_command(
                indent,
                plugin_name,
                command_name,
                args.clone(),
            )],
        }
    }
}
