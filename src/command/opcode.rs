use serde::{Deserialize, Serialize};
use std::fmt;

/// An event-command code understood by the target engine's interpreter.
///
/// The numeric values are a compatibility contract with the interpreter and
/// must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // Block / program terminator
    End,

    // Messages
    ShowText,
    TextLine,

    // Choices
    ShowChoices,
    ChoiceBranch,
    ChoiceCancel,
    ChoiceBlockEnd,

    // Conditionals
    ConditionalBranch,
    ConditionalElse,
    ConditionalEnd,

    // Labels
    Label,
    JumpToLabel,

    // Game state
    CommonEvent,
    ControlSwitches,
    ControlVariables,

    // Scripting
    Script,
    ScriptLine,
    PluginCommand,
}

impl Opcode {
    /// The numeric command code written into the engine's event list.
    pub fn code(self) -> u16 {
        match self {
            Opcode::End => 0,
            Opcode::ShowText => 101,
            Opcode::TextLine => 401,
            Opcode::ShowChoices => 102,
            Opcode::ChoiceBranch => 402,
            Opcode::ChoiceCancel => 403,
            Opcode::ChoiceBlockEnd => 404,
            Opcode::ConditionalBranch => 111,
            Opcode::ConditionalElse => 411,
            Opcode::ConditionalEnd => 412,
            Opcode::Label => 118,
            Opcode::JumpToLabel => 119,
            Opcode::CommonEvent => 117,
            Opcode::ControlSwitches => 121,
            Opcode::ControlVariables => 122,
            Opcode::Script => 355,
            Opcode::ScriptLine => 655,
            Opcode::PluginCommand => 357,
        }
    }

    /// Maps a numeric command code back to its opcode, if it is one this crate emits.
    pub fn from_code(code: u16) -> Option<Self> {
        let opcode = match code {
            0 => Opcode::End,
            101 => Opcode::ShowText,
            401 => Opcode::TextLine,
            102 => Opcode::ShowChoices,
            402 => Opcode::ChoiceBranch,
            403 => Opcode::ChoiceCancel,
            404 => Opcode::ChoiceBlockEnd,
            111 => Opcode::ConditionalBranch,
            411 => Opcode::ConditionalElse,
            412 => Opcode::ConditionalEnd,
            118 => Opcode::Label,
            119 => Opcode::JumpToLabel,
            117 => Opcode::CommonEvent,
            121 => Opcode::ControlSwitches,
            122 => Opcode::ControlVariables,
            355 => Opcode::Script,
            655 => Opcode::ScriptLine,
            357 => Opcode::PluginCommand,
            _ => return None,
        };
        Some(opcode)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
