//! The dialogue editor's JSON document format.
//!
//! Type tags are matched case-insensitively and ignore `_`/`-`, so `setVariable`,
//! `set_variable` and `SET-VARIABLE` are the same action. Missing payload fields fall
//! back to neutral defaults (0, empty string, `true`) instead of failing; only unknown
//! type tags are rejected.

mod types;

pub use types::*;

use crate::error::ConversionError;
use crate::graph::{
    Action, CancelMode, ComparisonOp, Condition, Edge, GraphDocument, IntoGraph, MenuChoice,
    MenuNode, Message, Node, NodeKind, VariableOperation,
};
use std::collections::BTreeMap;

impl EditorDocument {
    pub fn from_json(json: &str) -> Result<Self, ConversionError> {
        serde_json::from_str(json).map_err(|e| ConversionError::JsonParseError(e.to_string()))
    }
}

impl GraphDocument {
    /// Parses and converts an editor JSON document in one step.
    pub fn from_editor_json(json: &str) -> Result<Self, ConversionError> {
        EditorDocument::from_json(json)?.into_graph()
    }
}

impl IntoGraph for EditorDocument {
    fn into_graph(self) -> Result<GraphDocument, ConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(convert_node)
            .collect::<Result<Vec<_>, _>>()?;

        let edges = self
            .edges
            .into_iter()
            .enumerate()
            .map(|(i, edge)| Edge {
                id: if edge.id.is_empty() {
                    format!("edge-{}", i)
                } else {
                    edge.id
                },
                source: edge.source,
                target: edge.target,
                source_handle: edge.source_handle.filter(|h| !h.is_empty()),
            })
            .collect();

        Ok(GraphDocument { nodes, edges })
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

fn convert_node(node: EditorNode) -> Result<Node, ConversionError> {
    let EditorNode {
        id,
        node_type,
        data,
    } = node;

    let kind = match normalize_tag(&node_type).as_str() {
        "start" => NodeKind::Start,
        "end" => NodeKind::End,
        "group" => NodeKind::Group,
        "comment" => NodeKind::Comment,
        "action" => NodeKind::Action(
            data.actions
                .iter()
                .map(|action| convert_action(&id, action))
                .collect::<Result<_, _>>()?,
        ),
        "condition" => NodeKind::Condition(match &data.condition {
            Some(condition) => convert_condition(&id, condition)?,
            None => Condition::default(),
        }),
        "menu" => NodeKind::Menu(convert_menu(&id, &data)?),
        _ => {
            return Err(ConversionError::UnknownNodeType {
                node_id: id,
                type_name: node_type,
            });
        }
    };

    Ok(Node {
        label: data.label.unwrap_or_default(),
        muted: data.muted,
        id,
        kind,
    })
}

fn convert_menu(node_id: &str, data: &EditorNodeData) -> Result<MenuNode, ConversionError> {
    let choices = data
        .choices
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            Ok::<_, ConversionError>(MenuChoice {
                id: if choice.id.is_empty() {
                    format!("{}-choice-{}", node_id, i)
                } else {
                    choice.id.clone()
                },
                text: choice.text.clone(),
                hide_condition: choice
                    .hide_condition
                    .as_ref()
                    .map(|c| convert_condition(node_id, c))
                    .transpose()?,
                disable_condition: choice
                    .disable_condition
                    .as_ref()
                    .map(|c| convert_condition(node_id, c))
                    .transpose()?,
            })
        })
        .collect::<Result<Vec<_>, ConversionError>>()?;

    let cancel_mode = match data.cancel_type.as_deref().map(normalize_tag).as_deref() {
        Some("branch") => CancelMode::Branch,
        Some("lastchoice") | Some("last") => CancelMode::LastChoice,
        _ => CancelMode::Disallow,
    };

    let defaults = MenuNode::default();
    Ok(MenuNode {
        prompt: data
            .prompt
            .as_ref()
            .filter(|p| p.text.is_some())
            .map(convert_message),
        choices,
        cancel_mode,
        window_position: data.window_position.unwrap_or(defaults.window_position),
        window_background: data.window_background.unwrap_or(defaults.window_background),
    })
}

fn convert_message(message: &EditorMessage) -> Message {
    let defaults = Message::new("");
    Message {
        face_name: message.face_name.clone().unwrap_or_default(),
        face_index: message.face_index.unwrap_or(defaults.face_index),
        background: message.background.unwrap_or(defaults.background),
        position: message.position.unwrap_or(defaults.position),
        text: message.text.clone().unwrap_or_default(),
    }
}

fn convert_action(node_id: &str, action: &EditorAction) -> Result<Action, ConversionError> {
    let converted = match normalize_tag(&action.action_type).as_str() {
        "script" => Action::Script {
            code: action.script.clone().unwrap_or_default(),
        },
        "setvariable" => Action::SetVariable {
            variable_id: action.variable_id.unwrap_or(0),
            operation: action
                .operation
                .as_deref()
                .map(VariableOperation::parse)
                .unwrap_or_default(),
            value: json_int(action.value.as_ref()),
        },
        "setswitch" => Action::SetSwitch {
            switch_id: action.switch_id.unwrap_or(0),
            value: json_bool(action.value.as_ref()),
        },
        "commonevent" => Action::CommonEvent {
            event_id: action.event_id.unwrap_or(0),
        },
        "showtext" => Action::ShowText(convert_message(&action.message)),
        "plugincommand" => Action::PluginCommand {
            plugin_name: action.plugin_name.clone().unwrap_or_default(),
            command_name: action.command_name.clone().unwrap_or_default(),
            args: action
                .args
                .as_ref()
                .map(stringify_args)
                .unwrap_or_default(),
        },
        _ => {
            return Err(ConversionError::UnknownActionType {
                node_id: node_id.to_string(),
                type_name: action.action_type.clone(),
            });
        }
    };
    Ok(converted)
}

fn convert_condition(
    node_id: &str,
    condition: &EditorCondition,
) -> Result<Condition, ConversionError> {
    let converted = match normalize_tag(&condition.condition_type).as_str() {
        "switch" => Condition::Switch {
            switch_id: condition.switch_id.unwrap_or(0),
            value: json_bool(condition.value.as_ref()),
        },
        "variable" => Condition::Variable {
            variable_id: condition.variable_id.unwrap_or(0),
            op: condition
                .operator
                .as_deref()
                .map(ComparisonOp::parse)
                .unwrap_or_default(),
            value: json_int(condition.value.as_ref()),
        },
        "script" => Condition::Script {
            expression: condition.expression.clone(),
        },
        _ => {
            return Err(ConversionError::UnknownConditionType {
                node_id: node_id.to_string(),
                type_name: condition.condition_type.clone(),
            });
        }
    };
    Ok(converted)
}

/// Integer payloads, accepting numbers or numeric strings. Anything else is 0.
fn json_int(value: Option<&serde_json::Value>) -> i64 {
    match value {
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Boolean payloads, accepting booleans, "on"/"off" style strings and numbers. Defaults to `true`.
fn json_bool(value: Option<&serde_json::Value>) -> bool {
    match value {
        Some(serde_json::Value::Bool(b)) => *b,
        Some(serde_json::Value::Number(n)) => n.as_i64() != Some(0),
        Some(serde_json::Value::String(s)) => !matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "off" | "false" | "0"
        ),
        _ => true,
    }
}

fn stringify_args(args: &BTreeMap<String, serde_json::Value>) -> BTreeMap<String, String> {
    args.iter()
        .map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), text)
        })
        .collect()
}
