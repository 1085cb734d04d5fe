use serde::Deserialize;
use std::collections::BTreeMap;

/// Complete editor document: the node graph as saved by the dialogue editor.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EditorDocument {
    #[serde(default)]
    pub nodes: Vec<EditorNode>,
    #[serde(default)]
    pub edges: Vec<EditorEdge>,
}

/// Editor node with its type tag and free-form data.
#[derive(Debug, Deserialize, Clone)]
pub struct EditorNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub data: EditorNodeData,
}

/// Node payload. Every field is optional so partially filled nodes still load.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EditorNodeData {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub muted: bool,
    #[serde(default)]
    pub actions: Vec<EditorAction>,
    #[serde(default)]
    pub condition: Option<EditorCondition>,
    #[serde(default)]
    pub choices: Vec<EditorChoice>,
    #[serde(default, alias = "cancelType")]
    pub cancel_type: Option<String>,
    #[serde(default, alias = "windowPosition")]
    pub window_position: Option<i64>,
    #[serde(default, alias = "windowBackground")]
    pub window_background: Option<i64>,
    #[serde(default)]
    pub prompt: Option<EditorMessage>,
}

/// A single action inside an action node.
#[derive(Debug, Deserialize, Clone)]
pub struct EditorAction {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default, alias = "code")]
    pub script: Option<String>,
    #[serde(default, alias = "variableId")]
    pub variable_id: Option<u32>,
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default, alias = "switchId")]
    pub switch_id: Option<u32>,
    #[serde(default, alias = "eventId", alias = "commonEventId")]
    pub event_id: Option<u32>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(flatten)]
    pub message: EditorMessage,
    #[serde(default, alias = "pluginName")]
    pub plugin_name: Option<String>,
    #[serde(default, alias = "commandName")]
    pub command_name: Option<String>,
    #[serde(default)]
    pub args: Option<BTreeMap<String, serde_json::Value>>,
}

/// Message window fields shared by show-text actions and menu prompts.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EditorMessage {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, alias = "faceName")]
    pub face_name: Option<String>,
    #[serde(default, alias = "faceIndex")]
    pub face_index: Option<i64>,
    #[serde(default)]
    pub background: Option<i64>,
    #[serde(default)]
    pub position: Option<i64>,
}

/// A runtime condition as stored by the editor.
#[derive(Debug, Deserialize, Clone)]
pub struct EditorCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
    #[serde(default, alias = "switchId")]
    pub switch_id: Option<u32>,
    #[serde(default, alias = "variableId")]
    pub variable_id: Option<u32>,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default, alias = "script")]
    pub expression: Option<String>,
}

/// A menu choice with its optional runtime conditions.
#[derive(Debug, Deserialize, Clone)]
pub struct EditorChoice {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, alias = "hideCondition")]
    pub hide_condition: Option<EditorCondition>,
    #[serde(default, alias = "disableCondition")]
    pub disable_condition: Option<EditorCondition>,
}

/// Editor edge connecting two nodes.
#[derive(Debug, Deserialize, Clone)]
pub struct EditorEdge {
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: Option<String>,
}
