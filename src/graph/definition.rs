use super::action::{Action, Message};
use super::condition::Condition;

/// Handle of a Condition node's "true" output.
pub const TRUE_HANDLE: &str = "true";
/// Handle of a Condition node's "false" output.
pub const FALSE_HANDLE: &str = "false";
/// Handle of a Menu node's cancel branch output.
pub const CANCEL_HANDLE: &str = "cancel";

/// Handle of the menu output routed by choice `index`.
pub fn choice_handle(index: usize) -> String {
    format!("choice-{}", index)
}

/// The complete graph snapshot handed to the compiler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// The first Start node, in document order.
    pub fn start_node(&self) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| matches!(n.kind, NodeKind::Start))
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// One vertex of the interaction graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub muted: bool,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            muted: false,
            kind,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }
}

/// Node kind with its kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Start,
    Menu(MenuNode),
    /// Actions executed in order.
    Action(Vec<Action>),
    Condition(Condition),
    End,
    /// Visual grouping only, never compiled.
    Group,
    /// Visual annotation only, never compiled.
    Comment,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::Menu(_) => "menu",
            NodeKind::Action(_) => "action",
            NodeKind::Condition(_) => "condition",
            NodeKind::End => "end",
            NodeKind::Group => "group",
            NodeKind::Comment => "comment",
        }
    }
}

/// How the player may cancel a choice window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancelMode {
    #[default]
    Disallow,
    /// Cancelling runs the menu's dedicated cancel branch.
    Branch,
    /// Cancelling behaves as selecting the last choice.
    LastChoice,
}

impl CancelMode {
    /// Cancel code of the Show Choices command for a menu with `choice_count` choices.
    pub fn code(self, choice_count: usize) -> i64 {
        match self {
            CancelMode::Disallow => -1,
            CancelMode::Branch => -2,
            CancelMode::LastChoice => choice_count as i64 - 1,
        }
    }
}

/// A choice-menu node's payload.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuNode {
    /// Message shown right before the choices, if any.
    pub prompt: Option<Message>,
    pub choices: Vec<MenuChoice>,
    pub cancel_mode: CancelMode,
    pub window_position: i64,
    pub window_background: i64,
}

impl Default for MenuNode {
    fn default() -> Self {
        Self {
            prompt: None,
            choices: Vec::new(),
            cancel_mode: CancelMode::Disallow,
            window_position: 2,
            window_background: 0,
        }
    }
}

impl MenuNode {
    pub fn with_choices(choices: Vec<MenuChoice>) -> Self {
        Self {
            choices,
            ..Self::default()
        }
    }

    /// A menu is dynamic when any choice depends on a runtime condition.
    pub fn is_dynamic(&self) -> bool {
        self.choices
            .iter()
            .any(|c| c.hide_condition.is_some() || c.disable_condition.is_some())
    }
}

/// One option of a menu, routed through the `choice-<index>` handle.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuChoice {
    pub id: String,
    pub text: String,
    /// Hides the choice while true.
    pub hide_condition: Option<Condition>,
    /// Shows the choice as disabled while true.
    pub disable_condition: Option<Condition>,
}

impl MenuChoice {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            hide_condition: None,
            disable_condition: None,
        }
    }

    pub fn hidden_when(mut self, condition: Condition) -> Self {
        self.hide_condition = Some(condition);
        self
    }

    pub fn disabled_when(mut self, condition: Condition) -> Self {
        self.disable_condition = Some(condition);
        self
    }
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Which logical output of the source this edge leaves from.
    pub source_handle: Option<String>,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            source_handle: None,
        }
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.source_handle = Some(handle.into());
        self
    }

    pub fn has_handle(&self, handle: &str) -> bool {
        self.source_handle.as_deref() == Some(handle)
    }
}
