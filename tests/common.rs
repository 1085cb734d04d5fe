//! Common test utilities for building dialogue graphs.
use kaiwa::prelude::*;

#[allow(dead_code)]
pub fn start(id: &str) -> Node {
    Node::new(id, NodeKind::Start)
}

#[allow(dead_code)]
pub fn end(id: &str) -> Node {
    Node::new(id, NodeKind::End)
}

/// An action node running a single script.
#[allow(dead_code)]
pub fn script_node(id: &str, code: &str) -> Node {
    Node::new(id, NodeKind::Action(vec![Action::script(code)]))
}

#[allow(dead_code)]
pub fn condition_node(id: &str, condition: Condition) -> Node {
    Node::new(id, NodeKind::Condition(condition))
}

/// A static menu with one plain choice per text.
#[allow(dead_code)]
pub fn menu_node(id: &str, texts: &[&str]) -> Node {
    let choices = texts
        .iter()
        .enumerate()
        .map(|(i, text)| MenuChoice::new(format!("{}-{}", id, i), *text))
        .collect();
    Node::new(id, NodeKind::Menu(MenuNode::with_choices(choices)))
}

#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> Edge {
    Edge::new(format!("{}->{}", source, target), source, target)
}

#[allow(dead_code)]
pub fn handle_edge(source: &str, target: &str, handle: &str) -> Edge {
    Edge::new(format!("{}:{}->{}", source, handle, target), source, target).with_handle(handle)
}

/// The script command a `script_node` emits at `indent`.
#[allow(dead_code)]
pub fn script_cmd(indent: u32, code: &str) -> Command {
    Command::new(Opcode::Script, indent, vec![Parameter::Str(code.to_string())])
}

#[allow(dead_code)]
pub fn codes(commands: &[Command]) -> Vec<u16> {
    commands.iter().map(Command::code).collect()
}

#[allow(dead_code)]
pub fn count_opcode(commands: &[Command], opcode: Opcode) -> usize {
    commands.iter().filter(|c| c.opcode == opcode).count()
}

/// Label names carried by commands of `opcode` (labels or jumps).
#[allow(dead_code)]
pub fn label_names(commands: &[Command], opcode: Opcode) -> Vec<String> {
    commands
        .iter()
        .filter(|c| c.opcode == opcode)
        .filter_map(|c| c.parameters.first().and_then(Parameter::as_str))
        .map(str::to_string)
        .collect()
}

/// `start -> cond(true: a, false: b)`, both branches rejoining at `shared -> end`.
#[allow(dead_code)]
pub fn create_converging_graph() -> GraphDocument {
    GraphDocument::new(
        vec![
            start("start"),
            condition_node("cond", Condition::switch(1, true)),
            script_node("a", "a()"),
            script_node("b", "b()"),
            script_node("shared", "shared()"),
            end("end"),
        ],
        vec![
            edge("start", "cond"),
            handle_edge("cond", "a", "true"),
            handle_edge("cond", "b", "false"),
            edge("a", "shared"),
            edge("b", "shared"),
            edge("shared", "end"),
        ],
    )
}

/// A graph mixing menus, conditions, convergence and a loop back to the menu.
#[allow(dead_code)]
pub fn create_complex_graph() -> GraphDocument {
    GraphDocument::new(
        vec![
            start("start"),
            menu_node("menu", &["Ask", "Check", "Leave"]),
            Node::new(
                "ask",
                NodeKind::Action(vec![
                    Action::show_text("What is this place?\nTell me."),
                    Action::SetVariable {
                        variable_id: 4,
                        operation: VariableOperation::Add,
                        value: 1,
                    },
                ]),
            ),
            condition_node("check", Condition::variable(4, ComparisonOp::GreaterOrEqual, 3)),
            script_node("enough", "tired()"),
            script_node("bye", "farewell()"),
            end("end"),
        ],
        vec![
            edge("start", "menu"),
            handle_edge("menu", "ask", "choice-0"),
            handle_edge("menu", "check", "choice-1"),
            handle_edge("menu", "bye", "choice-2"),
            edge("ask", "menu"),
            handle_edge("check", "enough", "true"),
            handle_edge("check", "menu", "false"),
            edge("enough", "bye"),
            edge("bye", "end"),
        ],
    )
}
