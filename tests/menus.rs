//! Tests for static and dynamic choice-menu emission.
mod common;
use common::*;
use kaiwa::compiler::menu::{choice_script, selection_condition};
use kaiwa::prelude::*;

fn two_choice_graph(menu: Node) -> GraphDocument {
    GraphDocument::new(
        vec![
            start("s"),
            menu,
            script_node("yes", "yes()"),
            script_node("no", "no()"),
        ],
        vec![
            edge("s", "m"),
            handle_edge("m", "yes", "choice-0"),
            handle_edge("m", "no", "choice-1"),
        ],
    )
}

fn dynamic_menu() -> MenuNode {
    MenuNode::with_choices(vec![
        MenuChoice::new("c0", "Yes"),
        MenuChoice::new("c1", "No").hidden_when(Condition::switch(3, true)),
    ])
}

#[test]
fn test_static_menu_emits_native_choice_block() {
    let commands = kaiwa::compile(&two_choice_graph(menu_node("m", &["Yes", "No"])));
    assert_eq!(
        commands,
        vec![
            Command::show_choices(0, vec!["Yes".to_string(), "No".to_string()], -1, 0, 2, 0),
            Command::choice_branch(0, 0, "Yes"),
            script_cmd(1, "yes()"),
            Command::end(1),
            Command::choice_branch(0, 1, "No"),
            script_cmd(1, "no()"),
            Command::end(1),
            Command::choice_block_end(0),
            Command::end(0),
        ]
    );
}

#[test]
fn test_unconnected_choice_gets_empty_branch() {
    let document = GraphDocument::new(
        vec![start("s"), menu_node("m", &["Only"])],
        vec![edge("s", "m")],
    );
    assert_eq!(codes(&kaiwa::compile(&document)), vec![102, 402, 0, 404, 0]);
}

#[test]
fn test_menu_without_choices_is_structurally_valid() {
    let document = GraphDocument::new(
        vec![start("s"), menu_node("m", &[])],
        vec![edge("s", "m")],
    );
    let commands = kaiwa::compile(&document);
    assert_eq!(
        commands,
        vec![
            Command::show_choices(0, vec![], -1, 0, 2, 0),
            Command::choice_block_end(0),
            Command::end(0),
        ]
    );
}

#[test]
fn test_cancel_modes_map_to_cancel_codes() {
    assert_eq!(CancelMode::Disallow.code(3), -1);
    assert_eq!(CancelMode::Branch.code(3), -2);
    assert_eq!(CancelMode::LastChoice.code(3), 2);

    let mut menu = MenuNode::with_choices(vec![
        MenuChoice::new("a", "A"),
        MenuChoice::new("b", "B"),
        MenuChoice::new("c", "C"),
    ]);
    menu.cancel_mode = CancelMode::LastChoice;
    menu.window_position = 1;
    menu.window_background = 2;
    let document = GraphDocument::new(
        vec![start("s"), Node::new("m", NodeKind::Menu(menu))],
        vec![edge("s", "m")],
    );
    let commands = kaiwa::compile(&document);
    assert_eq!(
        commands[0].parameters[1..],
        [Parameter::Int(2), Parameter::Int(0), Parameter::Int(1), Parameter::Int(2)]
    );
}

#[test]
fn test_cancel_branch_follows_cancel_handle() {
    let mut menu = MenuNode::with_choices(vec![MenuChoice::new("a", "Stay")]);
    menu.cancel_mode = CancelMode::Branch;
    let document = GraphDocument::new(
        vec![
            start("s"),
            Node::new("m", NodeKind::Menu(menu)),
            script_node("stay", "stay()"),
            script_node("flee", "flee()"),
        ],
        vec![
            edge("s", "m"),
            handle_edge("m", "stay", "choice-0"),
            handle_edge("m", "flee", "cancel"),
        ],
    );
    let commands = kaiwa::compile(&document);
    assert_eq!(
        commands,
        vec![
            Command::show_choices(0, vec!["Stay".to_string()], -2, 0, 2, 0),
            Command::choice_branch(0, 0, "Stay"),
            script_cmd(1, "stay()"),
            Command::end(1),
            Command::choice_cancel(0),
            script_cmd(1, "flee()"),
            Command::end(1),
            Command::choice_block_end(0),
            Command::end(0),
        ]
    );
}

#[test]
fn test_menu_prompt_precedes_choices() {
    let mut menu = MenuNode::with_choices(vec![MenuChoice::new("a", "Ok")]);
    menu.prompt = Some(Message::new("Ready?"));
    let document = GraphDocument::new(
        vec![start("s"), Node::new("m", NodeKind::Menu(menu))],
        vec![edge("s", "m")],
    );
    assert_eq!(
        codes(&kaiwa::compile(&document)),
        vec![101, 401, 102, 402, 0, 404, 0]
    );
}

#[test]
fn test_duplicate_choice_edges_use_first_in_order() {
    let document = GraphDocument::new(
        vec![
            start("s"),
            menu_node("m", &["Go"]),
            script_node("first", "first()"),
            script_node("second", "second()"),
        ],
        vec![
            edge("s", "m"),
            handle_edge("m", "first", "choice-0"),
            handle_edge("m", "second", "choice-0"),
        ],
    );
    let commands = kaiwa::compile(&document);
    assert!(commands.contains(&script_cmd(1, "first()")));
    assert!(!commands.contains(&script_cmd(1, "second()")));
}

#[test]
fn test_menu_detects_dynamic_choices() {
    assert!(!MenuNode::with_choices(vec![MenuChoice::new("a", "A")]).is_dynamic());
    assert!(dynamic_menu().is_dynamic());
    assert!(
        MenuNode::with_choices(vec![
            MenuChoice::new("a", "A").disabled_when(Condition::variable(1, ComparisonOp::Less, 5))
        ])
        .is_dynamic()
    );
}

#[test]
fn test_dynamic_choice_script() {
    let script = choice_script(&dynamic_menu(), "\\C[8]");
    let lines: Vec<&str> = script.lines().collect();
    assert_eq!(
        lines,
        vec![
            "const choices = [];",
            "const map = [];",
            r#"choices.push("Yes"); map.push(0);"#,
            r#"if (!($gameSwitches.value(3) === true)) { choices.push("No"); map.push(1); }"#,
            "$gameMessage.setChoices(choices, 0, -1);",
            "$gameMessage.setChoicePositionType(2);",
            "$gameMessage.setChoiceBackground(0);",
            "$gameMessage.setChoiceCallback(n => $gameVariables.setValue(99, n >= 0 ? map[n] : -1));",
        ]
    );
}

#[test]
fn test_dynamic_choice_script_decorates_disabled_choices() {
    let menu = MenuNode::with_choices(vec![
        MenuChoice::new("c0", "Maybe").disabled_when(Condition::variable(
            2,
            ComparisonOp::Less,
            10,
        )),
    ]);
    let script = choice_script(&menu, "\\C[8]");
    assert!(script.contains(
        r#"choices.push(($gameVariables.value(2) < 10) ? "\\C[8]Maybe" : "Maybe"); map.push(0);"#
    ));
}

#[test]
fn test_dynamic_menu_dispatches_on_scratch_variable() {
    let document = two_choice_graph(Node::new("m", NodeKind::Menu(dynamic_menu())));
    let commands = kaiwa::compile(&document);

    let script_lines = commands
        .iter()
        .take_while(|c| matches!(c.opcode, Opcode::Script | Opcode::ScriptLine))
        .count();
    assert_eq!(script_lines, 8);
    assert_eq!(commands[0].opcode, Opcode::Script);
    assert_eq!(commands[1].opcode, Opcode::ScriptLine);

    assert_eq!(
        commands[script_lines..],
        [
            Command::show_choices(0, vec![], -1, 0, 2, 0),
            Command::conditional_branch(0, "$gameVariables.value(99) == 0".to_string()),
            script_cmd(1, "yes()"),
            Command::end(1),
            Command::conditional_end(0),
            Command::conditional_branch(0, "$gameVariables.value(99) == 1".to_string()),
            script_cmd(1, "no()"),
            Command::end(1),
            Command::conditional_end(0),
            Command::end(0),
        ]
    );
    assert_eq!(count_opcode(&commands, Opcode::ChoiceBranch), 0);
}

#[test]
fn test_dynamic_menu_with_cancel_branch_routes_cancelled_selection() {
    let mut menu = dynamic_menu();
    menu.cancel_mode = CancelMode::Branch;
    let document = GraphDocument::new(
        vec![
            start("s"),
            Node::new("m", NodeKind::Menu(menu)),
            script_node("flee", "flee()"),
        ],
        vec![edge("s", "m"), handle_edge("m", "flee", "cancel")],
    );
    let commands = kaiwa::compile(&document);

    let routes: Vec<&str> = commands
        .iter()
        .filter(|c| c.opcode == Opcode::ConditionalBranch)
        .filter_map(|c| c.parameters.get(1).and_then(Parameter::as_str))
        .collect();
    assert_eq!(
        routes,
        vec![
            "$gameVariables.value(99) == 0",
            "$gameVariables.value(99) == 1",
            "$gameVariables.value(99) == -1",
        ]
    );
    assert!(commands.contains(&script_cmd(1, "flee()")));
    assert_eq!(selection_condition(-1).to_script(), "$gameVariables.value(99) == -1");
}

#[test]
fn test_dynamic_last_choice_cancel_is_set_by_script() {
    let mut menu = dynamic_menu();
    menu.cancel_mode = CancelMode::LastChoice;
    let script = choice_script(&menu, "\\C[8]");
    assert!(script.contains("$gameMessage.setChoices(choices, 0, choices.length - 1);"));

    let commands = kaiwa::compile(&two_choice_graph(Node::new("m", NodeKind::Menu(menu))));
    let show = commands
        .iter()
        .find(|c| c.opcode == Opcode::ShowChoices)
        .expect("dynamic menu opens a choice window");
    assert_eq!(show, &Command::show_choices(0, vec![], -1, 0, 2, 0));
}

#[test]
fn test_disabled_prefix_is_configurable() {
    let menu = MenuNode::with_choices(vec![
        MenuChoice::new("c0", "Locked").disabled_when(Condition::switch(1, false)),
    ]);
    let document = GraphDocument::new(
        vec![start("s"), Node::new("m", NodeKind::Menu(menu))],
        vec![edge("s", "m")],
    );
    let commands = Compiler::builder(document)
        .with_disabled_choice_prefix("[x] ")
        .build()
        .compile();
    let pushes = commands
        .iter()
        .filter_map(|c| c.parameters.first().and_then(Parameter::as_str))
        .find(|line| line.starts_with("choices.push("))
        .expect("choice push line");
    assert!(pushes.contains(r#""[x] Locked""#));
}

#[test]
fn test_menu_branches_can_reconverge() {
    let document = GraphDocument::new(
        vec![
            start("s"),
            menu_node("m", &["A", "B"]),
            script_node("after", "after()"),
        ],
        vec![
            edge("s", "m"),
            handle_edge("m", "after", "choice-0"),
            handle_edge("m", "after", "choice-1"),
        ],
    );
    let commands = kaiwa::compile(&document);
    assert_eq!(
        commands,
        vec![
            Command::show_choices(0, vec!["A".to_string(), "B".to_string()], -1, 0, 2, 0),
            Command::choice_branch(0, 0, "A"),
            Command::label(1, "after"),
            script_cmd(1, "after()"),
            Command::end(1),
            Command::choice_branch(0, 1, "B"),
            Command::jump_to_label(1, "after"),
            Command::end(1),
            Command::choice_block_end(0),
            Command::end(0),
        ]
    );
}
