//! Tests for muted-node bypass: a muted node collapses onto one outgoing edge.
mod common;
use common::*;
use kaiwa::prelude::*;

#[test]
fn test_muted_action_equals_removing_it() {
    let muted = GraphDocument::new(
        vec![
            start("s"),
            script_node("skip", "skipped()").muted(true),
            script_node("b", "b()"),
            end("e"),
        ],
        vec![edge("s", "skip"), edge("skip", "b"), edge("b", "e")],
    );
    let removed = GraphDocument::new(
        vec![start("s"), script_node("b", "b()"), end("e")],
        vec![edge("s", "b"), edge("b", "e")],
    );
    assert_eq!(kaiwa::compile(&muted), kaiwa::compile(&removed));
    assert_eq!(
        kaiwa::compile(&muted),
        vec![script_cmd(0, "b()"), Command::end(0)]
    );
}

#[test]
fn test_muted_condition_follows_true_branch() {
    let document = GraphDocument::new(
        vec![
            start("s"),
            condition_node("c", Condition::switch(1, true)).muted(true),
            script_node("yes", "yes()"),
            script_node("no", "no()"),
        ],
        vec![
            edge("s", "c"),
            handle_edge("c", "no", "false"),
            handle_edge("c", "yes", "true"),
        ],
    );
    assert_eq!(
        kaiwa::compile(&document),
        vec![script_cmd(0, "yes()"), Command::end(0)]
    );
}

#[test]
fn test_muted_condition_without_true_edge_uses_first_edge() {
    let document = GraphDocument::new(
        vec![
            start("s"),
            condition_node("c", Condition::switch(1, true)).muted(true),
            script_node("no", "no()"),
        ],
        vec![edge("s", "c"), handle_edge("c", "no", "false")],
    );
    assert_eq!(
        kaiwa::compile(&document),
        vec![script_cmd(0, "no()"), Command::end(0)]
    );
}

#[test]
fn test_muted_menu_follows_first_choice() {
    let document = GraphDocument::new(
        vec![
            start("s"),
            menu_node("m", &["A", "B"]).muted(true),
            script_node("a", "a()"),
            script_node("b", "b()"),
        ],
        vec![
            edge("s", "m"),
            handle_edge("m", "b", "choice-1"),
            handle_edge("m", "a", "choice-0"),
        ],
    );
    assert_eq!(
        kaiwa::compile(&document),
        vec![script_cmd(0, "a()"), Command::end(0)]
    );
}

#[test]
fn test_muted_menu_without_first_choice_uses_first_edge() {
    let document = GraphDocument::new(
        vec![
            start("s"),
            menu_node("m", &["A", "B"]).muted(true),
            script_node("b", "b()"),
        ],
        vec![edge("s", "m"), handle_edge("m", "b", "choice-1")],
    );
    assert_eq!(
        kaiwa::compile(&document),
        vec![script_cmd(0, "b()"), Command::end(0)]
    );
}

#[test]
fn test_muted_end_still_terminates() {
    let document = GraphDocument::new(
        vec![start("s"), script_node("a", "a()"), end("e").muted(true)],
        vec![edge("s", "a"), edge("a", "e")],
    );
    assert_eq!(
        kaiwa::compile(&document),
        vec![script_cmd(0, "a()"), Command::end(0)]
    );
}

#[test]
fn test_muting_start_is_a_no_op() {
    let build = |muted: bool| {
        GraphDocument::new(
            vec![start("s").muted(muted), script_node("a", "a()")],
            vec![edge("s", "a")],
        )
    };
    assert_eq!(kaiwa::compile(&build(true)), kaiwa::compile(&build(false)));
}

#[test]
fn test_muting_preserves_nesting() {
    let document = GraphDocument::new(
        vec![
            start("s"),
            condition_node("c", Condition::switch(1, true)),
            script_node("quiet", "quiet()").muted(true),
            script_node("after", "after()"),
        ],
        vec![
            edge("s", "c"),
            handle_edge("c", "quiet", "true"),
            edge("quiet", "after"),
        ],
    );
    let commands = kaiwa::compile(&document);
    assert!(commands.contains(&script_cmd(1, "after()")));
    assert!(!commands.iter().any(|c| *c == script_cmd(1, "quiet()")));
}

#[test]
fn test_chain_of_muted_nodes_is_skipped() {
    let document = GraphDocument::new(
        vec![
            start("s"),
            script_node("m1", "m1()").muted(true),
            condition_node("m2", Condition::switch(1, true)).muted(true),
            script_node("last", "last()"),
        ],
        vec![
            edge("s", "m1"),
            edge("m1", "m2"),
            handle_edge("m2", "last", "true"),
        ],
    );
    assert_eq!(
        kaiwa::compile(&document),
        vec![script_cmd(0, "last()"), Command::end(0)]
    );
}
