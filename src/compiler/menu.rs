use super::emitter::Work;
use super::{CompilerOptions, DYNAMIC_CHOICE_VARIABLE};
use crate::command::Command;
use crate::graph::{
    CANCEL_HANDLE, CancelMode, ComparisonOp, Condition, GraphIndex, MenuNode, choice_handle,
};
use std::fmt::Write;

/// Value stored in the scratch variable when a dynamic menu is cancelled.
pub const CANCELLED_CHOICE: i64 = -1;

/// Plans the commands and branch visits of a Menu node at `indent`.
pub(super) fn lower_menu<'a>(
    index: &GraphIndex<'a>,
    options: &CompilerOptions,
    node_id: &'a str,
    menu: &'a MenuNode,
    indent: u32,
) -> Vec<Work<'a>> {
    let mut plan: Vec<Work<'a>> = menu
        .prompt
        .iter()
        .flat_map(|prompt| prompt.lower(indent))
        .map(Work::Emit)
        .collect();

    if menu.is_dynamic() {
        tracing::debug!(node_id, choices = menu.choices.len(), "lowering dynamic menu");
        plan_dynamic(&mut plan, index, options, node_id, menu, indent);
    } else {
        plan_static(&mut plan, index, node_id, menu, indent);
    }
    plan
}

/// Native Show Choices with one branch per choice.
fn plan_static<'a>(
    plan: &mut Vec<Work<'a>>,
    index: &GraphIndex<'a>,
    node_id: &'a str,
    menu: &'a MenuNode,
    indent: u32,
) {
    let texts = menu.choices.iter().map(|c| c.text.clone()).collect();
    plan.push(Work::Emit(Command::show_choices(
        indent,
        texts,
        menu.cancel_mode.code(menu.choices.len()),
        0,
        menu.window_position,
        menu.window_background,
    )));

    for (i, choice) in menu.choices.iter().enumerate() {
        plan.push(Work::Emit(Command::choice_branch(indent, i, &choice.text)));
        plan.extend(Work::visit(
            index.target_for_handle(node_id, &choice_handle(i)),
            indent + 1,
        ));
        plan.push(Work::Emit(Command::end(indent + 1)));
    }

    if menu.cancel_mode == CancelMode::Branch {
        plan.push(Work::Emit(Command::choice_cancel(indent)));
        plan.extend(Work::visit(
            index.target_for_handle(node_id, CANCEL_HANDLE),
            indent + 1,
        ));
        plan.push(Work::Emit(Command::end(indent + 1)));
    }

    plan.push(Work::Emit(Command::choice_block_end(indent)));
}

/// Script-driven choices routed through `DYNAMIC_CHOICE_VARIABLE`.
///
/// The engine's native choice command cannot hide or disable options at runtime, so a
/// script builds the visible list and records the original index of the selection. A
/// fixed table of conditional branches then dispatches on that index.
fn plan_dynamic<'a>(
    plan: &mut Vec<Work<'a>>,
    index: &GraphIndex<'a>,
    options: &CompilerOptions,
    node_id: &'a str,
    menu: &'a MenuNode,
    indent: u32,
) {
    let script = choice_script(menu, &options.disabled_choice_prefix);
    plan.extend(Command::script(indent, &script).into_iter().map(Work::Emit));
    // The script's setChoices call owns the cancel behaviour. The native command only
    // opens the window, so it carries the cancel code of an empty list.
    plan.push(Work::Emit(Command::show_choices(
        indent,
        Vec::new(),
        menu.cancel_mode.code(0),
        0,
        menu.window_position,
        menu.window_background,
    )));

    let mut routes: Vec<(i64, Option<&'a str>)> = (0..menu.choices.len())
        .map(|i| {
            (
                i as i64,
                index.target_for_handle(node_id, &choice_handle(i)),
            )
        })
        .collect();
    if menu.cancel_mode == CancelMode::Branch {
        routes.push((
            CANCELLED_CHOICE,
            index.target_for_handle(node_id, CANCEL_HANDLE),
        ));
    }

    for (selection, target) in routes {
        plan.push(Work::Emit(Command::conditional_branch(
            indent,
            selection_condition(selection).to_script(),
        )));
        plan.extend(Work::visit(target, indent + 1));
        plan.push(Work::Emit(Command::end(indent + 1)));
        plan.push(Work::Emit(Command::conditional_end(indent)));
    }
}

/// The test routing a dynamic menu's selection to one original choice index.
pub fn selection_condition(selection: i64) -> Condition {
    Condition::variable(DYNAMIC_CHOICE_VARIABLE, ComparisonOp::Equal, selection)
}

/// Builds the runtime script of a dynamic menu.
///
/// Hidden choices are skipped, disabled ones get `disabled_prefix`, and `map` keeps the
/// original index of every visible choice for the selection callback.
pub fn choice_script(menu: &MenuNode, disabled_prefix: &str) -> String {
    let mut script = String::new();
    let _ = writeln!(script, "const choices = [];");
    let _ = writeln!(script, "const map = [];");

    for (i, choice) in menu.choices.iter().enumerate() {
        let text = js_string(&choice.text);
        let shown = match &choice.disable_condition {
            Some(condition) => format!(
                "({}) ? {} : {}",
                condition.to_script(),
                js_string(&format!("{}{}", disabled_prefix, choice.text)),
                text
            ),
            None => text,
        };
        let push = format!("choices.push({}); map.push({});", shown, i);
        let _ = match &choice.hide_condition {
            Some(condition) => writeln!(script, "if (!({})) {{ {} }}", condition.to_script(), push),
            None => writeln!(script, "{}", push),
        };
    }

    let cancel = match menu.cancel_mode {
        CancelMode::Disallow => "-1".to_string(),
        CancelMode::Branch => "-2".to_string(),
        CancelMode::LastChoice => "choices.length - 1".to_string(),
    };
    let _ = writeln!(script, "$gameMessage.setChoices(choices, 0, {});", cancel);
    let _ = writeln!(
        script,
        "$gameMessage.setChoicePositionType({});",
        menu.window_position
    );
    let _ = writeln!(
        script,
        "$gameMessage.setChoiceBackground({});",
        menu.window_background
    );
    let _ = write!(
        script,
        "$gameMessage.setChoiceCallback(n => $gameVariables.setValue({}, n >= 0 ? map[n] : {}));",
        DYNAMIC_CHOICE_VARIABLE, CANCELLED_CHOICE
    );
    script
}

/// Quotes `text` as a script string literal.
fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}
