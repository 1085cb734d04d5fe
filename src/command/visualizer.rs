use super::Command;
use itertools::Itertools;
use std::fmt::Write;

/// Formats a command list into a human-readable, indented listing for debugging.
pub fn visualize_commands(commands: &[Command], name: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(
        &mut output,
        "======== EVENT COMMANDS for: {} ({} commands) ========",
        name,
        commands.len()
    );

    for (i, command) in commands.iter().enumerate() {
        let _ = writeln!(&mut output, "{}", format_command(i, command));
    }

    let _ = writeln!(&mut output, "================ END OF LIST ================");
    output
}

/// Formats a single command as `0007: [  2]   111 ConditionalBranch [12, "..."]`,
/// with the body shifted right by its indent.
pub fn format_command(position: usize, command: &Command) -> String {
    let params = if command.parameters.is_empty() {
        String::new()
    } else {
        format!(" [{}]", command.parameters.iter().join(", "))
    };
    format!(
        "{:04}: [{:>3}] {}{:>3} {}{}",
        position,
        command.indent,
        "  ".repeat(command.indent as usize),
        command.code(),
        command.opcode,
        params
    )
}
