use super::CompilerOptions;
use super::menu;
use crate::command::Command;
use crate::graph::{
    FALSE_HANDLE, GraphIndex, Node, NodeKind, TRUE_HANDLE, choice_handle,
};
use ahash::AHashSet;

/// A pending unit of emission.
///
/// Work is scheduled onto a stack in reverse, so popping yields exactly the order a
/// recursive depth-first walk would produce, without growing the call stack on long
/// chains.
pub(super) enum Work<'a> {
    Visit { node_id: &'a str, indent: u32 },
    Emit(Command),
}

impl<'a> Work<'a> {
    /// A visit of `target` at `indent`, or nothing for an unconnected output.
    pub(super) fn visit(target: Option<&'a str>, indent: u32) -> Option<Self> {
        target.map(|node_id| Work::Visit { node_id, indent })
    }
}

/// Per-run state of the depth-first command emitter. Never reused across compilations.
pub(super) struct Emitter<'a, 'i> {
    index: &'i GraphIndex<'a>,
    options: &'i CompilerOptions,
    commands: Vec<Command>,
    stack: Vec<Work<'a>>,
    visited: AHashSet<&'a str>,
    needs_label: AHashSet<&'a str>,
    labeled: AHashSet<&'a str>,
    /// Where each node's body begins, as (node, position, indent), in visit order.
    entries: Vec<(&'a str, usize, u32)>,
}

impl<'a, 'i> Emitter<'a, 'i> {
    pub(super) fn new(index: &'i GraphIndex<'a>, options: &'i CompilerOptions) -> Self {
        Self {
            index,
            options,
            commands: Vec::new(),
            stack: Vec::new(),
            visited: AHashSet::new(),
            needs_label: AHashSet::new(),
            labeled: AHashSet::new(),
            entries: Vec::new(),
        }
    }

    /// Emits the whole program reachable from the Start node.
    /// Without a Start node the result is empty.
    pub(super) fn run(mut self) -> Vec<Command> {
        let Some(start) = self.index.start() else {
            tracing::debug!("graph has no start node, nothing to compile");
            return Vec::new();
        };

        self.schedule(Work::visit(self.index.first_target(&start.id), 0));
        while let Some(work) = self.stack.pop() {
            match work {
                Work::Visit { node_id, indent } => self.visit(node_id, indent),
                Work::Emit(command) => self.commands.push(command),
            }
        }

        self.place_missing_labels();
        self.commands.push(Command::end(0));
        self.commands
    }

    fn schedule(&mut self, plan: impl IntoIterator<Item = Work<'a>>) {
        let plan: Vec<_> = plan.into_iter().collect();
        self.stack.extend(plan.into_iter().rev());
    }

    fn visit(&mut self, node_id: &'a str, indent: u32) {
        let Some(node) = self.index.node(node_id) else {
            tracing::debug!(node_id, "edge targets a missing node, treating it as a dead end");
            return;
        };
        let convergence = self.index.is_convergence(node_id);

        if self.visited.contains(node_id) {
            // A converging branch inside a block jumps to the shared tail. Anything
            // else reaching a visited node is a back-edge and its target needs a label.
            if !(convergence && indent > 0) {
                self.needs_label.insert(node_id);
            }
            self.commands.push(Command::jump_to_label(indent, node_id));
            return;
        }

        self.visited.insert(node_id);
        self.entries.push((node_id, self.commands.len(), indent));
        if convergence {
            self.commands.push(Command::label(indent, node_id));
            self.labeled.insert(node_id);
            self.needs_label.insert(node_id);
        }

        if node.muted && !matches!(node.kind, NodeKind::Start) {
            let bypass = self.bypass_target(node);
            tracing::trace!(node_id, ?bypass, "bypassing muted node");
            self.schedule(Work::visit(bypass, indent));
            return;
        }

        match &node.kind {
            NodeKind::Start => {
                self.schedule(Work::visit(self.index.first_target(node_id), indent));
            }
            NodeKind::Action(actions) => {
                for action in actions {
                    self.commands.extend(action.lower(indent));
                }
                self.schedule(Work::visit(self.index.first_target(node_id), indent));
            }
            NodeKind::Condition(condition) => {
                self.commands
                    .push(Command::conditional_branch(indent, condition.to_script()));
                let when_true = self.index.target_for_handle(node_id, TRUE_HANDLE);
                let when_false = self.index.target_for_handle(node_id, FALSE_HANDLE);
                let plan = [
                    Work::visit(when_true, indent + 1),
                    Some(Work::Emit(Command::end(indent + 1))),
                    Some(Work::Emit(Command::conditional_else(indent))),
                    Work::visit(when_false, indent + 1),
                    Some(Work::Emit(Command::end(indent + 1))),
                    Some(Work::Emit(Command::conditional_end(indent))),
                ];
                self.schedule(plan.into_iter().flatten());
            }
            NodeKind::Menu(menu_node) => {
                let plan = menu::lower_menu(self.index, self.options, node_id, menu_node, indent);
                self.schedule(plan);
            }
            NodeKind::End | NodeKind::Group | NodeKind::Comment => {}
        }
    }

    /// The single edge a muted node is collapsed onto. Muting never changes nesting.
    fn bypass_target(&self, node: &'a Node) -> Option<&'a str> {
        let id = node.id.as_str();
        match &node.kind {
            NodeKind::Condition(_) => self
                .index
                .target_for_handle(id, TRUE_HANDLE)
                .or_else(|| self.index.first_target(id)),
            NodeKind::Menu(_) => self
                .index
                .target_for_handle(id, &choice_handle(0))
                .or_else(|| self.index.first_target(id)),
            NodeKind::Action(_) | NodeKind::End => self.index.first_target(id),
            NodeKind::Start | NodeKind::Group | NodeKind::Comment => None,
        }
    }

    /// Gives every jump target that is not a convergence node a label at the start of its body.
    fn place_missing_labels(&mut self) {
        let mut missing: Vec<_> = self
            .entries
            .iter()
            .filter(|(id, _, _)| self.needs_label.contains(id) && !self.labeled.contains(id))
            .copied()
            .collect();
        // Insert back to front so earlier positions stay valid.
        missing.sort_by(|a, b| b.1.cmp(&a.1));
        for (node_id, position, indent) in missing {
            tracing::debug!(node_id, position, "placing label for back-edge target");
            self.commands
                .insert(position, Command::label(indent, node_id));
        }
    }
}
