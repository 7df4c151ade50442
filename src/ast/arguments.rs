use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
};

use crate::Position;

use super::ast::Node;

/// The arguments of a call: positional arguments in source order plus
/// keyword arguments by name.
///
/// Keyword arguments must not be followed by positional ones. Lists are
/// assembled from the last argument backwards, so recording a keyword
/// argument while positional arguments are already present means a
/// positional argument came after it. The list is still built; the
/// violation is only flagged for later checks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgumentList {
    pub position: Position,
    arguments: Vec<Node>,
    kwargs: BTreeMap<String, Node>,
    order_error: bool,
}

impl ArgumentList {
    pub fn new(position: Position) -> Self {
        ArgumentList {
            position,
            ..Default::default()
        }
    }

    pub fn prepend(&mut self, argument: Node) {
        self.arguments.insert(0, argument);
    }

    /// Records a keyword argument, replacing any earlier value for `name`.
    pub fn set_kwarg(&mut self, name: String, value: Node) {
        if self.num_args() > 0 {
            self.order_error = true;
        }
        self.kwargs.insert(name, value);
    }

    pub fn arguments(&self) -> &[Node] {
        &self.arguments
    }

    pub fn kwargs(&self) -> &BTreeMap<String, Node> {
        &self.kwargs
    }

    pub fn get_kwarg(&self, name: &str) -> Option<&Node> {
        self.kwargs.get(name)
    }

    pub fn num_args(&self) -> usize {
        self.arguments.len()
    }

    pub fn num_kwargs(&self) -> usize {
        self.kwargs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty() && self.kwargs.is_empty()
    }

    /// Whether a keyword argument is followed by a positional one.
    pub fn incorrect_order(&self) -> bool {
        self.order_error
    }

    pub(crate) fn visit(&self, visitor: &mut dyn FnMut(&Node)) {
        for argument in &self.arguments {
            argument.visit(visitor);
        }
        for value in self.kwargs.values() {
            value.visit(visitor);
        }
    }
}

impl Display for ArgumentList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let positional = self.arguments.iter().map(|argument| argument.to_string());
        let keyword = self
            .kwargs
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value));

        write!(f, "{}", positional.chain(keyword).collect::<Vec<_>>().join(", "))
    }
}
