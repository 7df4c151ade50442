use std::fmt::{Display, Formatter};

use crate::Position;

use super::arguments::ArgumentList;

/// Binary operators, loosest binding first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Or => "or",
            BinaryOp::And => "and",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The payload of an expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    // Literals
    Boolean(bool),
    Identifier(String),
    Number(i64),
    String(String),
    Array(Vec<Node>),

    /// No expression at this position, e.g. an empty argument list.
    Empty,

    // Operations
    Not(Box<Node>),
    /// Prefix `-`
    Negate(Box<Node>),
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Assignment {
        target: Box<Node>,
        value: Box<Node>,
    },

    // Calls
    Call {
        callee: Box<Node>,
        args: ArgumentList,
    },
    MethodCall {
        object: Box<Node>,
        method: String,
        args: ArgumentList,
    },
}

/// An expression together with the position it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub position: Position,
}

impl Node {
    pub fn new(kind: NodeKind, position: Position) -> Self {
        Node { kind, position }
    }

    pub fn empty() -> Self {
        Node::new(NodeKind::Empty, Position::null())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, NodeKind::Empty)
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// The name of a plain identifier node.
    pub fn as_identifier(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Calls `visitor` on this node and every node below it, parents first.
    pub fn visit(&self, visitor: &mut dyn FnMut(&Node)) {
        visitor(self);

        match &self.kind {
            NodeKind::Boolean(_)
            | NodeKind::Identifier(_)
            | NodeKind::Number(_)
            | NodeKind::String(_)
            | NodeKind::Empty => {}
            NodeKind::Array(elements) => {
                for element in elements {
                    element.visit(visitor);
                }
            }
            NodeKind::Not(operand) | NodeKind::Negate(operand) => operand.visit(visitor),
            NodeKind::Binary { left, right, .. } => {
                left.visit(visitor);
                right.visit(visitor);
            }
            NodeKind::Assignment { target, value } => {
                target.visit(visitor);
                value.visit(visitor);
            }
            NodeKind::Call { callee, args } => {
                callee.visit(visitor);
                args.visit(visitor);
            }
            NodeKind::MethodCall { object, args, .. } => {
                object.visit(visitor);
                args.visit(visitor);
            }
        }
    }

    /// The argument list of a call or method call.
    pub fn arguments(&self) -> Option<&ArgumentList> {
        match &self.kind {
            NodeKind::Call { args, .. } | NodeKind::MethodCall { args, .. } => Some(args),
            _ => None,
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            NodeKind::Boolean(value) => write!(f, "{}", value),
            NodeKind::Identifier(name) => write!(f, "{}", name),
            NodeKind::Number(value) => write!(f, "{}", value),
            NodeKind::String(value) if value.contains('\n') || value.contains('\'') => {
                write!(f, "'''{}'''", value)
            }
            NodeKind::String(value) => write!(f, "'{}'", value),
            NodeKind::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            NodeKind::Empty => Ok(()),
            NodeKind::Not(operand) => write!(f, "(not {})", Operand(operand)),
            NodeKind::Negate(operand) => write!(f, "(-{})", Operand(operand)),
            NodeKind::Binary { op, left, right } => {
                write!(f, "({} {} {})", Operand(left), op, Operand(right))
            }
            NodeKind::Assignment { target, value } => {
                write!(f, "{} = {}", Operand(target), value)
            }
            NodeKind::Call { callee, args } => write!(f, "{}({})", Operand(callee), args),
            NodeKind::MethodCall {
                object,
                method,
                args,
            } => write!(f, "{}.{}({})", Operand(object), method, args),
        }
    }
}

/// A node printed inside another expression. Assignments bind loosest of
/// all, so they are wrapped in parentheses there.
struct Operand<'a>(&'a Node);

impl Display for Operand<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0.kind {
            NodeKind::Assignment { .. } => write!(f, "({})", self.0),
            _ => write!(f, "{}", self.0),
        }
    }
}
