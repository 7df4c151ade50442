use std::{
    fmt::{Display, Formatter},
    slice::Iter,
};

use crate::Position;

use super::ast::Node;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(Node),
    If(IfStmt),
}

impl Statement {
    pub fn position(&self) -> Position {
        match self {
            Statement::Expression(node) => node.position,
            Statement::If(if_stmt) => if_stmt.position,
        }
    }

    fn visit(&self, visitor: &mut dyn FnMut(&Node)) {
        match self {
            Statement::Expression(node) => node.visit(visitor),
            Statement::If(if_stmt) => {
                for branch in &if_stmt.branches {
                    branch.condition.visit(visitor);
                    branch.block.visit(visitor);
                }
                if let Some(else_block) = &if_stmt.else_block {
                    else_block.visit(visitor);
                }
            }
        }
    }
}

/// One `if` or `elif` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct IfBranch {
    pub condition: Node,
    pub block: CodeBlock,
    pub position: Position,
}

/// An `if`/`elif`/`else`/`endif` chain.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    /// The `if` clause followed by any `elif` clauses, in source order
    pub branches: Vec<IfBranch>,
    pub else_block: Option<CodeBlock>,
    pub position: Position,
}

impl IfStmt {
    /// Number of branches including the `else` block.
    pub fn branch_count(&self) -> usize {
        self.branches.len() + usize::from(self.else_block.is_some())
    }
}

/// A sequence of statements. The parsed program is the top-level block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeBlock {
    pub statements: Vec<Statement>,
}

impl CodeBlock {
    pub fn new(statements: Vec<Statement>) -> Self {
        CodeBlock { statements }
    }

    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Positions of every argument list in the block, at any depth, that has
    /// a keyword argument followed by a positional one. Sorted by position.
    pub fn argument_order_violations(&self) -> Vec<Position> {
        let mut positions = vec![];

        self.visit(&mut |node: &Node| {
            if let Some(args) = node.arguments() {
                if args.incorrect_order() {
                    positions.push(args.position);
                }
            }
        });

        positions.sort();
        positions
    }

    fn visit(&self, visitor: &mut dyn FnMut(&Node)) {
        for statement in &self.statements {
            statement.visit(visitor);
        }
    }

    fn fmt_indented(&self, f: &mut Formatter<'_>, depth: usize) -> std::fmt::Result {
        for statement in &self.statements {
            fmt_statement(statement, f, depth)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CodeBlock {
    type Item = &'a Statement;
    type IntoIter = Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

fn fmt_statement(statement: &Statement, f: &mut Formatter<'_>, depth: usize) -> std::fmt::Result {
    let indent = "  ".repeat(depth);

    match statement {
        Statement::Expression(node) => writeln!(f, "{}{}", indent, node),
        Statement::If(if_stmt) => {
            for (i, branch) in if_stmt.branches.iter().enumerate() {
                let keyword = if i == 0 { "if" } else { "elif" };
                writeln!(f, "{}{} {}", indent, keyword, branch.condition)?;
                branch.block.fmt_indented(f, depth + 1)?;
            }
            if let Some(else_block) = &if_stmt.else_block {
                writeln!(f, "{}else", indent)?;
                else_block.fmt_indented(f, depth + 1)?;
            }
            writeln!(f, "{}endif", indent)
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fmt_statement(self, f, 0)
    }
}

impl Display for CodeBlock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_indented(f, 0)
    }
}
