/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Expression nodes, binary operators and the printer
/// - arguments: Positional and keyword call arguments
/// - statements: Statements, `if` chains and code blocks
pub mod arguments;
pub mod ast;
pub mod statements;
