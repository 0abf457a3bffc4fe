/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree the parser builds
///
/// Submodules:
/// - ast: Statement/expression sum types and the program root
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
///
/// Every node renders a canonical source form through `Display`.
pub mod ast;
pub mod expressions;
pub mod statements;
