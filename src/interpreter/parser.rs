/// The binary precedence levels: equality, comparison, term, and factor.
pub mod binary;
/// Brace-delimited statement lists.
pub mod block;
/// The token stream, the expression entry points, and assignment.
pub mod core;
/// Declarations, statements, and panic-mode recovery.
pub mod statement;
/// Unary operators and primary (atomic) expressions.
pub mod unary;
