/// The binary-operator semantics: arithmetic, concatenation, comparison,
/// and equality over runtime values.
pub mod binary;
/// The interpreter itself: statement execution, expression evaluation, and
/// scope management.
pub mod core;
/// The unary-operator semantics: numeric negation and logical not.
pub mod unary;
