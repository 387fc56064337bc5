use crate::parser::Cursor;
use crate::types::VarType;

mod globals;
mod scopes;
mod statements;
pub mod symtab;

pub use symtab::{FrameGuard, Method, Slot, SymbolTable, Variable};

pub type ReviewResult<T> = Result<T, CheckError>;

/// First fatal problem found in a source text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("variable declaration error: {0}")]
    Declaration(#[from] DeclarationError),
    #[error("variable assignment error: {0}")]
    Assignment(#[from] AssignmentError),
    #[error("conditional error: {0}")]
    Conditional(#[from] ConditionalError),
    #[error("method definition error: {0}")]
    Method(#[from] MethodError),
    #[error("return error: {0}")]
    Return(#[from] ReturnError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("line in global scope is none of the valid forms: `{0}`")]
    InvalidGlobalLine(String),
    #[error("line in local scope is none of the valid forms: `{0}`")]
    InvalidLocalLine(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("variable '{name}' is already declared in this scope")]
    Duplicate { name: String },
    #[error("final variable '{name}' must be initialized where it is declared")]
    UninitializedFinal { name: String },
    #[error("variable '{name}' is initialized with itself")]
    SelfInitialized { name: String },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("assignment to undeclared variable '{name}'")]
    UndeclaredTarget { name: String },
    #[error("cannot assign to final variable '{name}'")]
    FinalTarget { name: String },
    #[error("'{value}' is not a valid value for '{target}'")]
    InvalidValue { target: String, value: String },
    #[error("cannot assign {found} to '{target}' of type {expected}")]
    IncompatibleType { target: String, expected: VarType, found: String },
    #[error("reference to undeclared variable '{name}'")]
    UndeclaredReference { name: String },
    #[error("reference to unassigned variable '{name}'")]
    UnassignedReference { name: String },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionalError {
    #[error("condition is empty")]
    Empty,
    #[error("boolean operator at the start or end of condition `{condition}`")]
    DanglingOperator { condition: String },
    #[error("`{operand}` is not a valid condition operand")]
    Malformed { operand: String },
    #[error("condition refers to undeclared variable '{name}'")]
    Undeclared { name: String },
    #[error("condition refers to unassigned variable '{name}'")]
    Unassigned { name: String },
    #[error("condition variable '{name}' has type {found}; expected boolean, int or double")]
    InvalidType { name: String, found: VarType },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MethodError {
    #[error("method '{name}' is already defined")]
    Duplicate { name: String },
    #[error("method '{method}' declares parameter '{name}' more than once")]
    DuplicateParameter { method: String, name: String },
    #[error("call to undeclared method '{name}'")]
    Undeclared { name: String },
    #[error("method '{name}' takes {expected} argument(s); found {found}")]
    ArgumentCount { name: String, expected: usize, found: usize },
    #[error("body of method '{name}' is not closed before end of input")]
    UnbalancedBraces { name: String },
    #[error("scope opened by `{opener}` is not closed before end of input")]
    UnclosedScope { opener: String },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ReturnError {
    #[error("method '{method}' does not end with a return statement")]
    MissingReturn { method: String },
}

/// Run both passes over the lines behind `cursor`.
///
/// Pass one records every global and every method signature; pass two
/// rewinds and walks each method body. The second pass never runs when the
/// first one fails. On error the cursor is left on the offending line.
pub fn review(cursor: &mut Cursor<'_>) -> ReviewResult<SymbolTable> {
    let mut table = SymbolTable::new();
    log::debug!("review start: lines={}", cursor.len());
    globals::review_globals(cursor, &mut table)?;
    log::debug!(
        "global pass done: globals={} methods={}",
        table.global_count(),
        table.method_count()
    );
    cursor.rewind();
    scopes::review_method_bodies(cursor, &mut table)?;
    log::debug!("review end: ok");
    Ok(table)
}
