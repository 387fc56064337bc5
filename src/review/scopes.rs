//! Pass two: recursive validation of method bodies and the blocks nested in
//! them.
//!
//! Every scope pulls its lines from the one shared [`Cursor`]; a nested
//! block is fully consumed before its parent reads on. Each scope owns one
//! frame on the symbol table for exactly as long as it runs.

use super::globals::method_from_signature;
use super::statements::{review_assignment, review_call, review_condition, review_declaration, Region};
use super::symtab::SymbolTable;
use super::{MethodError, ReturnError, ReviewResult, SyntaxError};
use crate::parser::{classify_line, parse_signature, Cursor, Line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScopeKind {
    Method,
    Conditional,
}

/// Walk the whole source again, validating each method body in turn. Lines
/// outside method bodies were settled by the global pass and are skipped.
pub(crate) fn review_method_bodies(cursor: &mut Cursor<'_>, table: &mut SymbolTable) -> ReviewResult<()> {
    while let Some(text) = cursor.next_line() {
        review_scope(cursor, table, text, ScopeKind::Method)?;
    }
    Ok(())
}

/// Validate the scope opened by `opener` up to and including its closing
/// `}` line.
///
/// For [`ScopeKind::Method`] an opener that is not a method signature is
/// ignored. Method scopes must end with a `return;` as their last effective
/// statement; conditional scopes never need one.
pub(crate) fn review_scope(
    cursor: &mut Cursor<'_>,
    table: &mut SymbolTable,
    opener: &str,
    kind: ScopeKind,
) -> ReviewResult<()> {
    let method_name = match kind {
        ScopeKind::Method => match parse_signature(opener) {
            Some(sig) => Some((sig.name.to_string(), method_from_signature(&sig)?)),
            None => return Ok(()),
        },
        ScopeKind::Conditional => None,
    };

    let mut scope = table.enter_frame();
    if let Some((name, method)) = &method_name {
        log::debug!("checking body of '{}' at line {}", name, cursor.line_number());
        for param in &method.params {
            scope.declare_local(param.clone())?;
        }
    }

    let mut returned = kind == ScopeKind::Conditional;
    loop {
        let Some(text) = cursor.next_line() else {
            return Err(MethodError::UnclosedScope { opener: opener.trim().to_string() }.into());
        };
        let line = classify_line(text);
        log::trace!("scope {:>4} depth {}: {}", cursor.line_number(), scope.depth(), line.category());
        if line == Line::BlockEnd {
            break;
        }
        if line.is_inert() {
            continue;
        }
        returned = kind == ScopeKind::Conditional;
        match line {
            Line::Return => returned = true,
            Line::Declaration(decl) => review_declaration(&mut scope, Region::Local, &decl)?,
            Line::Assignment(items) => review_assignment(&mut scope, Region::Local, &items)?,
            Line::Conditional(header) => {
                review_condition(&scope, &header)?;
                review_scope(cursor, &mut scope, text, ScopeKind::Conditional)?;
            }
            Line::MethodCall(call) => review_call(&scope, &call)?,
            _ => return Err(SyntaxError::InvalidLocalLine(text.trim().to_string()).into()),
        }
    }
    // Dropping the guard rolls back values first given inside this scope and
    // pops its frame.
    drop(scope);

    match method_name {
        Some((name, _)) if !returned => Err(ReturnError::MissingReturn { method: name }.into()),
        _ => Ok(()),
    }
}
