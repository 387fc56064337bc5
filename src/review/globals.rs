use super::statements::{review_assignment, review_declaration, Region};
use super::symtab::{Method, SymbolTable, Variable};
use super::{MethodError, ReviewResult, SyntaxError};
use crate::parser::{classify_line, Cursor, Line, Signature};
use std::collections::HashSet;

/// Pass one: a single forward scan that fills the global variable and method
/// tables. Method bodies are skipped by counting braces, not validated.
pub(crate) fn review_globals(cursor: &mut Cursor<'_>, table: &mut SymbolTable) -> ReviewResult<()> {
    while let Some(text) = cursor.next_line() {
        let line = classify_line(text);
        log::trace!("global {:>4}: {}", cursor.line_number(), line.category());
        match line {
            Line::Blank | Line::Comment => {}
            Line::Declaration(decl) => review_declaration(table, Region::Global, &decl)?,
            Line::Assignment(items) => review_assignment(table, Region::Global, &items)?,
            Line::MethodSignature(sig) => review_method_signature(cursor, table, &sig)?,
            _ => return Err(SyntaxError::InvalidGlobalLine(text.trim().to_string()).into()),
        }
    }
    Ok(())
}

fn review_method_signature(cursor: &mut Cursor<'_>, table: &mut SymbolTable, sig: &Signature<'_>) -> ReviewResult<()> {
    let method = method_from_signature(sig)?;
    if table.method(&method.name).is_some() {
        return Err(MethodError::Duplicate { name: method.name }.into());
    }
    skip_body(cursor, sig.name)?;
    log::debug!("method '{}' registered with {} parameter(s)", method.name, method.arity());
    table.declare_method(method)?;
    Ok(())
}

/// Build the method record for a signature, rejecting repeated parameter names.
pub(crate) fn method_from_signature(sig: &Signature<'_>) -> Result<Method, MethodError> {
    let mut seen = HashSet::new();
    let mut params = Vec::with_capacity(sig.params.len());
    for p in &sig.params {
        if !seen.insert(p.name) {
            return Err(MethodError::DuplicateParameter { method: sig.name.to_string(), name: p.name.to_string() });
        }
        params.push(Variable::new(p.name, p.ty, p.is_final).with_value());
    }
    Ok(Method { name: sig.name.to_string(), params })
}

// Purely textual: braces inside strings, chars or comments are counted too.
// A line holding an opening brace never also counts as a close.
fn skip_body(cursor: &mut Cursor<'_>, name: &str) -> Result<(), MethodError> {
    let mut open = 1usize;
    while let Some(text) = cursor.next_line() {
        if text.contains('{') {
            open += 1;
        } else if text.contains('}') {
            open -= 1;
            if open == 0 {
                return Ok(());
            }
        }
    }
    Err(MethodError::UnbalancedBraces { name: name.to_string() })
}
