// Statement rules shared by the global pass and the scope walker.

use super::symtab::{Slot, SymbolTable, Variable};
use super::{AssignmentError, ConditionalError, DeclarationError, MethodError, ReviewResult};
use crate::parser::{AssignItem, Call, ConditionHeader, Declaration};
use crate::types::{assignable, classify, ValueKind, VarType};

/// Where names are looked up and declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Region {
    /// Global pass: only the global table exists.
    Global,
    /// Inside a method body: innermost frame outwards, then globals.
    Local,
}

fn resolve<'t>(table: &'t SymbolTable, region: Region, name: &str) -> Option<(Slot, &'t Variable)> {
    match region {
        Region::Global => table.resolve_global(name),
        Region::Local => table.resolve_lexical(name),
    }
}

/// Check that `token` may be stored in `target` of type `ty`.
///
/// Literals go straight to the lattice. Identifiers must resolve, must hold a
/// value, and their declared type must then fit.
pub(crate) fn review_value(
    table: &SymbolTable,
    region: Region,
    target: &str,
    ty: VarType,
    token: &str,
) -> ReviewResult<()> {
    let kind = classify(token).ok_or_else(|| AssignmentError::InvalidValue {
        target: target.to_string(),
        value: token.to_string(),
    })?;
    let found = match kind {
        ValueKind::Identifier => {
            let (_, source) = resolve(table, region, token)
                .ok_or_else(|| AssignmentError::UndeclaredReference { name: token.to_string() })?;
            if !source.has_value {
                return Err(AssignmentError::UnassignedReference { name: token.to_string() }.into());
            }
            ValueKind::from(source.ty)
        }
        literal => literal,
    };
    if !assignable(ty, found) {
        return Err(AssignmentError::IncompatibleType {
            target: target.to_string(),
            expected: ty,
            found: found.to_string(),
        }
        .into());
    }
    Ok(())
}

pub(crate) fn review_declaration(table: &mut SymbolTable, region: Region, decl: &Declaration<'_>) -> ReviewResult<()> {
    for item in &decl.items {
        let clash = match region {
            Region::Global => table.resolve_global(item.name).is_some(),
            Region::Local => table.is_declared_here(item.name),
        };
        if clash {
            return Err(DeclarationError::Duplicate { name: item.name.to_string() }.into());
        }
        let mut var = Variable::new(item.name, decl.ty, decl.is_final);
        match item.value {
            Some(value) if value == item.name => {
                return Err(DeclarationError::SelfInitialized { name: item.name.to_string() }.into());
            }
            Some(value) => {
                review_value(table, region, item.name, decl.ty, value)?;
                var.has_value = true;
            }
            None if decl.is_final => {
                return Err(DeclarationError::UninitializedFinal { name: item.name.to_string() }.into());
            }
            None => {}
        }
        match region {
            Region::Global => table.declare_global(var)?,
            Region::Local => table.declare_local(var)?,
        };
    }
    Ok(())
}

pub(crate) fn review_assignment(table: &mut SymbolTable, region: Region, items: &[AssignItem<'_>]) -> ReviewResult<()> {
    for item in items {
        let (slot, target) = resolve(table, region, item.target)
            .ok_or_else(|| AssignmentError::UndeclaredTarget { name: item.target.to_string() })?;
        if target.is_final {
            return Err(AssignmentError::FinalTarget { name: item.target.to_string() }.into());
        }
        let ty = target.ty;
        review_value(table, region, item.target, ty, item.value)?;
        table.mark_assigned(slot);
    }
    Ok(())
}

/// Every variable operand of a condition must be declared, assigned, and
/// of a boolean-compatible type.
pub(crate) fn review_condition(table: &SymbolTable, header: &ConditionHeader<'_>) -> ReviewResult<()> {
    for name in header.variables()? {
        let (_, var) = table
            .resolve_lexical(name)
            .ok_or_else(|| ConditionalError::Undeclared { name: name.to_string() })?;
        if !var.has_value {
            return Err(ConditionalError::Unassigned { name: name.to_string() }.into());
        }
        if !var.ty.is_condition_type() {
            return Err(ConditionalError::InvalidType { name: name.to_string(), found: var.ty }.into());
        }
    }
    Ok(())
}

/// Bind call arguments to parameters positionally, with the same rules as
/// assignment.
pub(crate) fn review_call(table: &SymbolTable, call: &Call<'_>) -> ReviewResult<()> {
    let method = table
        .method(call.name)
        .ok_or_else(|| MethodError::Undeclared { name: call.name.to_string() })?;
    if method.arity() != call.args.len() {
        return Err(MethodError::ArgumentCount {
            name: method.name.clone(),
            expected: method.arity(),
            found: call.args.len(),
        }
        .into());
    }
    for (param, arg) in method.params.iter().zip(&call.args) {
        review_value(table, Region::Local, &param.name, param.ty, arg)?;
    }
    Ok(())
}
