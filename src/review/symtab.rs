//! Symbol table: globals, methods and a stack of local frames.
//!
//! Globals live apart from the frame stack because they are never rolled
//! back or discarded during a run. Local frames are pushed per scope and
//! popped when the scope closes; see [`SymbolTable::enter_frame`].

use super::{DeclarationError, MethodError};
use crate::types::VarType;
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub ty: VarType,
    pub is_final: bool,
    /// Whether a reference may rely on this variable holding a value.
    pub has_value: bool,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: VarType, is_final: bool) -> Self {
        Self { name: name.into(), ty, is_final, has_value: false }
    }

    pub fn with_value(mut self) -> Self {
        self.has_value = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    /// Parameters in declaration order; all of them count as assigned.
    pub params: Vec<Variable>,
}

impl Method {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Address of a variable inside the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Global(usize),
    Local { frame: usize, index: usize },
}

#[derive(Debug, Default)]
struct Frame {
    vars: Vec<Variable>,
    by_name: HashMap<String, usize>,
    // Variables that gained a value while this frame was innermost.
    newly_assigned: Vec<Slot>,
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    globals: Vec<Variable>,
    global_names: HashMap<String, usize>,
    methods: HashMap<String, Method>,
    frames: Vec<Frame>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare_global(&mut self, var: Variable) -> Result<Slot, DeclarationError> {
        if self.global_names.contains_key(&var.name) {
            return Err(DeclarationError::Duplicate { name: var.name });
        }
        let index = self.globals.len();
        self.global_names.insert(var.name.clone(), index);
        self.globals.push(var);
        Ok(Slot::Global(index))
    }

    pub fn declare_method(&mut self, method: Method) -> Result<(), MethodError> {
        if self.methods.contains_key(&method.name) {
            return Err(MethodError::Duplicate { name: method.name });
        }
        self.methods.insert(method.name.clone(), method);
        Ok(())
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    pub fn push_frame(&mut self) {
        self.frames.push(Frame::default());
    }

    /// Undo every "has a value" flag first set while the innermost frame was
    /// open, then discard the frame.
    pub fn pop_frame(&mut self) {
        let Some(frame) = self.frames.last() else { return };
        let rollback = frame.newly_assigned.clone();
        for slot in rollback {
            if let Some(var) = self.slot_mut(slot) {
                var.has_value = false;
            }
        }
        self.frames.pop();
    }

    /// Push a frame that is popped again when the guard goes out of scope,
    /// including on early return through `?`.
    pub fn enter_frame(&mut self) -> FrameGuard<'_> {
        self.push_frame();
        FrameGuard { table: self }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Declare into the innermost frame. Only that frame is checked for a
    /// clash, so outer locals and globals may be shadowed. With no open frame
    /// this behaves like [`declare_global`](Self::declare_global).
    pub fn declare_local(&mut self, var: Variable) -> Result<Slot, DeclarationError> {
        let frame_index = match self.frames.len() {
            0 => return self.declare_global(var),
            n => n - 1,
        };
        let frame = &mut self.frames[frame_index];
        if frame.by_name.contains_key(&var.name) {
            return Err(DeclarationError::Duplicate { name: var.name });
        }
        let index = frame.vars.len();
        frame.by_name.insert(var.name.clone(), index);
        frame.vars.push(var);
        Ok(Slot::Local { frame: frame_index, index })
    }

    /// Whether `name` is taken where the next local declaration would go.
    pub fn is_declared_here(&self, name: &str) -> bool {
        match self.frames.last() {
            Some(frame) => frame.by_name.contains_key(name),
            None => self.global_names.contains_key(name),
        }
    }

    /// Innermost frame outwards, then the globals.
    pub fn resolve_lexical(&self, name: &str) -> Option<(Slot, &Variable)> {
        for (frame_index, frame) in self.frames.iter().enumerate().rev() {
            if let Some(&index) = frame.by_name.get(name) {
                return Some((Slot::Local { frame: frame_index, index }, &frame.vars[index]));
            }
        }
        self.resolve_global(name)
    }

    pub fn resolve_global(&self, name: &str) -> Option<(Slot, &Variable)> {
        let index = *self.global_names.get(name)?;
        Some((Slot::Global(index), &self.globals[index]))
    }

    pub fn variable(&self, slot: Slot) -> Option<&Variable> {
        match slot {
            Slot::Global(index) => self.globals.get(index),
            Slot::Local { frame, index } => self.frames.get(frame)?.vars.get(index),
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> Option<&mut Variable> {
        match slot {
            Slot::Global(index) => self.globals.get_mut(index),
            Slot::Local { frame, index } => self.frames.get_mut(frame)?.vars.get_mut(index),
        }
    }

    /// Mark a variable as holding a value. If it had none before and a frame
    /// is open, the innermost frame remembers it for rollback.
    pub fn mark_assigned(&mut self, slot: Slot) {
        let newly = match self.slot_mut(slot) {
            Some(var) if !var.has_value => {
                var.has_value = true;
                true
            }
            _ => false,
        };
        if newly {
            if let Some(frame) = self.frames.last_mut() {
                frame.newly_assigned.push(slot);
            }
        }
    }

    pub fn global_count(&self) -> usize {
        self.globals.len()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    pub fn globals(&self) -> impl Iterator<Item = &Variable> {
        self.globals.iter()
    }
}

/// A pushed frame; dereferences to the table it was pushed on.
pub struct FrameGuard<'t> {
    table: &'t mut SymbolTable,
}

impl Deref for FrameGuard<'_> {
    type Target = SymbolTable;

    fn deref(&self) -> &SymbolTable {
        self.table
    }
}

impl DerefMut for FrameGuard<'_> {
    fn deref_mut(&mut self) -> &mut SymbolTable {
        self.table
    }
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.table.pop_frame();
    }
}
