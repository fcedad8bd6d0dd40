//! Compile-time scopes.
//!
//! Scopes live in an arena owned by [`ScopeManager`] and refer to their parent
//! by [`ScopeId`]. A scope is never freed during a run: exiting a scope only
//! moves the cursor back to the parent, so class scopes saved for member
//! lookup and every scope listed in the dump stay valid.

mod dump;

use lum_ir::TypeInfo;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::SymbolInfo;

pub use dump::DumpError;

/// Handle to a scope in the [`ScopeManager`] arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The global scope, created with the manager.
    pub const GLOBAL: ScopeId = ScopeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Returned when a name is already declared in the target scope.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{name}' is already declared in scope '{scope}'")]
pub struct DuplicateSymbol {
    pub name: String,
    pub scope: String,
}

/// One lexical scope.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    symbols: FxHashMap<String, SymbolInfo>,
    parent: Option<ScopeId>,
    name: String,
    /// Running sum of symbol sizes; the next symbol's offset.
    next_offset: u32,
}

impl SymbolTable {
    fn new(parent: Option<ScopeId>, name: impl Into<String>) -> Self {
        SymbolTable {
            symbols: FxHashMap::default(),
            parent,
            name: name.into(),
            next_offset: 0,
        }
    }

    /// Insert a symbol, assigning its offset. Rejects a name already present.
    pub fn add_symbol(&mut self, mut sym: SymbolInfo) -> Result<(), DuplicateSymbol> {
        if self.symbols.contains_key(&sym.name) {
            return Err(DuplicateSymbol {
                name: sym.name,
                scope: self.name.clone(),
            });
        }
        sym.offset = self.next_offset;
        self.next_offset = self.next_offset.saturating_add(sym.size);
        self.symbols.insert(sym.name.clone(), sym);
        Ok(())
    }

    /// Look up a name in this scope only.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&SymbolInfo> {
        self.symbols.get(name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut SymbolInfo> {
        self.symbols.get_mut(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols ordered by name.
    pub fn sorted_symbols(&self) -> Vec<&SymbolInfo> {
        let mut symbols: Vec<_> = self.symbols.values().collect();
        symbols.sort_by(|a, b| a.name.cmp(&b.name));
        symbols
    }
}

/// All compile-time scopes of one analysis run.
#[derive(Clone, Debug)]
pub struct ScopeManager {
    /// Every scope ever created, in creation order. Index 0 is the global scope.
    scopes: Vec<SymbolTable>,
    current: ScopeId,
    /// Class name -> the scope its body was analyzed in.
    class_scopes: FxHashMap<String, ScopeId>,
}

impl ScopeManager {
    /// Create a manager holding only the global scope, which is current.
    pub fn new() -> Self {
        ScopeManager {
            scopes: vec![SymbolTable::new(None, "Global")],
            current: ScopeId::GLOBAL,
            class_scopes: FxHashMap::default(),
        }
    }

    /// Open a child of the current scope and make it current.
    pub fn enter_scope(&mut self, name: impl Into<String>) -> ScopeId {
        let name = name.into();
        trace!(scope = %name, parent = ?self.current, "enter scope");
        let id = ScopeId(u32::try_from(self.scopes.len()).unwrap_or(u32::MAX));
        self.scopes.push(SymbolTable::new(Some(self.current), name));
        self.current = id;
        id
    }

    /// Return to the parent of the current scope. No-op at the root.
    pub fn exit_scope(&mut self) {
        if let Some(parent) = self.current_table().parent {
            trace!(scope = %self.current_table().name, "exit scope");
            self.current = parent;
        }
    }

    /// Declare a symbol in the current scope only.
    pub fn add_symbol(&mut self, sym: SymbolInfo) -> Result<(), DuplicateSymbol> {
        let result = self.current_table_mut().add_symbol(sym);
        if let Err(err) = &result {
            debug!(%err, "symbol rejected");
        }
        result
    }

    /// Nearest binding of `name`, from the current scope up to the global scope.
    pub fn lookup(&self, name: &str) -> Option<&SymbolInfo> {
        self.ancestors(self.current)
            .find_map(|id| self.scopes[id.index()].get(name))
    }

    /// Binding of `name` in the current scope only.
    pub fn lookup_current(&self, name: &str) -> Option<&SymbolInfo> {
        self.current_table().get(name)
    }

    /// Remember the current scope as the body scope of `class_name`.
    pub fn save_class_scope(&mut self, class_name: impl Into<String>) {
        self.class_scopes.insert(class_name.into(), self.current);
    }

    /// Whether `name` has a saved class scope.
    pub fn is_class(&self, name: &str) -> bool {
        self.class_scopes.contains_key(name)
    }

    /// Look up `member` in the saved scope of `class_name` only.
    ///
    /// The class scope's lexical ancestors are never searched, and there is
    /// no inheritance.
    pub fn lookup_in_class(&self, class_name: &str, member: &str) -> Option<&SymbolInfo> {
        let id = self.class_scopes.get(class_name)?;
        self.scopes[id.index()].get(member)
    }

    /// Set the parameter types of a function declared in the current scope.
    ///
    /// Returns `false` if no such symbol exists there.
    pub fn update_function_params(&mut self, name: &str, params: Vec<TypeInfo>) -> bool {
        match self.current_table_mut().get_mut(name) {
            Some(sym) => {
                sym.param_types = params;
                true
            }
            None => false,
        }
    }

    /// Record a last-known value on the nearest binding of `name`.
    ///
    /// Returns `false` if `name` is not visible.
    pub fn set_symbol_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(id) = self
            .ancestors(self.current)
            .find(|id| self.scopes[id.index()].get(name).is_some())
        else {
            return false;
        };
        match self.scopes[id.index()].get_mut(name) {
            Some(sym) => {
                sym.value = Some(value.into());
                true
            }
            None => false,
        }
    }

    pub fn current_scope(&self) -> ScopeId {
        self.current
    }

    pub fn global_scope(&self) -> ScopeId {
        ScopeId::GLOBAL
    }

    /// The table behind a scope id.
    ///
    /// Ids are only ever created by this manager, so they are always in range.
    pub fn scope(&self, id: ScopeId) -> &SymbolTable {
        &self.scopes[id.index()]
    }

    /// Every scope ever created, in creation order.
    pub fn scopes(&self) -> impl Iterator<Item = (ScopeId, &SymbolTable)> {
        (0u32..)
            .map(ScopeId)
            .zip(self.scopes.iter())
    }

    /// Scope ids from `start` up to the global scope.
    fn ancestors(&self, start: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(start), |id| self.scopes[id.index()].parent)
    }

    fn current_table(&self) -> &SymbolTable {
        &self.scopes[self.current.index()]
    }

    fn current_table_mut(&mut self) -> &mut SymbolTable {
        &mut self.scopes[self.current.index()]
    }
}

impl Default for ScopeManager {
    fn default() -> Self {
        Self::new()
    }
}
