//! Registry of loaded module objects, keyed by module name.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::dict::SharedDict;
use crate::errors::{duplicate_module, ObjectResult};
use crate::module::{ModuleRef, StrictModuleObject};
use crate::types::TypeRef;

/// The loader's module cache.
///
/// Each module name maps to exactly one module object for the lifetime of
/// the table, so every importer of `os` sees the same `ModuleRef`.
#[derive(Default)]
pub struct ModuleTable {
    modules: RwLock<FxHashMap<String, ModuleRef>>,
}

impl ModuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already-created module.
    pub fn insert(&self, module: ModuleRef) -> ObjectResult<()> {
        let mut modules = self.modules.write();
        let name = module.module_name();
        if modules.contains_key(name) {
            return Err(duplicate_module(name));
        }
        tracing::debug!(module = name, "registered module");
        modules.insert(name.to_owned(), module.clone());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<ModuleRef> {
        self.modules.read().get(name).cloned()
    }

    /// Return the module registered under `name`, creating it if absent.
    ///
    /// `dict` only runs when a new module is created.
    pub fn get_or_create(
        &self,
        strict_type: &TypeRef,
        name: &str,
        dict: impl FnOnce() -> Option<SharedDict>,
    ) -> ModuleRef {
        if let Some(existing) = self.get(name) {
            return existing;
        }

        let mut modules = self.modules.write();
        // Another thread may have created it between the two locks.
        if let Some(existing) = modules.get(name) {
            return existing.clone();
        }
        let module = StrictModuleObject::make_strict_module(strict_type.clone(), name, dict());
        tracing::debug!(module = name, "registered module");
        modules.insert(name.to_owned(), module.clone());
        module
    }

    pub fn remove(&self, name: &str) -> Option<ModuleRef> {
        let removed = self.modules.write().remove(name);
        if removed.is_some() {
            tracing::debug!(module = name, "unregistered module");
        }
        removed
    }

    /// Freeze every registered module, returning how many were newly frozen.
    pub fn freeze_all(&self) -> usize {
        self.modules
            .read()
            .values()
            .filter(|module| module.freeze())
            .count()
    }

    pub fn len(&self) -> usize {
        self.modules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.read().is_empty()
    }

    /// Registered module names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modules.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}
