//! Attribute dictionaries.
//!
//! `DictType` keeps bindings in insertion order, the order `dir()` and
//! `__dict__` iteration expose in the analyzed program. Overwriting a key
//! keeps its original position; removing a key shifts later entries down.
//!
//! Objects own their dictionary through `SharedDict`, so a dict handed to
//! a factory stays visible to whoever created it. Freezing a `SharedDict`
//! is one-way and applies to every handle sharing the table.

#![expect(
    clippy::disallowed_types,
    reason = "Arc shares one attribute table between an object and its creator"
)]

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use rustc_hash::FxHashMap;
use strict_ir::Name;

use crate::value::Value;

/// Insertion-ordered map from attribute name to value.
#[derive(Clone, Debug, Default)]
pub struct DictType {
    entries: Vec<(Name, Value)>,
    indices: FxHashMap<Name, usize>,
}

impl DictType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: Name) -> Option<&Value> {
        let index = *self.indices.get(&name)?;
        self.entries.get(index).map(|(_, value)| value)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.indices.contains_key(&name)
    }

    /// Bind `name` to `value`, returning the value it replaced.
    pub fn insert(&mut self, name: Name, value: Value) -> Option<Value> {
        if let Some(&index) = self.indices.get(&name) {
            return Some(std::mem::replace(&mut self.entries[index].1, value));
        }
        self.indices.insert(name, self.entries.len());
        self.entries.push((name, value));
        None
    }

    /// Unbind `name`, returning its value.
    pub fn remove(&mut self, name: Name) -> Option<Value> {
        let index = self.indices.remove(&name)?;
        let (_, value) = self.entries.remove(index);
        for (later, _) in &self.entries[index..] {
            if let Some(slot) = self.indices.get_mut(later) {
                *slot -= 1;
            }
        }
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = Name> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Name, &Value)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value))
    }
}

impl FromIterator<(Name, Value)> for DictType {
    fn from_iter<I: IntoIterator<Item = (Name, Value)>>(iter: I) -> Self {
        let mut dict = DictType::new();
        for (name, value) in iter {
            dict.insert(name, value);
        }
        dict
    }
}

/// Table and frozen flag behind one `SharedDict`.
///
/// `frozen` only changes while `table`'s write lock is held, so a holder of
/// the write lock sees a stable value.
#[derive(Default)]
struct DictCell {
    table: RwLock<DictType>,
    frozen: AtomicBool,
}

/// Shared, lock-guarded handle to a `DictType`.
///
/// Cloning the handle shares the table. Once frozen, no handle can obtain
/// a write guard again. Guards must not be held across calls back into
/// the object that owns the dict.
#[derive(Clone, Default)]
pub struct SharedDict(Arc<DictCell>);

impl SharedDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dict(dict: DictType) -> Self {
        SharedDict(Arc::new(DictCell {
            table: RwLock::new(dict),
            frozen: AtomicBool::new(false),
        }))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, DictType> {
        self.0.table.read()
    }

    /// Write guard, or `None` once the dict is frozen.
    pub fn write(&self) -> Option<RwLockWriteGuard<'_, DictType>> {
        let guard = self.0.table.write();
        if self.0.frozen.load(Ordering::Acquire) {
            return None;
        }
        Some(guard)
    }

    /// Freeze the dict. Returns `false` if it was already frozen.
    ///
    /// Waits for every outstanding guard, so a mutation that holds the
    /// write lock completes before the freeze takes effect.
    pub fn freeze(&self) -> bool {
        let _guard = self.0.table.write();
        !self.0.frozen.swap(true, Ordering::AcqRel)
    }

    pub fn is_frozen(&self) -> bool {
        self.0.frozen.load(Ordering::Acquire)
    }

    /// Clone of the value bound to `name`.
    pub fn get(&self, name: Name) -> Option<Value> {
        self.0.table.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.0.table.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.table.read().is_empty()
    }

    /// True if both handles share one table.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl From<DictType> for SharedDict {
    fn from(dict: DictType) -> Self {
        SharedDict::from_dict(dict)
    }
}

impl fmt::Debug for SharedDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.table.try_read() {
            Some(dict) => write!(f, "SharedDict({} entries)", dict.len()),
            None => write!(f, "SharedDict(<locked>)"),
        }
    }
}
