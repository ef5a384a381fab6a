//! Module objects.
//!
//! A `StrictModuleObject` is the value an `import` binds: an immutable name,
//! the `module` type descriptor, and the dictionary holding the module's
//! top-level bindings. Module objects are only created through
//! [`StrictModuleObject::make_strict_module`], which hands back a shared
//! [`ModuleRef`].
//!
//! Once the analyzer finishes a module's top level it freezes the module.
//! Freezing applies to the module's shared dictionary, so every handle to
//! it loses write access, including a dict the caller passed to the
//! factory. Importers can never modify another module's globals.

use strict_ir::{Name, StringLookup};

use crate::dict::SharedDict;
use crate::errors::{frozen_module, no_module_attribute, ObjectError, ObjectResult};
use crate::instance::StrictInstance;
use crate::types::TypeRef;
use crate::value::{Heap, Value};

/// Shared handle to a module object.
pub type ModuleRef = Heap<StrictModuleObject>;

pub struct StrictModuleObject {
    strict_type: TypeRef,
    dict: SharedDict,
    name: String,
}

impl StrictModuleObject {
    fn new(strict_type: TypeRef, name: String, dict: Option<SharedDict>) -> Self {
        StrictModuleObject {
            strict_type,
            dict: dict.unwrap_or_default(),
            name,
        }
    }

    /// Create a module object.
    ///
    /// A supplied `dict` is shared, not copied: bindings added through the
    /// module are visible through the caller's handle and vice versa. With
    /// `None` the module starts with an empty dictionary.
    pub fn make_strict_module(
        strict_type: TypeRef,
        name: impl Into<String>,
        dict: Option<SharedDict>,
    ) -> ModuleRef {
        let module = Heap::new(Self::new(strict_type, name.into(), dict));
        tracing::debug!(
            module = %module.name,
            bindings = module.dict.len(),
            "created strict module"
        );
        module
    }

    /// The module's name, exactly as given at creation.
    pub fn module_name(&self) -> &str {
        &self.name
    }

    /// Attribute access as performed by `module.attr` in analyzed code.
    pub fn load_attr(&self, name: Name, names: &dyn StringLookup) -> ObjectResult<Value> {
        self.get_attr(name)
            .ok_or_else(|| no_module_attribute(&self.name, names.lookup(name)))
    }

    /// Freeze the module. Returns `false` if it was already frozen.
    ///
    /// Blocks until in-flight attribute stores finish; no store can land
    /// after this returns.
    pub fn freeze(&self) -> bool {
        let newly_frozen = self.dict.freeze();
        if newly_frozen {
            tracing::debug!(module = %self.name, "froze strict module");
        }
        newly_frozen
    }

    pub fn is_frozen(&self) -> bool {
        self.dict.is_frozen()
    }

    #[cold]
    fn reject_mutation(&self, name: Name, names: &dyn StringLookup) -> ObjectError {
        let attr = names.lookup(name);
        tracing::warn!(module = %self.name, attr, "rejected mutation of frozen module");
        frozen_module(&self.name, attr)
    }
}

impl StrictInstance for StrictModuleObject {
    fn strict_type(&self) -> &TypeRef {
        &self.strict_type
    }

    fn dict(&self) -> &SharedDict {
        &self.dict
    }

    fn display_name(&self) -> String {
        format!("<module '{}'>", self.name)
    }

    fn set_attr(&self, name: Name, value: Value, names: &dyn StringLookup) -> ObjectResult<()> {
        let Some(mut dict) = self.dict.write() else {
            return Err(self.reject_mutation(name, names));
        };
        tracing::trace!(module = %self.name, attr = names.lookup(name), "set module attribute");
        dict.insert(name, value);
        Ok(())
    }

    fn del_attr(&self, name: Name, names: &dyn StringLookup) -> ObjectResult<Value> {
        let Some(mut dict) = self.dict.write() else {
            return Err(self.reject_mutation(name, names));
        };
        dict.remove(name)
            .ok_or_else(|| no_module_attribute(&self.name, names.lookup(name)))
    }
}

impl std::fmt::Debug for StrictModuleObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrictModuleObject")
            .field("name", &self.name)
            .field("type", &self.strict_type.name())
            .field("dict", &self.dict)
            .field("frozen", &self.is_frozen())
            .finish()
    }
}
