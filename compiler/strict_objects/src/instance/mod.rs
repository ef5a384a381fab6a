//! The instance capability shared by every attribute-bearing object.

use strict_ir::{Name, StringLookup};

use crate::dict::SharedDict;
use crate::errors::{frozen_object, no_attribute, ObjectResult};
use crate::types::TypeRef;
use crate::value::{Heap, Value};

/// An object with a type descriptor and an attribute dictionary.
///
/// Module objects and plain instances both implement this trait; objects
/// with their own mutation rules (frozen modules) override `set_attr` and
/// `del_attr`.
pub trait StrictInstance: Send + Sync {
    /// The object's type descriptor.
    fn strict_type(&self) -> &TypeRef;

    /// The object's attribute dictionary.
    fn dict(&self) -> &SharedDict;

    /// Human-readable text for diagnostics.
    fn display_name(&self) -> String {
        format!("<{} object>", self.strict_type().name())
    }

    fn get_attr(&self, name: Name) -> Option<Value> {
        self.dict().get(name)
    }

    /// Bind `name`. Fails with `FrozenObject` once the dict is frozen.
    fn set_attr(&self, name: Name, value: Value, names: &dyn StringLookup) -> ObjectResult<()> {
        let Some(mut dict) = self.dict().write() else {
            return Err(frozen_object(self.strict_type().name(), names.lookup(name)));
        };
        dict.insert(name, value);
        Ok(())
    }

    fn del_attr(&self, name: Name, names: &dyn StringLookup) -> ObjectResult<Value> {
        let Some(mut dict) = self.dict().write() else {
            return Err(frozen_object(self.strict_type().name(), names.lookup(name)));
        };
        dict.remove(name)
            .ok_or_else(|| no_attribute(self.strict_type().name(), names.lookup(name)))
    }
}

/// Shared handle to a plain instance.
pub type InstanceRef = Heap<InstanceObject>;

/// An instance of a non-module type.
#[derive(Debug)]
pub struct InstanceObject {
    strict_type: TypeRef,
    dict: SharedDict,
}

impl InstanceObject {
    /// Create an instance, sharing `dict` when one is given.
    pub fn make_instance(strict_type: TypeRef, dict: Option<SharedDict>) -> InstanceRef {
        Heap::new(InstanceObject {
            strict_type,
            dict: dict.unwrap_or_default(),
        })
    }
}

impl StrictInstance for InstanceObject {
    fn strict_type(&self) -> &TypeRef {
        &self.strict_type
    }

    fn dict(&self) -> &SharedDict {
        &self.dict
    }
}
