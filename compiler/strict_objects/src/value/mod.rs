//! Runtime values stored in attribute dictionaries.
//!
//! Scalars are stored inline. Strings and objects are shared through
//! `Heap<T>`, whose constructor is crate-private: strings come from
//! `Value::string`, objects from their own factories.
//!
//! Objects (types, modules, instances) compare by identity, the same way
//! `is` behaves for them in the analyzed program.

mod heap;

use std::fmt;

pub use heap::Heap;

use crate::instance::{InstanceRef, StrictInstance};
use crate::module::ModuleRef;
use crate::types::{BuiltinTypes, TypeRef};

/// A value bound to an attribute.
#[derive(Clone)]
pub enum Value {
    /// `None`.
    None,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// String value.
    Str(Heap<String>),
    /// A type descriptor used as a value (`int`, a user class).
    Type(TypeRef),
    /// A module object.
    Module(ModuleRef),
    /// An instance of a non-module type.
    Instance(InstanceRef),
}

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn module(module: &ModuleRef) -> Self {
        Value::Module(module.clone())
    }

    #[inline]
    pub fn ty(ty: &TypeRef) -> Self {
        Value::Type(ty.clone())
    }

    #[inline]
    pub fn instance(instance: &InstanceRef) -> Self {
        Value::Instance(instance.clone())
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Str(s) => !s.is_empty(),
            Value::Type(_) | Value::Module(_) | Value::Instance(_) => true,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_module(&self) -> Option<&ModuleRef> {
        match self {
            Value::Module(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<&TypeRef> {
        match self {
            Value::Type(t) => Some(t),
            _ => None,
        }
    }

    /// Name of the value's type, as it would appear in an error message.
    pub fn type_name(&self) -> &str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::Type(_) => "type",
            Value::Module(m) => m.strict_type().name(),
            Value::Instance(i) => i.strict_type().name(),
        }
    }

    /// The type descriptor of this value.
    ///
    /// Modules and instances report the descriptor they were created with;
    /// everything else maps onto the shared builtin descriptors.
    pub fn strict_type(&self, builtins: &BuiltinTypes) -> TypeRef {
        match self {
            Value::None => builtins.none.clone(),
            Value::Bool(_) => builtins.bool_.clone(),
            Value::Int(_) => builtins.int.clone(),
            Value::Str(_) => builtins.str_.clone(),
            Value::Type(_) => builtins.type_.clone(),
            Value::Module(m) => m.strict_type().clone(),
            Value::Instance(i) => i.strict_type().clone(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Type(t) => write!(f, "Type({:?})", t.name()),
            Value::Module(m) => write!(f, "Module({:?})", m.module_name()),
            Value::Instance(i) => write!(f, "Instance({:?})", i.strict_type().name()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "'{}'", &**s),
            Value::Type(t) => write!(f, "{}", t.display_name()),
            Value::Module(m) => write!(f, "{}", m.display_name()),
            Value::Instance(i) => write!(f, "{}", i.display_name()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Type(a), Value::Type(b)) => Heap::ptr_eq(a, b),
            (Value::Module(a), Value::Module(b)) => Heap::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Value {}
