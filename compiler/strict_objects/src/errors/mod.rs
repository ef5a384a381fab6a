//! Error types for object-model operations.
//!
//! `ObjectError` carries structured data for each failure; its `Display`
//! text mirrors the messages a Python runtime would raise so diagnostics
//! read naturally to the user being analyzed. The `#[cold]` factory
//! functions are the preferred way to build errors.

/// Result of a fallible object-model operation.
pub type ObjectResult<T> = Result<T, ObjectError>;

/// Typed error category for object-model failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ObjectError {
    /// Attribute lookup or deletion on a plain instance found nothing.
    #[error("'{owner}' object has no attribute '{attr}'")]
    NoAttribute { owner: String, attr: String },

    /// Attribute lookup or deletion on a module found nothing.
    #[error("module '{module}' has no attribute '{attr}'")]
    NoModuleAttribute { module: String, attr: String },

    /// A frozen module rejected a mutation.
    #[error("cannot modify attribute '{attr}' of frozen module '{module}'")]
    FrozenModule { module: String, attr: String },

    /// An object whose dictionary is frozen rejected a mutation.
    #[error("cannot modify attribute '{attr}' of frozen '{owner}' object")]
    FrozenObject { owner: String, attr: String },

    /// A module table already holds a module with this name.
    #[error("module '{name}' is already loaded")]
    DuplicateModule { name: String },

    /// The bases of a new type admit no C3 linearization.
    #[error("cannot create a consistent method resolution order (MRO) for type '{type_name}'")]
    InconsistentMro { type_name: String },
}

#[cold]
pub fn no_attribute(owner: &str, attr: &str) -> ObjectError {
    ObjectError::NoAttribute {
        owner: owner.to_owned(),
        attr: attr.to_owned(),
    }
}

#[cold]
pub fn no_module_attribute(module: &str, attr: &str) -> ObjectError {
    ObjectError::NoModuleAttribute {
        module: module.to_owned(),
        attr: attr.to_owned(),
    }
}

#[cold]
pub fn frozen_module(module: &str, attr: &str) -> ObjectError {
    ObjectError::FrozenModule {
        module: module.to_owned(),
        attr: attr.to_owned(),
    }
}

#[cold]
pub fn frozen_object(owner: &str, attr: &str) -> ObjectError {
    ObjectError::FrozenObject {
        owner: owner.to_owned(),
        attr: attr.to_owned(),
    }
}

#[cold]
pub fn duplicate_module(name: &str) -> ObjectError {
    ObjectError::DuplicateModule {
        name: name.to_owned(),
    }
}

#[cold]
pub fn inconsistent_mro(type_name: &str) -> ObjectError {
    ObjectError::InconsistentMro {
        type_name: type_name.to_owned(),
    }
}

#[cfg(test)]
mod tests;
