//! Type descriptors.
//!
//! Every object points at a `StrictType` shared with all other objects of
//! the same type. The method resolution order is computed once, when the
//! type is created, using C3 linearization.

use std::fmt;

use crate::errors::{inconsistent_mro, ObjectResult};
use crate::value::Heap;

/// Shared handle to a type descriptor.
pub type TypeRef = Heap<StrictType>;

/// A type descriptor.
pub struct StrictType {
    name: String,
    module: String,
    bases: Vec<TypeRef>,
    /// Ancestors in method resolution order, excluding the type itself.
    ancestors: Vec<TypeRef>,
}

impl StrictType {
    /// Create a type with no bases. Only `object` should be built this way.
    pub fn make_root(name: impl Into<String>, module: impl Into<String>) -> TypeRef {
        Heap::new(StrictType {
            name: name.into(),
            module: module.into(),
            bases: Vec::new(),
            ancestors: Vec::new(),
        })
    }

    /// Create a type with a single base; this can never fail to linearize.
    pub fn make_subtype(
        name: impl Into<String>,
        module: impl Into<String>,
        base: &TypeRef,
    ) -> TypeRef {
        let mut ancestors = Vec::with_capacity(base.ancestors.len() + 1);
        ancestors.push(base.clone());
        ancestors.extend(base.ancestors.iter().cloned());
        Heap::new(StrictType {
            name: name.into(),
            module: module.into(),
            bases: vec![base.clone()],
            ancestors,
        })
    }

    /// Create a type from an arbitrary list of bases.
    ///
    /// Fails when the bases admit no consistent C3 linearization, e.g.
    /// `class C(A, B)` where `B` already derives from `A`.
    pub fn make_type(
        name: impl Into<String>,
        module: impl Into<String>,
        bases: Vec<TypeRef>,
    ) -> ObjectResult<TypeRef> {
        let name = name.into();
        let mut sequences: Vec<Vec<TypeRef>> = bases
            .iter()
            .map(|base| {
                let mut seq = Vec::with_capacity(base.ancestors.len() + 1);
                seq.push(base.clone());
                seq.extend(base.ancestors.iter().cloned());
                seq
            })
            .collect();
        sequences.push(bases.clone());

        let Some(ancestors) = c3_merge(sequences) else {
            tracing::debug!(type_name = %name, "rejected type with inconsistent bases");
            return Err(inconsistent_mro(&name));
        };

        Ok(Heap::new(StrictType {
            name,
            module: module.into(),
            bases,
            ancestors,
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the module that defines this type.
    pub fn module_name(&self) -> &str {
        &self.module
    }

    pub fn bases(&self) -> &[TypeRef] {
        &self.bases
    }

    /// Ancestors in method resolution order, not including `self`.
    pub fn ancestors(&self) -> &[TypeRef] {
        &self.ancestors
    }

    /// True if `self` is `other` or derives from it.
    pub fn is_subtype_of(&self, other: &TypeRef) -> bool {
        std::ptr::eq(self, &**other) || self.ancestors.iter().any(|t| Heap::ptr_eq(t, other))
    }

    /// Diagnostic text, `<class 'name'>`.
    pub fn display_name(&self) -> String {
        format!("<class '{}'>", self.name)
    }
}

impl fmt::Debug for StrictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrictType")
            .field("name", &self.name)
            .field("module", &self.module)
            .field(
                "bases",
                &self.bases.iter().map(|b| b.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Merge step of C3 linearization.
///
/// Repeatedly takes the first head that does not appear in the tail of any
/// sequence. Returns `None` when every remaining head is blocked.
fn c3_merge(mut sequences: Vec<Vec<TypeRef>>) -> Option<Vec<TypeRef>> {
    let mut merged = Vec::new();
    loop {
        sequences.retain(|seq| !seq.is_empty());
        if sequences.is_empty() {
            return Some(merged);
        }

        let next = sequences.iter().find_map(|seq| {
            let head = &seq[0];
            let blocked = sequences
                .iter()
                .any(|other| other[1..].iter().any(|t| Heap::ptr_eq(t, head)));
            (!blocked).then(|| head.clone())
        })?;

        for seq in &mut sequences {
            if Heap::ptr_eq(&seq[0], &next) {
                seq.remove(0);
            }
        }
        merged.push(next);
    }
}

/// The builtin type descriptors every analysis shares.
#[derive(Clone, Debug)]
pub struct BuiltinTypes {
    pub object: TypeRef,
    pub type_: TypeRef,
    pub module: TypeRef,
    pub str_: TypeRef,
    pub int: TypeRef,
    pub bool_: TypeRef,
    pub none: TypeRef,
}

impl BuiltinTypes {
    pub fn new() -> Self {
        const BUILTINS: &str = "builtins";
        let object = StrictType::make_root("object", BUILTINS);
        let int = StrictType::make_subtype("int", BUILTINS, &object);
        BuiltinTypes {
            type_: StrictType::make_subtype("type", BUILTINS, &object),
            module: StrictType::make_subtype("module", BUILTINS, &object),
            str_: StrictType::make_subtype("str", BUILTINS, &object),
            bool_: StrictType::make_subtype("bool", BUILTINS, &int),
            none: StrictType::make_subtype("NoneType", BUILTINS, &object),
            int,
            object,
        }
    }
}

impl Default for BuiltinTypes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
