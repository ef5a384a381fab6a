//! Heap wrapper for enforced Arc usage.
//!
//! `Heap<T>` is the only way objects in this crate are shared. Its
//! constructor is crate-private, so client code obtains handles from the
//! factories (`StrictModuleObject::make_strict_module`,
//! `StrictType::make_type`, `Value::string`, ...) and never allocates an
//! object on its own.

#![expect(clippy::disallowed_types, reason = "Arc is the whole point of Heap<T>")]

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// A shared, reference-counted object handle.
///
/// The object lives until the last `Heap` pointing at it is dropped.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// True if both handles point at the same object.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Number of live handles to this object.
    #[inline]
    pub fn strong_count(this: &Self) -> usize {
        Arc::strong_count(&this.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + Eq> Eq for Heap<T> {}

impl<T: ?Sized + Hash> Hash for Heap<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        (*self.0).hash(state);
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized> AsRef<T> for Heap<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_deref() {
        let h = Heap::new(42i64);
        assert_eq!(*h, 42);
    }

    #[test]
    fn test_heap_clone_shares_allocation() {
        let h1 = Heap::new(vec![1, 2, 3]);
        let h2 = h1.clone();
        assert!(Heap::ptr_eq(&h1, &h2));
        assert_eq!(Heap::strong_count(&h1), 2);
        drop(h2);
        assert_eq!(Heap::strong_count(&h1), 1);
    }

    #[test]
    fn test_heap_eq_is_structural() {
        let h1 = Heap::new("os".to_string());
        let h2 = Heap::new("os".to_string());
        let h3 = Heap::new("sys".to_string());
        assert_eq!(h1, h2);
        assert!(!Heap::ptr_eq(&h1, &h2));
        assert_ne!(h1, h3);
    }
}
