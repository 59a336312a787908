//! Handle registry
//!
//! The C boundary identifies live interface objects by opaque integer
//! handles. Each bridge facade owns one `HandleRegistry`, the sole
//! authority on whether a handle may be used: objects are only reachable
//! through [`HandleRegistry::with`], so validate-before-use is structural
//! rather than a calling convention.
//!
//! Handles are allocated from a monotonic counter and never reused within
//! a process; `0` is reserved as the null handle. Unregistering removes
//! the liveness fact before the object is released, so a handle can never
//! be observed as valid after its delete call completed.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Opaque caller-visible identifier for a live interface object.
pub type RawHandle = u64;

/// The handle value that stands for "no object".
pub const NULL_HANDLE: RawHandle = 0;

struct Inner<T> {
    next: RawHandle,
    live: HashMap<RawHandle, Arc<Mutex<T>>>,
}

/// Process-lifetime set of live objects for one interface kind.
pub struct HandleRegistry<T> {
    inner: Mutex<Inner<T>>,
}

impl<T> Default for HandleRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HandleRegistry<T> {
    pub fn new() -> Self {
        HandleRegistry {
            inner: Mutex::new(Inner {
                next: 1,
                live: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Insert an object and return its freshly allocated handle.
    pub fn register(&self, value: T) -> RawHandle {
        let mut inner = self.lock();
        let handle = inner.next;
        inner.next += 1;
        inner.live.insert(handle, Arc::new(Mutex::new(value)));
        handle
    }

    /// True iff the handle currently identifies a live object.
    pub fn validate(&self, handle: RawHandle) -> bool {
        self.lock().live.contains_key(&handle)
    }

    /// Remove the object if present, reporting whether it was. The object
    /// is dropped after removal; if a call on another thread is still in
    /// flight it finishes against the detached object, but no new call can
    /// start once this returns.
    pub fn unregister(&self, handle: RawHandle) -> bool {
        self.lock().live.remove(&handle).is_some()
    }

    /// Run `f` against the live object, or return `None` for a dead
    /// handle. The registry lock is released before `f` runs; only the
    /// entry's own lock is held across the call, so a long blocking call
    /// on one handle does not stall operations on others.
    pub fn with<R>(&self, handle: RawHandle, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let entry = self.lock().live.get(&handle).cloned()?;
        let mut value = match entry.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Some(f(&mut value))
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.lock().live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_validate_unregister() {
        let registry = HandleRegistry::new();
        let handle = registry.register(42u32);

        assert_ne!(handle, NULL_HANDLE);
        assert!(registry.validate(handle));
        assert_eq!(registry.len(), 1);

        assert!(registry.unregister(handle));
        assert!(!registry.validate(handle));
        assert!(registry.is_empty());

        // Second unregister reports absence rather than failing
        assert!(!registry.unregister(handle));
    }

    #[test]
    fn test_never_issued_handle_is_invalid() {
        let registry: HandleRegistry<u32> = HandleRegistry::new();
        assert!(!registry.validate(NULL_HANDLE));
        assert!(!registry.validate(7));
    }

    #[test]
    fn test_handles_are_not_reused() {
        let registry = HandleRegistry::new();
        let first = registry.register(1u32);
        assert!(registry.unregister(first));

        let second = registry.register(2u32);
        assert_ne!(first, second);
        assert!(!registry.validate(first));
        assert!(registry.validate(second));
    }

    #[test]
    fn test_with_reaches_live_object_only() {
        let registry = HandleRegistry::new();
        let handle = registry.register(10u32);

        let doubled = registry.with(handle, |value| {
            *value *= 2;
            *value
        });
        assert_eq!(doubled, Some(20));

        registry.unregister(handle);
        assert_eq!(registry.with(handle, |value| *value), None);
    }

    #[test]
    fn test_handles_are_independent() {
        let registry = HandleRegistry::new();
        let a = registry.register(String::from("a"));
        let b = registry.register(String::from("b"));

        registry.unregister(a);
        assert!(!registry.validate(a));
        assert!(registry.validate(b));
        assert_eq!(registry.with(b, |value| value.clone()), Some("b".to_string()));
    }
}
