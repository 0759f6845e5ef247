//! Sharing a registry with interrupt context.
#![allow(unsafe_code)]

use core::cell::UnsafeCell;

/// Wraps a [`KeypadRegistry`](crate::keypad::KeypadRegistry) for access from
/// both thread and interrupt context.
///
/// The registry itself performs no locking; every method takes `&mut self`.
/// This wrapper serializes all access through a critical section, which fits
/// the common layout of a registry in a `static` scanned from a periodic
/// timer interrupt.
pub struct SharedKeypads<R> {
    registry: UnsafeCell<R>,
}

// Every access path runs inside a critical section (or is an unsafe method
// whose caller guarantees exclusivity), so `Sync` only needs `R: Send`.
unsafe impl<R: Send> Sync for SharedKeypads<R> {}

impl<R> SharedKeypads<R> {
    pub const fn new(registry: R) -> Self {
        Self {
            registry: UnsafeCell::new(registry),
        }
    }

    /// Runs `f` with exclusive access to the registry, inside a critical
    /// section.
    pub fn with<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        critical_section::with(|_| {
            // SAFETY: the critical section guarantees no other execution
            // context is inside `with` or `with_unchecked` concurrently.
            unsafe { f(&mut *self.registry.get()) }
        })
    }

    /// Runs `f` with exclusive access, without taking a critical section.
    ///
    /// Useful from a handler that already runs with the relevant interrupts
    /// masked, where nesting a critical section would add latency for
    /// nothing.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that no other execution context accesses
    /// this `SharedKeypads` for the duration of the call.
    pub unsafe fn with_unchecked<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        // SAFETY: exclusivity is the caller's contract.
        unsafe { f(&mut *self.registry.get()) }
    }

    pub fn into_inner(self) -> R {
        self.registry.into_inner()
    }
}

impl<R> core::fmt::Debug for SharedKeypads<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedKeypads").finish_non_exhaustive()
    }
}
