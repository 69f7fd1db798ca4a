//! Scoped release of driver resources
//!
//! Any resource with a fallible release step implements [`Releasable`];
//! wrapping it in a [`ScopedRelease`] guarantees that the release runs
//! exactly once when the guard leaves scope, on success and error paths
//! alike. Release failures are logged, never propagated, so they cannot
//! mask the outcome of the work done with the resource.

use crate::Result;
use std::ops::{Deref, DerefMut};

/// A resource that must be released after use
pub trait Releasable {
    /// Release the resource. Called at most once by [`ScopedRelease`].
    fn release(&mut self) -> Result<()>;
}

impl<T: Releasable + ?Sized> Releasable for Box<T> {
    fn release(&mut self) -> Result<()> {
        (**self).release()
    }
}

/// Guard that releases the wrapped resource when dropped
///
/// # Examples
///
/// ```
/// use procall_core::{Releasable, Result, ScopedRelease};
///
/// struct Cursor {
///     open: bool,
/// }
///
/// impl Releasable for Cursor {
///     fn release(&mut self) -> Result<()> {
///         self.open = false;
///         Ok(())
///     }
/// }
///
/// let guard = ScopedRelease::new(Cursor { open: true });
/// assert!(guard.open);
/// drop(guard);
/// ```
pub struct ScopedRelease<T: Releasable> {
    resource: T,
}

impl<T: Releasable> ScopedRelease<T> {
    /// Take ownership of a resource
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Releasable> Deref for ScopedRelease<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.resource
    }
}

impl<T: Releasable> DerefMut for ScopedRelease<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.resource
    }
}

impl<T: Releasable> Drop for ScopedRelease<T> {
    fn drop(&mut self) {
        if let Err(e) = self.resource.release() {
            tracing::warn!(error = %e, "Failed to release resource");
        }
    }
}
