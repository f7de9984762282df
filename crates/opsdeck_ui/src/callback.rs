//! Optional event-handler wrappers used by widget builders.
//!
//! Widgets store `Callback<T, M>` instead of spelling out
//! `Option<Box<dyn Fn(T) -> M>>` at every field.

use std::fmt;

/// An optional callback from an input value to an application message.
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Wrap a handler function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// No handler installed.
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Invoke the handler, if set.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").field("set", &self.is_some()).finish()
    }
}

/// A callback that takes no input value.
pub type Callback0<M> = Callback<(), M>;

impl<M> Callback0<M> {
    /// Invoke the handler without arguments, if set.
    pub fn emit(&self) -> Option<M> {
        self.call(())
    }
}
