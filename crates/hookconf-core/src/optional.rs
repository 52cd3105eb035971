//! Presence/absence container used instead of sentinel values.
//!
//! An [`Optional`] is either `Present` with a value or `Absent`. Instances are
//! immutable; every transformation produces a new instance.
//!
//! Two construction entry points exist for inputs that may themselves be
//! absent (an `Option` or another `Optional`):
//!
//! - [`Optional::from_value`] is strict and fails with
//!   [`Error::IllegalState`] on absent input.
//! - [`Optional::from_nullable`] downgrades absent input to `Absent`.
//!
//! Through either one a `Present` never wraps an absent value. [`Optional::of`]
//! and [`Optional::map`] do not look inside their input and carry no such
//! guarantee.

use crate::{Error, Result};

/// An optional value: `Present(T)` or `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Optional<T> {
    Present(T),
    #[default]
    Absent,
}

/// Inputs that may carry "no value".
///
/// Implemented for [`Option`] and [`Optional`] so that both constructors
/// collapse absent inputs instead of nesting them.
pub trait Nullable {
    type Item;

    fn into_option(self) -> Option<Self::Item>;
}

impl<T> Nullable for Option<T> {
    type Item = T;

    fn into_option(self) -> Option<T> {
        self
    }
}

impl<T> Nullable for Optional<T> {
    type Item = T;

    fn into_option(self) -> Option<T> {
        self.get_or_null()
    }
}

impl<T> Optional<T> {
    /// The absent instance.
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Wrap a value that cannot be absent by construction.
    ///
    /// `value` is not inspected. When `T` is itself nullable this yields
    /// `Present(None)` or `Present(Absent)`; use
    /// [`from_nullable`](Self::from_nullable) for those.
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// Strict constructor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalState`] when `value` is `None` or `Absent`.
    pub fn from_value<N>(value: N) -> Result<Self>
    where
        N: Nullable<Item = T>,
    {
        value
            .into_option()
            .map(Self::Present)
            .ok_or_else(|| Error::illegal_state("Disallowed null in reference."))
    }

    /// Lenient constructor: `None` and `Absent` become `Absent`.
    pub fn from_nullable<N>(value: N) -> Self
    where
        N: Nullable<Item = T>,
    {
        match value.into_option() {
            Some(inner) => Self::Present(inner),
            None => Self::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrow the wrapped value. Callers must check presence first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalState`] for `Absent`.
    pub fn get(&self) -> Result<&T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(Error::illegal_state("get() called on an absent value")),
        }
    }

    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// The one escape hatch back into `Option` territory.
    pub fn get_or_null(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Apply `f` to a present value. `f` is never called for `Absent`.
    ///
    /// The result of `f` is wrapped as-is, so a closure returning `None`
    /// gives `Present(None)`. Use [`map_nullable`](Self::map_nullable) when
    /// the closure may produce no value.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(f(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Like [`map`](Self::map), but an absent result collapses to `Absent`.
    pub fn map_nullable<N, F>(self, f: F) -> Optional<N::Item>
    where
        N: Nullable,
        F: FnOnce(T) -> N,
    {
        match self {
            Self::Present(value) => Optional::from_nullable(f(value)),
            Self::Absent => Optional::Absent,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.get_or_null()
    }
}
