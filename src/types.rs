//! Type-safe wrappers for AIG variable keys and time slices.
//!
//! The manager never interprets a [`Var`]; it is an opaque key chosen by the caller
//! and only compared for equality. A [`Slice`] tells apart occurrences of the same
//! variable in different time frames of an unrolled sequential model.
use std::fmt;

/// A caller-owned variable key (non-zero).
///
/// # Invariants
///
/// - Variable keys must be >= 1 (0 is reserved for "no variable")
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a new variable key.
    ///
    /// # Panics
    ///
    /// Panics if `id == 0`.
    pub fn new(id: u32) -> Self {
        assert_ne!(id, 0, "Variable keys must be >= 1");
        Var(id)
    }

    /// Returns the raw key as a `u32`.
    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<Var> for u32 {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// A time slice (0-indexed).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Slice(u32);

impl Slice {
    /// The initial time frame.
    pub const ZERO: Slice = Slice(0);

    pub fn new(index: u32) -> Self {
        Slice(index)
    }

    /// Returns the raw slice index.
    pub fn index(self) -> u32 {
        self.0
    }

    /// Returns the following time frame.
    pub fn next(self) -> Self {
        Slice(self.0 + 1)
    }

    /// Returns the preceding time frame, or None for the initial one.
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).map(Slice)
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl From<u32> for Slice {
    fn from(index: u32) -> Self {
        Slice(index)
    }
}

impl From<Slice> for u32 {
    fn from(slice: Slice) -> Self {
        slice.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_creation() {
        let v1 = Var::new(1);
        let v2 = Var::new(2);
        assert_eq!(v1.id(), 1);
        assert_eq!(v2.id(), 2);
        assert!(v1 < v2);
        assert_eq!(v1.to_string(), "x1");
    }

    #[test]
    #[should_panic(expected = "Variable keys must be >= 1")]
    fn test_var_zero_panics() {
        Var::new(0);
    }

    #[test]
    fn test_slice_navigation() {
        let t0 = Slice::ZERO;
        let t1 = t0.next();
        assert_eq!(t1.index(), 1);
        assert_eq!(t1.prev(), Some(t0));
        assert_eq!(t0.prev(), None);
        assert_eq!(Slice::from(3).to_string(), "t3");
    }
}
