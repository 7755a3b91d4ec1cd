use std::fmt::{Debug, Display, Formatter};
use std::ops::{Neg, Not};

/// A complemented reference to an AIG node.
///
/// The lowest bit is the sign (1 = negated), the remaining bits hold the node index.
/// This is the same layout as an AIGER literal, so `r` and `!r` point to the same node
/// and negation never allocates.
///
/// Index 0 is the constant false node, so `AigRef::FALSE` is `0` and `AigRef::TRUE` is `1`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct AigRef(u32);

impl AigRef {
    /// Reference to the constant false node.
    pub const FALSE: AigRef = AigRef(0);

    /// Negated reference to the constant false node.
    pub const TRUE: AigRef = AigRef(1);

    /// Largest node index that fits into a reference.
    pub const MAX_INDEX: u32 = u32::MAX >> 1;

    /// Creates a non-negated reference to the node with the given index.
    pub const fn positive(index: u32) -> Self {
        assert!(index <= Self::MAX_INDEX, "Node index does not fit into a reference");
        Self(index << 1)
    }

    /// Creates a negated reference to the node with the given index.
    pub const fn negative(index: u32) -> Self {
        Self(Self::positive(index).0 | 1)
    }

    /// Creates a reference from its raw literal encoding.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Return the internal representation of the reference.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Return the index of the referenced node.
    pub const fn index(self) -> u32 {
        self.0 >> 1
    }

    pub const fn is_negated(self) -> bool {
        self.0 & 1 != 0
    }

    pub const fn negate(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Return the same reference with the sign cleared.
    pub const fn strip(self) -> Self {
        Self(self.0 & !1)
    }

    /// Negate the reference if `negate` is true.
    pub const fn xor(self, negate: bool) -> Self {
        Self(self.0 ^ negate as u32)
    }

    pub const fn is_false(self) -> bool {
        self.0 == Self::FALSE.0
    }

    pub const fn is_true(self) -> bool {
        self.negate().is_false()
    }

    pub const fn is_const(self) -> bool {
        self.index() == 0
    }
}

impl Not for AigRef {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl Not for &AigRef {
    type Output = AigRef;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for AigRef {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Display for AigRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "⊥"),
            1 => write!(f, "⊤"),
            _ => write!(f, "{}@{}", if self.is_negated() { "~" } else { "" }, self.index()),
        }
    }
}

impl Debug for AigRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
