use crate::reference::AigRef;
use crate::table::Keyed;
use crate::types::{Slice, Var};
use crate::utils::{mix4, MyHash};

/// The structural key of a node.
///
/// Two live nodes never share a key: this is what the unique table enforces.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NodeKind {
    /// The constant false sentinel.
    False,
    /// A variable occurrence in a time slice.
    Var { var: Var, slice: Slice },
    /// A conjunction of two (possibly negated) children, in construction order.
    And { left: AigRef, right: AigRef },
}

impl NodeKind {
    pub fn var(var: Var, slice: Slice) -> Self {
        NodeKind::Var { var, slice }
    }

    pub fn and(left: AigRef, right: AigRef) -> Self {
        NodeKind::And { left, right }
    }

    pub fn is_var(&self) -> bool {
        matches!(self, NodeKind::Var { .. })
    }

    pub fn is_and(&self) -> bool {
        matches!(self, NodeKind::And { .. })
    }

    /// The children of a conjunction.
    pub fn children(&self) -> Option<(AigRef, AigRef)> {
        match *self {
            NodeKind::And { left, right } => Some((left, right)),
            _ => None,
        }
    }
}

impl MyHash for NodeKind {
    fn hash(&self) -> u64 {
        match *self {
            NodeKind::False => 0,
            NodeKind::Var { var, slice } => mix4(var.id() as u64, slice.index() as u64, 0, 0),
            NodeKind::And { left, right } => mix4(0, 0, left.raw() as u64, right.raw() as u64),
        }
    }
}

/// An AIG node with its bookkeeping.
#[derive(Debug, Copy, Clone)]
pub struct Node {
    pub kind: NodeKind,
    /// Number of owners: held references plus parent conjunctions.
    pub ref_count: u32,
    /// Scratch slot for CNF encoders (0 = unassigned).
    pub tseitin: i32,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ref_count: 0,
            tseitin: 0,
        }
    }
}

impl Keyed for Node {
    type Key = NodeKind;

    fn key(&self) -> NodeKind {
        self.kind
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(NodeKind::False)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates() {
        let v = NodeKind::var(Var::new(1), Slice::ZERO);
        assert!(v.is_var());
        assert!(!v.is_and());
        assert_eq!(v.children(), None);

        let a = NodeKind::and(AigRef::positive(1), AigRef::negative(2));
        assert!(a.is_and());
        assert!(!a.is_var());
        assert_eq!(a.children(), Some((AigRef::positive(1), AigRef::negative(2))));

        assert!(!NodeKind::False.is_var());
        assert!(!NodeKind::False.is_and());
    }

    #[test]
    fn test_hash_distinguishes_slices() {
        let a = NodeKind::var(Var::new(1), Slice::new(0));
        let b = NodeKind::var(Var::new(1), Slice::new(1));
        assert_ne!(a, b);
        assert_ne!(MyHash::hash(&a), MyHash::hash(&b));
    }

    #[test]
    fn test_hash_child_order() {
        let x = AigRef::positive(3);
        let y = AigRef::positive(4);
        assert_ne!(NodeKind::and(x, y), NodeKind::and(y, x));
        assert_ne!(MyHash::hash(&NodeKind::and(x, y)), MyHash::hash(&NodeKind::and(y, x)));
    }

    #[test]
    fn test_default_is_false() {
        let node = Node::default();
        assert_eq!(node.kind, NodeKind::False);
        assert_eq!(node.ref_count, 0);
        assert_eq!(node.tseitin, 0);
    }
}
