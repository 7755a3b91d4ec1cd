//! The AIG manager.
//!
//! # Overview
//!
//! An And-Inverter Graph represents Boolean functions using only two-input conjunctions
//! and free negation. The [`AigManager`] owns every node; clients only hold counted
//! [`AigRef`] handles.
//!
//! - **Hash consing**: a node is created once per structural key `(var, slice, left, right)`;
//!   later requests for the same key return the same node.
//! - **Complement edges**: negation flips the low bit of the reference and never allocates.
//! - **Reference counting**: every returned reference carries one count unit that the caller
//!   must give back with [`AigManager::dec`]. A conjunction owns one unit of each child.
//!   When a count drops to zero the node is unlinked and freed, and its children are released
//!   in turn (iteratively, so deep graphs do not exhaust the call stack).
//!
//! # Simplification
//!
//! Before consulting the unique table, [`AigManager::conjunction`] applies:
//!
//! ```text
//! 0 ∧ x = x ∧ 0 = x ∧ ¬x = 0
//! 1 ∧ x = x ∧ x = x
//! x ∧ 1 = x
//! ```
//!
//! # Example
//!
//! ```
//! use aig_rs::aig::AigManager;
//! use aig_rs::types::{Slice, Var};
//!
//! let mut mgr = AigManager::new();
//! let x = mgr.variable(Var::new(1), Slice::ZERO);
//! let y = mgr.variable(Var::new(2), Slice::ZERO);
//!
//! let f = mgr.conjunction(x, y);
//! let g = mgr.conjunction(y, x);
//! assert_eq!(f, g);
//!
//! let h = mgr.conjunction(f, !f);
//! assert!(mgr.is_false(h));
//!
//! for r in [x, y, f, g, h] {
//!     mgr.dec(r);
//! }
//! assert_eq!(mgr.num_nodes(), 0);
//! ```

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::mem::size_of;

use log::{debug, trace};

use crate::alloc::{AllocError, Allocator, HeapAllocator};
use crate::node::{Node, NodeKind};
use crate::reference::AigRef;
use crate::table::Table;
use crate::types::{Slice, Var};

/// Bytes requested from the allocator for every node.
pub const NODE_BYTES: usize = size_of::<Node>();
/// Bytes requested from the allocator for every bucket head.
pub const BUCKET_BYTES: usize = size_of::<u32>();

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum AigError {
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] AllocError),
}

/// Initial sizing of a manager.
#[derive(Debug, Copy, Clone, Default)]
pub struct AigConfig {
    /// The unique table starts with `2^bucket_bits` buckets (`None` allocates lazily).
    pub bucket_bits: Option<u32>,
    /// Number of node slots to reserve up front.
    pub reserve: usize,
}

pub struct AigManager<A: Allocator = HeapAllocator> {
    table: Table<Node>,
    allocator: A,
}

impl AigManager<HeapAllocator> {
    pub fn new() -> Self {
        Self::with_allocator(HeapAllocator)
    }
}

impl Default for AigManager<HeapAllocator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Allocator> AigManager<A> {
    pub fn with_allocator(allocator: A) -> Self {
        Self {
            table: Table::new(Node::default()),
            allocator,
        }
    }

    /// Create a manager sized according to `config`.
    ///
    /// # Panics
    ///
    /// Panics if the allocator refuses the initial bucket array.
    pub fn with_config(allocator: A, config: AigConfig) -> Self {
        let mut mgr = Self::with_allocator(allocator);
        mgr.table.reserve(config.reserve);
        if let Some(bits) = config.bucket_bits {
            assert!(bits <= 31, "Bucket bits should be in the range 0..=31");
            while mgr.table.capacity() < 1 << bits {
                if let Err(e) = mgr.enlarge() {
                    panic!("Could not allocate the initial unique table: {}", e);
                }
            }
        }
        mgr
    }

    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Free every node and the bucket array, returning the manager to its initial state.
    ///
    /// Outstanding references become dangling.
    pub fn reset(&mut self) {
        debug!(
            "reset: freeing {} nodes and {} buckets",
            self.table.len(),
            self.table.capacity()
        );
        for _ in 0..self.table.len() {
            self.allocator.deallocate(NODE_BYTES);
        }
        if self.table.capacity() > 0 {
            self.allocator.deallocate(self.table.capacity() * BUCKET_BYTES);
        }
        self.table.clear();
        self.table[0] = Node::default();
    }

    /// Number of live nodes, the false sentinel excluded.
    pub fn num_nodes(&self) -> usize {
        self.table.len()
    }

    /// Number of buckets in the unique table.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    fn enlarge(&mut self) -> Result<(), AllocError> {
        let old = self.table.capacity();
        let new = if old == 0 { 1 } else { 2 * old };
        self.allocator.allocate(new * BUCKET_BYTES)?;
        if old > 0 {
            self.allocator.deallocate(old * BUCKET_BYTES);
        }
        self.table.enlarge();
        Ok(())
    }

    /// Insert a node for a key known to be absent; the node starts with one count unit.
    fn create(&mut self, kind: NodeKind) -> Result<AigRef, AllocError> {
        if self.table.is_full() {
            self.enlarge()?;
        }
        self.allocator.allocate(NODE_BYTES)?;
        let mut node = Node::new(kind);
        node.ref_count = 1;
        let index = self.table.insert(node);
        trace!("create: @{} = {:?}", index, kind);
        Ok(AigRef::positive(index))
    }
}

// Validity and predicates
impl<A: Allocator> AigManager<A> {
    /// Whether `r` refers to a node that is still alive. The false sentinel always is.
    pub fn is_live(&self, r: AigRef) -> bool {
        let i = r.index();
        i == 0 || (self.table.is_occupied(i) && self.table[i].ref_count > 0)
    }

    fn check(&self, r: AigRef) {
        assert!(self.is_live(r), "Reference {} is not live", r);
    }

    fn node(&self, r: AigRef) -> &Node {
        self.check(r);
        &self.table[r.index()]
    }

    pub fn negate(&self, r: AigRef) -> AigRef {
        self.check(r);
        r.negate()
    }

    pub fn strip(&self, r: AigRef) -> AigRef {
        self.check(r);
        r.strip()
    }

    pub fn sign(&self, r: AigRef) -> bool {
        self.check(r);
        r.is_negated()
    }

    pub fn is_false(&self, r: AigRef) -> bool {
        self.check(r);
        r.is_false()
    }

    pub fn is_true(&self, r: AigRef) -> bool {
        self.is_false(r.negate())
    }

    /// Whether `r` is a non-negated reference to a variable node.
    pub fn is_variable(&self, r: AigRef) -> bool {
        self.node(r).kind.is_var() && !r.is_negated()
    }

    /// Whether `r`, with its sign ignored, refers to a conjunction node.
    pub fn is_conjunction(&self, r: AigRef) -> bool {
        self.node(r).kind.is_and()
    }

    /// The variable key of a non-negated variable reference.
    pub fn var(&self, r: AigRef) -> Option<Var> {
        match self.node(r).kind {
            NodeKind::Var { var, .. } if !r.is_negated() => Some(var),
            _ => None,
        }
    }

    /// The time slice of a variable reference (sign ignored).
    pub fn slice(&self, r: AigRef) -> Option<Slice> {
        match self.node(r).kind {
            NodeKind::Var { slice, .. } => Some(slice),
            _ => None,
        }
    }

    /// The children of a conjunction in stored order. The sign of `r` is not applied.
    pub fn children(&self, r: AigRef) -> Option<(AigRef, AigRef)> {
        self.node(r).kind.children()
    }

    pub fn ref_count(&self, r: AigRef) -> u32 {
        let i = r.index();
        assert!(self.table.is_occupied(i), "Reference {} points to a freed slot", r);
        self.table[i].ref_count
    }

    pub fn tseitin_index(&self, r: AigRef) -> i32 {
        self.node(r).tseitin
    }

    pub fn set_tseitin_index(&mut self, r: AigRef, index: i32) {
        self.check(r);
        self.table[r.index()].tseitin = index;
    }

    /// Indices of all nodes reachable from `roots`, in ascending order.
    pub fn descendants(&self, roots: impl IntoIterator<Item = AigRef>) -> Vec<u32> {
        let mut visited = BTreeSet::new();
        let mut stack: Vec<AigRef> = roots.into_iter().collect();
        while let Some(r) = stack.pop() {
            if !visited.insert(r.index()) {
                continue;
            }
            if let Some((left, right)) = self.children(r) {
                stack.push(left);
                stack.push(right);
            }
        }
        visited.into_iter().collect()
    }
}

// Reference counting
impl<A: Allocator> AigManager<A> {
    /// Take one more count unit on the node behind `r` and return `r`.
    ///
    /// # Panics
    ///
    /// Panics if `r` is not live or the counter would overflow.
    pub fn inc(&mut self, r: AigRef) -> AigRef {
        self.check(r);
        let node = &mut self.table[r.index()];
        node.ref_count = node.ref_count.checked_add(1).expect("Reference counter overflow");
        r
    }

    /// Give back one count unit on the node behind `r`.
    ///
    /// A node whose count drops to zero is freed, and the count units it held on its
    /// children are given back as well. The false sentinel is never freed.
    ///
    /// # Panics
    ///
    /// Panics if the count is already zero.
    pub fn dec(&mut self, r: AigRef) {
        let mut stack = vec![r.index()];
        while let Some(i) = stack.pop() {
            assert!(self.table.is_occupied(i), "Reference @{} points to a freed slot", i);
            let node = &mut self.table[i];
            assert!(node.ref_count > 0, "Reference count of @{} is already zero", i);
            node.ref_count -= 1;
            if node.ref_count > 0 || i == 0 {
                continue;
            }

            let node = self.table.remove(i);
            self.allocator.deallocate(NODE_BYTES);
            trace!("free: @{} = {:?}", i, node.kind);
            if let Some((left, right)) = node.kind.children() {
                stack.push(right.index());
                stack.push(left.index());
            }
        }
    }
}

// Construction
impl<A: Allocator> AigManager<A> {
    /// The constant false, with one count unit taken.
    pub fn false_ref(&mut self) -> AigRef {
        self.inc(AigRef::FALSE)
    }

    /// The constant true, with one count unit taken on the false node.
    pub fn true_ref(&mut self) -> AigRef {
        self.false_ref().negate()
    }

    pub fn try_variable(&mut self, var: Var, slice: Slice) -> Result<AigRef, AigError> {
        let kind = NodeKind::var(var, slice);
        if let Some(i) = self.table.find(&kind) {
            return Ok(self.inc(AigRef::positive(i)));
        }
        debug!("variable: new node for {}@{}", var, slice);
        Ok(self.create(kind)?)
    }

    /// The node for `var` in time slice `slice`, with one count unit taken.
    ///
    /// # Panics
    ///
    /// Panics if the allocator refuses to provide a new node.
    pub fn variable(&mut self, var: Var, slice: Slice) -> AigRef {
        self.try_variable(var, slice)
            .unwrap_or_else(|e| panic!("variable({}, {}): {}", var, slice, e))
    }

    pub fn try_conjunction(&mut self, left: AigRef, right: AigRef) -> Result<AigRef, AigError> {
        debug!("conjunction(left = {}, right = {})", left, right);
        self.check(left);
        self.check(right);

        if left.is_false() || right.is_false() || left == right.negate() {
            debug!("conjunction: x ∧ 0 = 0 ∧ x = x ∧ ¬x = 0");
            return Ok(self.false_ref());
        }
        if left.is_true() || left == right {
            debug!("conjunction: 1 ∧ x = x ∧ x = x");
            return Ok(self.inc(right));
        }
        if right.is_true() {
            debug!("conjunction: x ∧ 1 = x");
            return Ok(self.inc(left));
        }

        let found = self
            .table
            .find(&NodeKind::and(right, left))
            .or_else(|| self.table.find(&NodeKind::and(left, right)));
        if let Some(i) = found {
            return Ok(self.inc(AigRef::positive(i)));
        }

        let res = self.create(NodeKind::and(left, right))?;
        self.inc(left);
        self.inc(right);
        Ok(res)
    }

    /// The conjunction of `left` and `right`, with one count unit taken.
    ///
    /// The arguments keep their own count units.
    ///
    /// # Panics
    ///
    /// Panics if either argument is not live, or the allocator refuses to provide a new node.
    pub fn conjunction(&mut self, left: AigRef, right: AigRef) -> AigRef {
        self.try_conjunction(left, right)
            .unwrap_or_else(|e| panic!("conjunction({}, {}): {}", left, right, e))
    }

    pub fn try_disjunction(&mut self, left: AigRef, right: AigRef) -> Result<AigRef, AigError> {
        Ok(self.try_conjunction(left.negate(), right.negate())?.negate())
    }

    /// The disjunction of `left` and `right`, built as `¬(¬left ∧ ¬right)`.
    pub fn disjunction(&mut self, left: AigRef, right: AigRef) -> AigRef {
        self.conjunction(left.negate(), right.negate()).negate()
    }
}

impl<A: Allocator> Drop for AigManager<A> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<A: Allocator> Debug for AigManager<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AigManager")
            .field("nodes", &self.table.len())
            .field("capacity", &self.table.capacity())
            .field("slots", &self.table.slots())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::alloc::CountingAllocator;

    fn var(mgr: &mut AigManager<impl Allocator>, id: u32) -> AigRef {
        mgr.variable(Var::new(id), Slice::ZERO)
    }

    #[test]
    fn test_false_true() {
        let mut mgr = AigManager::new();
        let f = mgr.false_ref();
        let t = mgr.true_ref();
        assert!(mgr.is_false(f));
        assert!(mgr.is_true(t));
        assert_eq!(t, mgr.negate(f));
        assert_eq!(mgr.ref_count(f), 2);
        assert_eq!(mgr.num_nodes(), 0);
        mgr.dec(f);
        mgr.dec(t);
        assert_eq!(mgr.ref_count(AigRef::FALSE), 0);
        assert!(mgr.is_live(AigRef::FALSE));
    }

    #[test]
    #[should_panic(expected = "Reference count of @0 is already zero")]
    fn test_false_underflow() {
        let mut mgr = AigManager::new();
        mgr.dec(AigRef::FALSE);
    }

    #[test]
    fn test_variable_sharing() {
        let mut mgr = AigManager::new();
        let x1 = var(&mut mgr, 1);
        let x2 = var(&mut mgr, 1);
        assert_eq!(x1, x2);
        assert_eq!(mgr.ref_count(x1), 2);
        assert_eq!(mgr.num_nodes(), 1);
        assert!(mgr.is_variable(x1));
        assert_eq!(mgr.var(x1), Some(Var::new(1)));
        assert_eq!(mgr.slice(x1), Some(Slice::ZERO));
    }

    #[test]
    fn test_variable_slices() {
        let mut mgr = AigManager::new();
        let x0 = mgr.variable(Var::new(1), Slice::new(0));
        let x1 = mgr.variable(Var::new(1), Slice::new(1));
        assert_ne!(x0, x1);
        assert_eq!(mgr.slice(x1), Some(Slice::new(1)));
        assert_eq!(mgr.num_nodes(), 2);
    }

    #[test]
    fn test_negated_variable_is_not_variable() {
        let mut mgr = AigManager::new();
        let x = var(&mut mgr, 1);
        assert!(!mgr.is_variable(!x));
        assert_eq!(mgr.var(!x), None);
        assert_eq!(mgr.slice(!x), Some(Slice::ZERO));
        assert!(!mgr.is_conjunction(x));
        assert!(mgr.sign(!x));
        assert_eq!(mgr.strip(!x), x);
    }

    #[test]
    fn test_conjunction_structure() {
        let mut mgr = AigManager::new();
        let x = var(&mut mgr, 1);
        let y = var(&mut mgr, 2);
        let f = mgr.conjunction(x, !y);
        assert!(mgr.is_conjunction(f));
        assert!(mgr.is_conjunction(!f));
        assert!(!mgr.is_variable(f));
        assert_eq!(mgr.children(f), Some((x, !y)));
        assert_eq!(mgr.children(!f), Some((x, !y)));
        assert_eq!(mgr.ref_count(f), 1);
        // Held by the caller and by the conjunction.
        assert_eq!(mgr.ref_count(x), 2);
        assert_eq!(mgr.ref_count(y), 2);
    }

    #[test]
    fn test_conjunction_commutative_sharing() {
        let mut mgr = AigManager::new();
        let x = var(&mut mgr, 1);
        let y = var(&mut mgr, 2);
        let f = mgr.conjunction(y, x);
        let g = mgr.conjunction(x, y);
        assert_eq!(f, g);
        assert_eq!(mgr.ref_count(f), 2);
        // First construction order is what gets stored.
        assert_eq!(mgr.children(f), Some((y, x)));
        assert_eq!(mgr.num_nodes(), 3);
    }

    #[test]
    fn test_simplification_laws() {
        let mut mgr = AigManager::new();
        let x = var(&mut mgr, 1);
        let f = mgr.false_ref();
        let t = mgr.true_ref();

        let r = mgr.conjunction(f, x);
        assert!(mgr.is_false(r));
        let r = mgr.conjunction(x, f);
        assert!(mgr.is_false(r));
        let r = mgr.conjunction(x, !x);
        assert!(mgr.is_false(r));
        let r = mgr.conjunction(t, x);
        assert_eq!(r, x);
        let r = mgr.conjunction(x, t);
        assert_eq!(r, x);
        let r = mgr.conjunction(x, x);
        assert_eq!(r, x);
        let r = mgr.conjunction(t, t);
        assert!(mgr.is_true(r));
        let r = mgr.conjunction(f, t);
        assert!(mgr.is_false(r));

        assert_eq!(mgr.num_nodes(), 1);
        assert_eq!(mgr.ref_count(x), 4);
        // f, t, three contradictions, t ∧ t and f ∧ t.
        assert_eq!(mgr.ref_count(AigRef::FALSE), 7);
    }

    #[test]
    fn test_disjunction() {
        let mut mgr = AigManager::new();
        let x = var(&mut mgr, 1);
        let y = var(&mut mgr, 2);
        let f = mgr.disjunction(x, y);
        assert!(f.is_negated());
        assert_eq!(mgr.children(f), Some((!x, !y)));
        let t = mgr.disjunction(x, !x);
        assert!(mgr.is_true(t));
    }

    #[test]
    fn test_cascading_free() {
        let mut mgr = AigManager::new();
        let x = var(&mut mgr, 1);
        let y = var(&mut mgr, 2);
        let z = var(&mut mgr, 3);
        let xy = mgr.conjunction(x, y);
        let f = mgr.conjunction(xy, !z);

        mgr.dec(x);
        mgr.dec(y);
        mgr.dec(z);
        mgr.dec(xy);
        assert_eq!(mgr.num_nodes(), 5);
        assert!(mgr.is_live(x));

        mgr.dec(f);
        assert_eq!(mgr.num_nodes(), 0);
        for r in [x, y, z, xy, f] {
            assert!(!mgr.is_live(r));
        }
    }

    #[test]
    fn test_freed_key_can_be_rebuilt() {
        let mut mgr = AigManager::new();
        let x = var(&mut mgr, 1);
        let y = var(&mut mgr, 2);
        let f = mgr.conjunction(x, y);
        mgr.dec(f);
        assert_eq!(mgr.num_nodes(), 2);
        let g = mgr.conjunction(y, x);
        assert_eq!(mgr.ref_count(g), 1);
        assert_eq!(mgr.children(g), Some((y, x)));
        assert_eq!(mgr.num_nodes(), 3);
    }

    #[test]
    fn test_deep_chain_release() {
        let mut mgr = AigManager::new();
        let mut acc = mgr.true_ref();
        for i in 1..=100_000 {
            let x = var(&mut mgr, i);
            let next = mgr.conjunction(acc, x);
            mgr.dec(x);
            mgr.dec(acc);
            acc = next;
        }
        assert_eq!(mgr.num_nodes(), 2 * 100_000 - 1);
        mgr.dec(acc);
        assert_eq!(mgr.num_nodes(), 0);
    }

    #[test]
    fn test_enlarge_keeps_references() {
        let mut mgr = AigManager::new();
        let refs: Vec<AigRef> = (1..=17).map(|i| var(&mut mgr, i)).collect();
        assert_eq!(mgr.capacity(), 32);
        for (i, &r) in refs.iter().enumerate() {
            assert_eq!(mgr.var(r), Some(Var::new(i as u32 + 1)));
            assert_eq!(var(&mut mgr, i as u32 + 1), r);
        }
    }

    #[test]
    fn test_tseitin_scratch() {
        let mut mgr = AigManager::new();
        let x = var(&mut mgr, 1);
        assert_eq!(mgr.tseitin_index(x), 0);
        mgr.set_tseitin_index(x, 5);
        assert_eq!(mgr.tseitin_index(!x), 5);
    }

    #[test]
    fn test_descendants() {
        let mut mgr = AigManager::new();
        let x = var(&mut mgr, 1);
        let y = var(&mut mgr, 2);
        let f = mgr.conjunction(x, !y);
        let mut expected = vec![x.index(), y.index(), f.index()];
        expected.sort();
        assert_eq!(mgr.descendants([!f]), expected);
        assert_eq!(mgr.descendants([AigRef::TRUE]), vec![0]);
    }

    #[test]
    fn test_counting_allocator_balance() {
        let mut mgr = AigManager::with_allocator(CountingAllocator::new());
        let x = var(&mut mgr, 1);
        let y = var(&mut mgr, 2);
        let f = mgr.conjunction(x, y);
        assert_eq!(mgr.allocator().live_bytes(), 3 * NODE_BYTES + 4 * BUCKET_BYTES);

        for r in [x, y, f] {
            mgr.dec(r);
        }
        assert_eq!(mgr.allocator().live_bytes(), 4 * BUCKET_BYTES);

        mgr.reset();
        assert_eq!(mgr.allocator().live_bytes(), 0);
        assert_eq!(mgr.capacity(), 0);
    }

    #[test]
    fn test_reset_with_outstanding_references() {
        let mut counting = CountingAllocator::new();
        {
            let mut mgr = AigManager::with_allocator(&mut counting);
            let x = var(&mut mgr, 1);
            let y = var(&mut mgr, 2);
            let _ = mgr.conjunction(x, y);
            mgr.reset();
            assert_eq!(mgr.num_nodes(), 0);
            assert_eq!(mgr.ref_count(AigRef::FALSE), 0);

            // Usable again after a reset.
            let z = var(&mut mgr, 3);
            assert_eq!(mgr.ref_count(z), 1);
        }
        // Dropping the manager tears everything down.
        assert_eq!(counting.live_bytes(), 0);
        assert!(counting.peak_bytes() > 0);
    }

    #[test]
    fn test_out_of_memory() {
        let limit = 2 * NODE_BYTES + 2 * BUCKET_BYTES;
        let mut mgr = AigManager::with_allocator(CountingAllocator::with_limit(limit));
        let x = var(&mut mgr, 1);
        let y = var(&mut mgr, 2);
        let res = mgr.try_conjunction(x, y);
        assert!(matches!(res, Err(AigError::OutOfMemory(_))));
        assert_eq!(mgr.num_nodes(), 2);
        assert_eq!(mgr.ref_count(x), 1);

        // Simplifications never allocate.
        let r = mgr.try_conjunction(x, x).unwrap();
        assert_eq!(r, x);
    }

    #[test]
    #[should_panic(expected = "out of memory")]
    fn test_out_of_memory_is_fatal() {
        let mut mgr = AigManager::with_allocator(CountingAllocator::with_limit(0));
        var(&mut mgr, 1);
    }

    #[test]
    fn test_with_config() {
        let config = AigConfig {
            bucket_bits: Some(4),
            reserve: 64,
        };
        let mgr = AigManager::with_config(CountingAllocator::new(), config);
        assert_eq!(mgr.capacity(), 16);
        assert_eq!(mgr.allocator().live_bytes(), 16 * BUCKET_BYTES);
    }

    #[test]
    #[should_panic(expected = "Reference counter overflow")]
    fn test_ref_count_overflow() {
        let mut mgr = AigManager::new();
        let x = var(&mut mgr, 1);
        mgr.table[x.index()].ref_count = u32::MAX;
        mgr.inc(x);
    }

    #[test]
    #[should_panic(expected = "is not live")]
    fn test_dead_reference() {
        let mut mgr = AigManager::new();
        let x = var(&mut mgr, 1);
        let y = var(&mut mgr, 2);
        mgr.dec(x);
        mgr.conjunction(x, y);
    }

    #[test]
    fn test_debug() {
        let mut mgr = AigManager::new();
        var(&mut mgr, 1);
        assert_eq!(format!("{:?}", mgr), "AigManager { nodes: 1, capacity: 1, slots: 2 }");
    }
}
