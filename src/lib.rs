//! # aig-rs: And-Inverter Graphs in Rust
//!
//! **`aig-rs`** is a small, manager-centric library for building **And-Inverter Graphs (AIGs)**
//! with structural sharing and deterministic reference counting.
//! It is meant as the circuit layer under bounded model checkers and CNF encoders.
//!
//! ## What is an AIG?
//!
//! An And-Inverter Graph represents a boolean function as a directed acyclic graph whose
//! inner nodes are two-input conjunctions and whose edges may be complemented.
//! Negation never allocates: it flips the low bit of a reference.
//! Unlike a BDD, an AIG is not canonical, but hash consing guarantees that a structurally
//! identical conjunction is never created twice.
//!
//! ## Key Features
//!
//! - **Manager-Centric Architecture**: all nodes live in an [`AigManager`][crate::aig::AigManager],
//!   which owns the unique table and the allocator.
//! - **Compact handles**: [`AigRef`][crate::reference::AigRef] is a single `u32`:
//!   the node index shifted left by one, plus a sign bit (the AIGER literal layout).
//! - **Deterministic memory**: every returned reference carries a count unit. Releasing the
//!   last unit frees the node and cascades to its children without recursion.
//! - **Injected allocator**: the manager reports every node and bucket array to an
//!   [`Allocator`][crate::alloc::Allocator], so callers can cap or audit memory.
//! - **Format surface**: a reader for the binary AIGER format and a Tseitin translation to
//!   DIMACS CNF.
//!
//! ## Basic Usage
//!
//! ```rust
//! use aig_rs::aig::AigManager;
//! use aig_rs::types::{Slice, Var};
//!
//! // 1. Initialize the manager
//! let mut mgr = AigManager::new();
//!
//! // 2. Create variables (keys are non-zero, slices start at 0)
//! let x1 = mgr.variable(Var::new(1), Slice::ZERO);
//! let x2 = mgr.variable(Var::new(2), Slice::ZERO);
//!
//! // 3. Build f = x1 AND (NOT x2)
//! let f = mgr.conjunction(x1, !x2);
//! assert!(mgr.is_conjunction(f));
//!
//! // 4. Contradictions simplify to false
//! let g = mgr.conjunction(f, !f);
//! assert!(mgr.is_false(g));
//!
//! // 5. Release everything
//! for r in [x1, x2, f, g] {
//!     mgr.dec(r);
//! }
//! assert_eq!(mgr.num_nodes(), 0);
//! ```
//!
//! ## Core Components
//!
//! - **[`aig`]**: the [`AigManager`][crate::aig::AigManager], construction and reference counting.
//! - **[`aiger`]**: the binary AIGER reader and the AIG to CNF translation.
//! - **[`dot`]**: utilities for visualizing AIGs using Graphviz.

pub mod aig;
pub mod aiger;
pub mod alloc;
pub mod cnf;
pub mod dot;
pub mod node;
pub mod reference;
pub mod table;
pub mod types;
pub mod utils;
