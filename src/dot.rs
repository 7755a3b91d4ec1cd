//! AIG to DOT (Graphviz) conversion.
//!
//! The generated DOT output follows these conventions:
//! - The **false node** is rendered as a square at the bottom (sink rank)
//! - **Variable nodes** are rendered as circles labelled `var@slice`, grouped at the bottom rank
//! - **Conjunction nodes** are rendered as circles labelled `∧`
//! - **Edges** point from a conjunction to its children; negated edges are dotted with a hollow circle
//! - **Root nodes** are rendered as rectangles at the top (source rank)
//!
//! # Examples
//!
//! ```
//! use aig_rs::aig::AigManager;
//! use aig_rs::types::{Slice, Var};
//!
//! let mut mgr = AigManager::new();
//! let x1 = mgr.variable(Var::new(1), Slice::ZERO);
//! let x2 = mgr.variable(Var::new(2), Slice::ZERO);
//! let f = mgr.conjunction(x1, !x2);
//!
//! let dot = mgr.to_dot(&[f]).unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! ```

use std::fmt::Write as _;

use crate::aig::AigManager;
use crate::alloc::Allocator;
use crate::reference::AigRef;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for variable nodes (default: "circle")
    pub var_shape: &'static str,
    /// Shape for conjunction nodes (default: "circle")
    pub and_shape: &'static str,
    /// Shape for the false node (default: "square")
    pub false_shape: &'static str,
    /// Shape for root nodes (default: "rect")
    pub root_shape: &'static str,
    /// Style for regular edges (default: "solid")
    pub edge_style: &'static str,
    /// Style for negated edges (default: "dotted")
    pub negated_edge_style: &'static str,
    /// Whether to show the time slice in variable labels (default: true)
    pub show_slices: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            var_shape: "circle",
            and_shape: "circle",
            false_shape: "square",
            root_shape: "rect",
            edge_style: "solid",
            negated_edge_style: "dotted",
            show_slices: true,
        }
    }
}

impl<A: Allocator> AigManager<A> {
    /// Converts the sub-graph reachable from `roots` to DOT format.
    ///
    /// Shared nodes are displayed once.
    pub fn to_dot(&self, roots: &[AigRef]) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(roots, &DotConfig::default())
    }

    /// Converts the sub-graph reachable from `roots` to DOT format with custom configuration.
    pub fn to_dot_with_config(&self, roots: &[AigRef], config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;

        writeln!(dot, "{{ rank=sink")?;
        writeln!(dot, "0 [shape={}, label=\"0\"];", config.false_shape)?;
        writeln!(dot, "}}")?;

        let all_nodes = self.descendants(roots.iter().copied());

        let mut vars = Vec::new();
        let mut ands = Vec::new();
        for &id in all_nodes.iter() {
            let r = AigRef::positive(id);
            if let Some(slice) = self.slice(r) {
                vars.push((id, self.var(r), slice));
            } else if self.is_conjunction(r) {
                ands.push(id);
            }
        }

        writeln!(dot, "{{ rank=same")?;
        for (id, var, slice) in vars {
            let var = var.map_or("?".to_string(), |v| v.to_string());
            let label = if config.show_slices {
                format!("{}@{}", var, slice)
            } else {
                var
            };
            writeln!(dot, "{} [shape={}, label=\"{}\"];", id, config.var_shape, label)?;
        }
        writeln!(dot, "}}")?;

        for &id in ands.iter() {
            writeln!(dot, "{} [shape={}, label=\"∧\"];", id, config.and_shape)?;
            if let Some((left, right)) = self.children(AigRef::positive(id)) {
                for child in [left, right] {
                    write_edge(&mut dot, &id.to_string(), child, config)?;
                }
            }
        }

        writeln!(dot, "{{ rank=source")?;
        for (i, root) in roots.iter().enumerate() {
            writeln!(dot, "r{} [shape={}, label=\"{}\"];", i, config.root_shape, root)?;
        }
        writeln!(dot, "}}")?;

        for (i, &root) in roots.iter().enumerate() {
            write_edge(&mut dot, &format!("r{}", i), root, config)?;
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

fn write_edge(dot: &mut String, from: &str, to: AigRef, config: &DotConfig) -> std::fmt::Result {
    if to.is_negated() {
        writeln!(
            dot,
            "{} -> {} [style={}, arrowhead=odot];",
            from,
            to.index(),
            config.negated_edge_style
        )
    } else {
        writeln!(dot, "{} -> {} [style={}];", from, to.index(), config.edge_style)
    }
}
