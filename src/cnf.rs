//! CNF formulas in DIMACS form.

use std::fmt::{Display, Formatter};
use std::io::{self, Write};

/// A DIMACS literal: a non-zero variable index, negative when negated.
pub type DimacsLit = i32;

/// A formula in conjunctive normal form.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Cnf {
    num_vars: u32,
    clauses: Vec<Vec<DimacsLit>>,
}

impl Cnf {
    pub fn new(num_vars: u32) -> Self {
        Self {
            num_vars,
            clauses: Vec::new(),
        }
    }

    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> &[Vec<DimacsLit>] {
        &self.clauses
    }

    /// Add a clause.
    ///
    /// # Panics
    ///
    /// Panics on the literal 0 or on a variable above `num_vars`.
    pub fn add_clause(&mut self, lits: impl IntoIterator<Item = DimacsLit>) {
        let clause: Vec<DimacsLit> = lits.into_iter().collect();
        for &lit in clause.iter() {
            assert_ne!(lit, 0, "Literal 0 is the clause terminator");
            assert!(
                lit.unsigned_abs() <= self.num_vars,
                "Variable {} is out of range 1..={}",
                lit.unsigned_abs(),
                self.num_vars
            );
        }
        self.clauses.push(clause);
    }

    /// Write the formula in DIMACS format.
    pub fn write_dimacs(&self, mut out: impl Write) -> io::Result<()> {
        write_header(&mut out, self.num_vars, self.clauses.len())?;
        for clause in self.clauses.iter() {
            write_clause(&mut out, clause)?;
        }
        Ok(())
    }
}

impl Display for Cnf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "p cnf {} {}", self.num_vars, self.clauses.len())?;
        for clause in self.clauses.iter() {
            for lit in clause.iter() {
                write!(f, "{} ", lit)?;
            }
            writeln!(f, "0")?;
        }
        Ok(())
    }
}

/// Write the `p cnf` problem line.
pub fn write_header(mut out: impl Write, num_vars: u32, num_clauses: usize) -> io::Result<()> {
    writeln!(out, "p cnf {} {}", num_vars, num_clauses)
}

/// Write one clause followed by the terminating `0`.
pub fn write_clause(mut out: impl Write, clause: &[DimacsLit]) -> io::Result<()> {
    for lit in clause {
        write!(out, "{} ", lit)?;
    }
    writeln!(out, "0")
}
