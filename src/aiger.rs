//! Binary AIGER reading and Tseitin translation to CNF.
//!
//! A combinational binary AIG ("big" header, also accepted with the standard "aig" tag)
//! with exactly one output is read in a single pass and translated into DIMACS clauses:
//!
//! ```text
//! big M I L O A
//! <output literal>
//! <A gates, each as two delta-encoded integers>
//! ```
//!
//! Literals follow the AIGER convention: the lowest bit is the sign, `lit >> 1` is the
//! variable index, and `0`/`1` are the constants false/true. In the CNF the constants are
//! represented by an extra variable `M + 1` that is asserted to be true.
//!
//! For a gate `L = R0 ∧ R1` the following clauses are produced:
//!
//! ```text
//! (¬L ∨ R0) (¬L ∨ R1) (L ∨ ¬R0 ∨ ¬R1)
//! ```
//!
//! so a circuit with `A` gates yields `3A + 2` clauses over `M + 1` variables, the last two
//! being the unit clauses for the constant true and for the output.

use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Read, Write};
use std::ops::Not;

use log::debug;

use crate::cnf::{Cnf, DimacsLit};

#[derive(Debug, thiserror::Error)]
pub enum AigerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    #[error("can not handle sequential models")]
    SequentialModel,
    #[error("expected exactly one output, found {0}")]
    OutputCount(u32),
    #[error("failed to read single output literal")]
    MissingOutput,
    #[error("output literal {literal} exceeds the maximum literal {max}")]
    InvalidOutput { literal: u32, max: u32 },
    #[error("unexpected end of file")]
    UnexpectedEof,
    #[error("invalid byte encoding: delta {delta} out of range for literal {bound}")]
    InvalidDelta { delta: u32, bound: u32 },
    #[error("invalid byte encoding: delta does not fit into 32 bits")]
    DeltaOverflow,
    #[error("maximum variable index {expected} does not match I + L + A = {found}")]
    GateCountMismatch { expected: u64, found: u64 },
}

/// An AIGER literal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Literal(u32);

impl Literal {
    pub const FALSE: Literal = Literal(0);
    pub const TRUE: Literal = Literal(1);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The positive literal of the given variable.
    pub const fn from_var(var: u32) -> Self {
        Self(var << 1)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn variable(self) -> u32 {
        self.0 >> 1
    }

    pub const fn is_negated(self) -> bool {
        self.0 & 1 != 0
    }

    pub const fn is_const(self) -> bool {
        self.variable() == 0
    }

    /// Map to a DIMACS literal; constants map onto variable `max_var + 1`.
    pub fn to_dimacs(self, max_var: u32) -> DimacsLit {
        let constant = (max_var + 1) as DimacsLit;
        match self.0 {
            0 => -constant,
            1 => constant,
            _ => {
                let var = self.variable() as DimacsLit;
                if self.is_negated() {
                    -var
                } else {
                    var
                }
            }
        }
    }
}

impl Not for Literal {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(self.0 ^ 1)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// An AND gate `lhs = rhs0 ∧ rhs1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AndGate {
    pub lhs: Literal,
    pub rhs0: Literal,
    pub rhs1: Literal,
}

impl AndGate {
    /// Create a gate; the inputs are ordered so that `rhs0 >= rhs1`.
    pub fn new(lhs: Literal, a: Literal, b: Literal) -> Self {
        let (rhs0, rhs1) = if a >= b { (a, b) } else { (b, a) };
        Self { lhs, rhs0, rhs1 }
    }

    /// The Tseitin clauses defining this gate.
    pub fn clauses(&self) -> [Vec<Literal>; 3] {
        let (l, r0, r1) = (self.lhs, self.rhs0, self.rhs1);
        [vec![!l, r0], vec![!l, r1], vec![l, !r0, !r1]]
    }

    /// Append the binary encoding (two deltas) to `out`.
    ///
    /// # Panics
    ///
    /// Panics unless `lhs > rhs0 >= rhs1`.
    pub fn encode(&self, out: &mut Vec<u8>) {
        assert!(self.lhs > self.rhs0, "Gate output must be above its inputs");
        assert!(self.rhs0 >= self.rhs1);
        encode_delta(self.lhs.0 - self.rhs0.0, out);
        encode_delta(self.rhs0.0 - self.rhs1.0, out);
    }
}

/// The `M I L O A` header.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Header {
    pub m: u32,
    pub i: u32,
    pub l: u32,
    pub o: u32,
    pub a: u32,
}

impl Header {
    fn parse(line: &str) -> Result<Self, AigerError> {
        let invalid = || AigerError::InvalidHeader(line.trim_end().to_string());

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("big") | Some("aig") => {}
            _ => return Err(invalid()),
        }
        let mut numbers = [0u32; 5];
        for n in numbers.iter_mut() {
            *n = tokens.next().and_then(|t| t.parse().ok()).ok_or_else(invalid)?;
        }
        if tokens.next().is_some() {
            return Err(invalid());
        }
        let [m, i, l, o, a] = numbers;
        if m >= i32::MAX as u32 {
            return Err(AigerError::InvalidHeader(format!("maximum variable index {} is too large", m)));
        }
        Ok(Self { m, i, l, o, a })
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "big {} {} {} {} {}", self.m, self.i, self.l, self.o, self.a)
    }
}

fn get(reader: &mut impl Read) -> Result<u8, AigerError> {
    let mut byte = [0u8; 1];
    match reader.read_exact(&mut byte) {
        Ok(()) => Ok(byte[0]),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(AigerError::UnexpectedEof),
        Err(e) => Err(e.into()),
    }
}

/// Read one delta: 7 bits per byte, least significant group first, high bit set on all
/// bytes but the last.
pub fn decode_delta(reader: &mut impl Read) -> Result<u32, AigerError> {
    let mut x: u64 = 0;
    let mut shift = 0;
    loop {
        let ch = get(reader)?;
        if shift > 28 {
            return Err(AigerError::DeltaOverflow);
        }
        if ch & 0x80 == 0 {
            x |= (ch as u64) << shift;
            break;
        }
        x |= ((ch & 0x7f) as u64) << shift;
        shift += 7;
    }
    u32::try_from(x).map_err(|_| AigerError::DeltaOverflow)
}

/// Append the delta encoding of `value` to `out`.
pub fn encode_delta(mut value: u32, out: &mut Vec<u8>) {
    while value & !0x7f != 0 {
        out.push((value & 0x7f) as u8 | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Write a combinational single-output binary AIG.
pub fn write_big(mut out: impl Write, inputs: u32, output: Literal, gates: &[AndGate]) -> io::Result<()> {
    let header = Header {
        m: inputs + gates.len() as u32,
        i: inputs,
        l: 0,
        o: 1,
        a: gates.len() as u32,
    };
    writeln!(out, "{}", header)?;
    writeln!(out, "{}", output)?;
    let mut bytes = Vec::new();
    for gate in gates {
        gate.encode(&mut bytes);
    }
    out.write_all(&bytes)
}

/// Single-pass reader of a combinational binary AIG with one output.
pub struct BigReader<R> {
    reader: R,
    header: Header,
    output: Literal,
    /// Output literal of the next gate.
    lhs: u32,
    remaining: u32,
}

impl<R: BufRead> BigReader<R> {
    /// Read and validate the header and the output literal.
    pub fn from_reader(mut reader: R) -> Result<Self, AigerError> {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let header = Header::parse(&line)?;
        debug!("header: {}", header);

        if header.l != 0 {
            return Err(AigerError::SequentialModel);
        }
        if header.o != 1 {
            return Err(AigerError::OutputCount(header.o));
        }
        let found = header.i as u64 + header.l as u64 + header.a as u64;
        if found != header.m as u64 {
            return Err(AigerError::GateCountMismatch {
                expected: header.m as u64,
                found,
            });
        }

        line.clear();
        reader.read_line(&mut line)?;
        let output = line.trim().parse().map(Literal::new).map_err(|_| AigerError::MissingOutput)?;
        let max = 2 * header.m + 1;
        if output.raw() > max {
            return Err(AigerError::InvalidOutput {
                literal: output.raw(),
                max,
            });
        }

        Ok(Self {
            reader,
            header,
            output,
            lhs: 2 * (header.i + header.l + 1),
            remaining: header.a,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn output(&self) -> Literal {
        self.output
    }

    /// Decode the next gate, or `None` once all gates are read.
    pub fn read_gate(&mut self) -> Result<Option<AndGate>, AigerError> {
        if self.remaining == 0 {
            return Ok(None);
        }

        let lhs = self.lhs;
        let delta = decode_delta(&mut self.reader)?;
        if delta >= lhs {
            return Err(AigerError::InvalidDelta { delta, bound: lhs });
        }
        let rhs0 = lhs - delta;

        let delta = decode_delta(&mut self.reader)?;
        if delta > rhs0 {
            return Err(AigerError::InvalidDelta { delta, bound: rhs0 });
        }
        let rhs1 = rhs0 - delta;

        self.lhs += 2;
        self.remaining -= 1;
        Ok(Some(AndGate {
            lhs: Literal::new(lhs),
            rhs0: Literal::new(rhs0),
            rhs1: Literal::new(rhs1),
        }))
    }

    /// Number of clauses of the full translation.
    pub fn num_clauses(&self) -> usize {
        3 * self.header.a as usize + 2
    }

    /// Translate the whole circuit, consuming the reader.
    pub fn into_cnf(mut self) -> Result<Cnf, AigerError> {
        let max_var = self.header.m;
        let mut cnf = Cnf::new(max_var + 1);
        while let Some(gate) = self.read_gate()? {
            for clause in gate.clauses() {
                cnf.add_clause(clause.iter().map(|lit| lit.to_dimacs(max_var)));
            }
        }
        debug_assert_eq!(self.lhs, 2 * (max_var + 1));
        cnf.add_clause([Literal::new(self.lhs).to_dimacs(max_var)]);
        cnf.add_clause([self.output.to_dimacs(max_var)]);
        Ok(cnf)
    }
}

impl<R: BufRead> Iterator for BigReader<R> {
    type Item = Result<AndGate, AigerError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_gate().transpose()
    }
}

/// Translate a binary AIG read from `reader` into CNF.
pub fn big_to_cnf(reader: impl BufRead) -> Result<Cnf, AigerError> {
    BigReader::from_reader(reader)?.into_cnf()
}
