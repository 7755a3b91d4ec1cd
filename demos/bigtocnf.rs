//! Translate a combinational binary AIGER file into DIMACS CNF.
//!
//! Run with: `cargo run --example bigtocnf -- circuit.big > circuit.cnf`
//!
//! Files ending in `.gz` are decompressed on the fly.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use aig_rs::aiger::{BigReader, Literal};
use aig_rs::cnf::{write_clause, write_header};
use clap::Parser;
use flate2::read::GzDecoder;
use log::info;

#[derive(Parser)]
#[command(name = "bigtocnf")]
#[command(about = "Translate a binary AIGER circuit with one output into DIMACS CNF")]
struct Args {
    /// Input file, optionally gzip-compressed (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Parse the input without printing the CNF
    #[arg(long)]
    read_only: bool,

    /// Log header and statistics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Warn
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    match &args.file {
        Some(path) => {
            info!("reading {}", path.display());
            let file = File::open(path)?;
            let is_gzip = path.extension().and_then(|e| e.to_str()) == Some("gz");
            if is_gzip {
                convert(BufReader::new(GzDecoder::new(file)), args.read_only)
            } else {
                convert(BufReader::new(file), args.read_only)
            }
        }
        None => convert(io::stdin().lock(), args.read_only),
    }
}

fn convert(input: impl io::BufRead, read_only: bool) -> color_eyre::Result<()> {
    let time_total = std::time::Instant::now();

    let mut reader = BigReader::from_reader(input)?;
    let header = *reader.header();
    let output = reader.output();
    let max_var = header.m;
    info!("{}", header);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if !read_only {
        write_header(&mut out, max_var + 1, reader.num_clauses())?;
    }

    while let Some(gate) = reader.read_gate()? {
        if !read_only {
            for clause in gate.clauses() {
                let lits: Vec<_> = clause.iter().map(|lit| lit.to_dimacs(max_var)).collect();
                write_clause(&mut out, &lits)?;
            }
        }
    }

    if !read_only {
        // Unit clause for constant true on variable M + 1.
        write_clause(&mut out, &[Literal::from_var(max_var + 1).to_dimacs(max_var)])?;
        write_clause(&mut out, &[output.to_dimacs(max_var)])?;
    }
    out.flush()?;

    info!("converted {} gates in {:.3} s", header.a, time_total.elapsed().as_secs_f64());
    Ok(())
}
