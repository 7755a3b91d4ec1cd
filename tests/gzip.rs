use std::io::{BufReader, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use test_log::test;

use aig_rs::aiger::{big_to_cnf, write_big, AndGate, BigReader, Literal};

fn circuit() -> Vec<u8> {
    let g1 = AndGate::new(Literal::new(6), Literal::new(2), Literal::new(5));
    let g2 = AndGate::new(Literal::new(8), Literal::new(7), Literal::new(4));
    let mut bytes = Vec::new();
    write_big(&mut bytes, 2, Literal::new(9), &[g1, g2]).unwrap();
    bytes
}

fn compress(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

#[test]
fn compressed_input_matches_plain() {
    let plain = circuit();
    let packed = compress(&plain);
    assert_ne!(packed, plain);

    let expected = big_to_cnf(plain.as_slice()).unwrap();
    let cnf = big_to_cnf(BufReader::new(GzDecoder::new(packed.as_slice()))).unwrap();
    assert_eq!(cnf, expected);
    assert_eq!(cnf.num_clauses(), 3 * 2 + 2);
}

#[test]
fn compressed_input_streams_gates() {
    let packed = compress(&circuit());
    let reader = BigReader::from_reader(BufReader::new(GzDecoder::new(packed.as_slice()))).unwrap();
    assert_eq!(reader.header().a, 2);
    let gates = reader.collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(gates.len(), 2);
    assert_eq!(gates[1].lhs, Literal::new(8));
}
