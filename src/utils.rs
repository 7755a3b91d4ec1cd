/// Odd multiplicative constants used to mix the components of a node key.
const MIX: [u64; 4] = [
    0x9E37_79B9_7F4A_7C15,
    0xC2B2_AE3D_27D4_EB4F,
    0x1656_67B1_9E37_79F9,
    0x27D4_EB2F_1656_67C5,
];

/// Multiplicative mixing of four `u64` values.
///
/// The high half is folded into the low half, so masking the result to the
/// table size still depends on every input bit.
pub fn mix4(a: u64, b: u64, c: u64, d: u64) -> u64 {
    let h = a
        .wrapping_mul(MIX[0])
        .wrapping_add(b.wrapping_mul(MIX[1]))
        .wrapping_add(c.wrapping_mul(MIX[2]))
        .wrapping_add(d.wrapping_mul(MIX[3]));
    h ^ (h >> 32)
}

pub trait MyHash {
    /// Deterministic (within one run) hash used for bucket selection.
    fn hash(&self) -> u64;
}

impl MyHash for u64 {
    fn hash(&self) -> u64 {
        mix4(*self, 0, 0, 0)
    }
}
