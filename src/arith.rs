//! Modular arithmetic on u64 residues.
//!
//! All inputs are assumed already reduced into [0, m).

/// Modular multiplication: (a * b) mod m, via u128.
#[inline(always)]
pub const fn mulmod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Modular addition: (a + b) mod m.
#[inline(always)]
pub const fn addmod(a: u64, b: u64, m: u64) -> u64 {
    let s = a as u128 + b as u128;
    (if s >= m as u128 { s - m as u128 } else { s }) as u64
}

/// Modular subtraction: (a - b) mod m.
#[inline(always)]
pub const fn submod(a: u64, b: u64, m: u64) -> u64 {
    if a >= b { a - b } else { (a as u128 + m as u128 - b as u128) as u64 }
}

/// Reduce a signed value into [0, m).
#[inline(always)]
pub fn from_signed(x: i64, m: u64) -> u64 {
    (x as i128).rem_euclid(m as i128) as u64
}

/// Distance of x from 0 on the ring Z_m: min(x, m - x).
#[inline(always)]
pub const fn centered_abs(x: u64, m: u64) -> u64 {
    let y = m - x;
    if x <= y { x } else { y }
}

/// Inner product ⟨a, b⟩ mod m.
pub fn inner_product(a: &[u64], b: &[u64], m: u64) -> u64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .fold(0u64, |acc, (&x, &y)| addmod(acc, mulmod(x, y, m), m))
}

/// Element-wise (acc + row) mod m, in place.
pub fn add_assign(acc: &mut [u64], row: &[u64], m: u64) {
    debug_assert_eq!(acc.len(), row.len());
    for (x, &y) in acc.iter_mut().zip(row) {
        *x = addmod(*x, y, m);
    }
}
