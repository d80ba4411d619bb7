//! Fast-doubling Fibonacci and Lucas numbers
//!
//! O(log n) doubling identities over arbitrary-precision integers:
//! F(2k) = F(k)·(2·F(k+1) − F(k)) and F(2k+1) = F(k)² + F(k+1)².
//! Outputs overflow 64 bits quickly (F(93) already does), hence BigUint.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// F(n). Negative indices clamp to 0.
pub fn fibonacci(n: i64) -> BigUint {
    if n <= 0 {
        return BigUint::zero();
    }
    fib_pair(n as u64).0
}

/// L(n) = 2·F(n+1) − F(n), with L(0) = 2. Negative indices clamp to 0.
pub fn lucas(n: i64) -> BigUint {
    if n <= 0 {
        return BigUint::from(2u8);
    }
    let (f_n, f_n1) = fib_pair(n as u64);
    f_n1 * 2u8 - f_n
}

/// Returns (F(n), F(n+1))
fn fib_pair(n: u64) -> (BigUint, BigUint) {
    if n == 0 {
        return (BigUint::zero(), BigUint::one());
    }
    let (a, b) = fib_pair(n >> 1);
    // a = F(k), b = F(k+1)
    let c = &a * (&b * 2u8 - &a); // F(2k)
    let d = &a * &a + &b * &b; // F(2k+1)
    if n & 1 == 0 {
        (c, d)
    } else {
        let e = c + &d; // F(2k+2)
        (d, e)
    }
}
