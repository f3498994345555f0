//! Iterative Fibonacci over fixed-width unsigned integers.
//!
//! The sequence is defined by F(0) = 0, F(1) = 1 and
//! F(n) = F(n-1) + F(n-2), evaluated here with 32-bit wraparound
//! arithmetic.

/// Computes the n-th Fibonacci number, with `fib(0) = 0` and `fib(1) = 1`.
///
/// Addition wraps modulo 2^32, matching 32-bit unsigned overflow
/// semantics: no error is raised, and the first wrapped term is
/// `fib(48) = 512559680`.
pub fn fib(n: u32) -> u32 {
    if n <= 1 {
        return n;
    }
    let mut prev: u32 = 0;
    let mut curr: u32 = 1;
    // curr holds F(i) and prev holds F(i-1) at each step, i running 1..n
    for _ in 1..n {
        let next = prev.wrapping_add(curr);
        prev = curr;
        curr = next;
    }
    curr
}
