//! Integer operations.

/// Largest input whose factorial fits in a `u64`.
pub const FACTORIAL_MAX: u8 = 20;

/// Trial division over 2, 3 and the 6k±1 wheel.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i: i64 = 5;
    // i <= n / i is i * i <= n without the overflow near i64::MAX
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Iterative factorial of a value already bounded to `0..=FACTORIAL_MAX`.
pub fn factorial(n: u8) -> u64 {
    debug_assert!(n <= FACTORIAL_MAX, "{}! overflows u64", n);
    (2..=u64::from(n)).product()
}
