//! Small integer helpers

/// Number of decimal digits in `n` (1 for zero)
pub const fn count_digits(mut n: u64) -> u32 {
    if n == 0 {
        return 1;
    }

    let mut count = 0;
    while n > 0 {
        n /= 10;
        count += 1;
    }
    count
}

/// Shift `operand` left by `shift` decimal digits
pub const fn shl10(mut operand: u64, mut shift: u32) -> u64 {
    while shift > 0 {
        operand *= 10;
        shift -= 1;
    }
    operand
}

/// A modulo that always returns a non-negative result, even for negative
/// dividends. This is exactly the wraparound needed for toroidal grids.
pub const fn posmod(a: i32, b: i32) -> i32 {
    (a % b + b) % b
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn digit_counts() {
        assert_eq!(count_digits(0), 1);
        assert_eq!(count_digits(9), 1);
        assert_eq!(count_digits(10), 2);
        assert_eq!(count_digits(12345), 5);
    }

    #[test]
    fn decimal_shift() {
        assert_eq!(shl10(17, 0), 17);
        assert_eq!(shl10(17, 3), 17000);
    }

    #[test]
    fn concatenation_via_shift() {
        let lhs = 48u64;
        let rhs = 6u64;
        assert_eq!(shl10(lhs, count_digits(rhs)) + rhs, 486);
    }

    proptest! {
        #[test]
        fn posmod_is_always_in_range(a in i32::MIN / 2..i32::MAX / 2, b in 1i32..10_000) {
            let m = posmod(a, b);
            prop_assert!((0..b).contains(&m));
            // same residue class as a
            prop_assert_eq!((m - a).rem_euclid(b), 0);
        }
    }
}
