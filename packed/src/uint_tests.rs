#[cfg(test)]
mod tests {
    use crate::{PackedBigUint, PackedError, MAX_BASE};

    fn digits(x: &PackedBigUint) -> Vec<u64> {
        x.digits().collect()
    }

    // ======================================================================
    // set_digit past the addressable range
    // ======================================================================

    #[test]
    fn test_set_digit_overflowing_index_keeps_value() {
        // 8 bits per digit: the bit offset of this index does not fit in a usize.
        let mut x = PackedBigUint::new(5, 256).unwrap();
        let capacity = x.capacity_bytes();

        let err = x.set_digit(usize::MAX / 8 + 1, 7).unwrap_err();

        assert!(matches!(err, PackedError::AllocationFailure { .. }));
        assert_eq!(digits(&x), vec![5]);
        assert_eq!(x.digit_count(), 1);
        assert_eq!(x.capacity_bytes(), capacity);
        assert_eq!(x.digit(0), 5);
    }

    #[test]
    fn test_set_digit_at_usize_max() {
        let mut x = PackedBigUint::new(1, 2).unwrap();
        let err = x.set_digit(usize::MAX, 1).unwrap_err();

        assert!(matches!(err, PackedError::AllocationFailure { .. }));
        assert_eq!(digits(&x), vec![1]);
    }

    #[test]
    fn test_set_digit_unallocatable_index() {
        // Addressable, but far more memory than any machine has.
        let mut x = PackedBigUint::new(123, 10).unwrap();
        let capacity = x.capacity_bytes();
        let bytes = x.as_bytes().to_vec();

        let err = x.set_digit(1 << 60, 1).unwrap_err();

        assert!(matches!(err, PackedError::AllocationFailure { .. }));
        assert_eq!(digits(&x), vec![3, 2, 1]);
        assert_eq!(x.digit_count(), 3);
        assert_eq!(x.capacity_bytes(), capacity);
        assert_eq!(x.as_bytes(), &bytes[..]);

        // Still usable afterwards.
        x.add_scalar(7).unwrap();
        assert_eq!(digits(&x), vec![0, 3, 1]);
    }

    #[test]
    fn test_set_digit_zero_past_top_is_noop() {
        let mut x = PackedBigUint::new(4, 10).unwrap();
        x.set_digit(usize::MAX, 0).unwrap();
        assert_eq!(digits(&x), vec![4]);
    }

    // ======================================================================
    // Headroom after a carry
    // ======================================================================

    #[test]
    fn test_carry_leaves_room_for_next_digit() {
        let top = MAX_BASE - 1;
        let mut x = PackedBigUint::from_digits(&[top], MAX_BASE).unwrap();
        let y = PackedBigUint::from_digits(&[top], MAX_BASE).unwrap();

        x.add_assign(&y).unwrap();

        assert_eq!(digits(&x), vec![MAX_BASE - 2, 1]);
        assert_eq!(x.bits_per_digit(), 63);
        assert!(x.capacity_bytes() * 8 >= x.bits_per_digit() * (x.digit_count() + 1));
    }

    #[test]
    fn test_headroom_holds_across_repeated_carries() {
        for base in [2u64, 10, 255, MAX_BASE] {
            let mut x = PackedBigUint::new(1, base).unwrap();
            for _ in 0..70 {
                let copy = x.clone();
                x.add_assign(&copy).unwrap();
                assert!(
                    x.capacity_bytes() * 8 >= x.bits_per_digit() * (x.digit_count() + 1),
                    "base {base}, {} digits in {} bytes",
                    x.digit_count(),
                    x.capacity_bytes()
                );
            }
        }
    }
}
