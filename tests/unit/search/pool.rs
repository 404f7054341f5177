//! Tests for used-piece flags and their release guard

#[cfg(test)]
mod tests {
    use pentomino::search::pool::PiecePool;

    // Tests a new pool has every piece available
    // Verified by initializing the flags as used
    #[test]
    fn test_new_pool_is_available() {
        let pool = PiecePool::new(12);
        assert_eq!(pool.len(), 12);
        assert_eq!(pool.remaining(), 12);
        assert!(!pool.is_exhausted());
        assert!((0..12).all(|index| pool.is_available(index)));
        assert_eq!(pool.available(), (0..12).collect::<Vec<_>>());
    }

    // Tests taking a piece marks it used until the guard drops
    // Verified by releasing the piece inside take
    #[test]
    fn test_take_and_release() {
        let mut pool = PiecePool::new(3);
        {
            let mut taken = pool.take(1);
            assert!(!taken.pool().is_available(1));
            assert_eq!(taken.pool().available(), vec![0, 2]);
            assert_eq!(taken.pool().remaining(), 2);
        }
        assert!(pool.is_available(1));
        assert_eq!(pool.remaining(), 3);
    }

    // Tests nested guards release in reverse order back to the start state
    // Verified by clearing every flag when any guard drops
    #[test]
    fn test_nested_guards() {
        let mut pool = PiecePool::new(2);
        let start = pool.clone();
        {
            let mut outer = pool.take(0);
            {
                let mut inner = outer.pool().take(1);
                assert!(inner.pool().is_exhausted());
            }
            assert!(!outer.pool().is_exhausted());
            assert!(!outer.pool().is_available(0));
        }
        assert_eq!(pool, start);
    }

    // Tests an empty pool is exhausted from the start
    // Verified by requiring at least one set flag for exhaustion
    #[test]
    fn test_empty_pool_is_exhausted() {
        let pool = PiecePool::new(0);
        assert!(pool.is_empty());
        assert!(pool.is_exhausted());
        assert!(!pool.is_available(0));
    }

    // Tests out-of-range indices are neither available nor mutated
    // Verified by removing the bounds test from take
    #[test]
    fn test_take_out_of_range() {
        let mut pool = PiecePool::new(2);
        {
            let _taken = pool.take(5);
        }
        assert_eq!(pool.remaining(), 2);
        assert!(!pool.is_available(5));
    }

    // Tests the pool summary format
    // Verified by reporting used pieces instead of remaining ones
    #[test]
    fn test_display() {
        let mut pool = PiecePool::new(12);
        let mut taken = pool.take(3);
        assert_eq!(taken.pool().to_string(), "PiecePool(11 of 12 remaining)");
    }
}
