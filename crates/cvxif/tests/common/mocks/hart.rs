use cvxif_core::Hart;
use mockall::mock;
use mockall::predicate::eq;

mock! {
    pub Hart {}
    impl Hart for Hart {
        fn read_register(&self, idx: usize) -> u64;
        fn write_register(&mut self, idx: usize, val: u64);
        fn virtualized(&self) -> bool;
    }
}

/// Builds a hart that expects exactly one read of each listed register and no writes.
///
/// Any read of an unlisted register fails the test.
pub fn reads_once(values: &[(usize, u64)]) -> MockHart {
    let mut hart = MockHart::new();
    for &(idx, val) in values {
        let _ = hart
            .expect_read_register()
            .with(eq(idx))
            .times(1)
            .return_const(val);
    }
    let _ = hart.expect_write_register().never();
    hart
}

/// Builds a hart that must not be touched at all.
pub fn untouched() -> MockHart {
    let mut hart = MockHart::new();
    let _ = hart.expect_read_register().never();
    let _ = hart.expect_write_register().never();
    hart
}
