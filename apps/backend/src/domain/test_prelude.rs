use proptest::test_runner::Config as ProptestConfig;

/// Shared proptest configuration for domain property tests.
pub fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}
