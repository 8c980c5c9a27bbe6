//! Test helpers for integration tests
//!
//! Assertions over mapping results and quiet mapper instances.

use chat_common::{try_init_tracing_with_config, TracingConfig};
use chat_mapper::{CompletedMapping, DataMapper, MapperConfig, MappingError, MappingErrorKind};

/// Install a test subscriber once per test binary; later calls are no-ops
pub fn init_test_tracing() {
    let _ = try_init_tracing_with_config(&TracingConfig::development());
}

/// Data mapper that keeps errors out of the test output
pub fn quiet_mapper() -> DataMapper {
    DataMapper::new(MapperConfig::default()).with_error_logging(false)
}

/// Data mapper that qualifies nested error paths
pub fn qualifying_mapper() -> DataMapper {
    DataMapper::new(MapperConfig {
        qualify_error_paths: true,
        ..MapperConfig::default()
    })
    .with_error_logging(false)
}

/// Assert a mapping produced a result and no errors, and return the result
pub fn assert_clean<T: std::fmt::Debug>(mapping: CompletedMapping<T>) -> T {
    assert!(mapping.errors.is_empty(), "unexpected errors: {:?}", mapping.errors);
    mapping.result.expect("mapping produced no result")
}

/// Kinds of the recorded errors, in order
pub fn error_kinds(errors: &[MappingError]) -> Vec<MappingErrorKind> {
    errors.iter().map(MappingError::kind).collect()
}

/// Field names of the recorded errors, in order
pub fn error_fields(errors: &[MappingError]) -> Vec<&str> {
    errors.iter().map(MappingError::field_name).collect()
}
