//! Logging facade over the mapper
//!
//! REST wrappers and gateway handlers go through [`DataMapper`]: it maps,
//! reports every recorded error through `tracing`, and hands back the result.

use serde_json::Value;

use crate::completed::CompletedMapping;
use crate::descriptor::Mappable;
use crate::error::{MapperError, MappingError};
use crate::mapper::{Mapper, MapperConfig};
use crate::raw::value_kind;

/// Mapper that logs what went wrong
#[derive(Debug, Clone)]
pub struct DataMapper {
    mapper: Mapper,
    log_errors: bool,
}

impl Default for DataMapper {
    fn default() -> Self {
        Self::new(MapperConfig::default())
    }
}

impl DataMapper {
    #[must_use]
    pub fn new(config: MapperConfig) -> Self {
        Self {
            mapper: Mapper::new(config),
            log_errors: true,
        }
    }

    /// Turn error logging on or off
    #[must_use]
    pub fn with_error_logging(mut self, enabled: bool) -> Self {
        self.log_errors = enabled;
        self
    }

    #[must_use]
    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    /// Map a payload and keep only the result
    pub fn map<T: Mappable>(&self, raw: &Value) -> Option<T> {
        self.map_completed(raw).result
    }

    /// Map a payload, logging its errors but keeping them
    pub fn map_completed<T: Mappable>(&self, raw: &Value) -> CompletedMapping<T> {
        let mapping = self.mapper.map::<T>(raw);
        self.report(T::TYPE_NAME, &mapping.errors);
        mapping
    }

    /// Map every element of a list payload
    pub fn map_array<T: Mappable>(&self, raw: &Value) -> Vec<Option<T>> {
        let Value::Array(items) = raw else {
            if self.log_errors {
                tracing::warn!(
                    target_type = T::TYPE_NAME,
                    found = value_kind(raw),
                    "Expected a list payload"
                );
            }
            return Vec::new();
        };

        items.iter().map(|item| self.map::<T>(item)).collect()
    }

    /// Decode a JSON body and map it
    ///
    /// Only the decode step can fail; mapping problems stay in the returned
    /// errors.
    pub fn map_json<T: Mappable>(&self, body: &str) -> Result<CompletedMapping<T>, MapperError> {
        let raw: Value = serde_json::from_str(body)?;
        Ok(self.map_completed(&raw))
    }

    fn report(&self, target_type: &'static str, errors: &[MappingError]) {
        if !self.log_errors {
            return;
        }

        for error in errors {
            tracing::warn!(
                target_type,
                owner = error.target_type(),
                field = error.field_name(),
                kind = %error.kind(),
                cause = ?error.cause().map(ToString::to_string),
                "{}",
                error.message()
            );
        }
    }
}
