//! Mapper engine
//!
//! Walks a raw payload against the target type's descriptor. Every call
//! builds a fresh instance and returns it together with its errors; parents
//! fold nested results into their own error list.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::completed::CompletedMapping;
use crate::descriptor::{Apply, FieldDescriptor, FieldKind, Mappable, MappableEnum};
use crate::error::{MappingError, MappingErrorKind};
use crate::raw::{array_entries, MappedArray};
use crate::registry;

/// Mapper settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MapperConfig {
    /// Deepest nesting level mapped before giving up on a subtree
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Prefix nested error field names with their parent path
    /// (`author.id` instead of `id`)
    #[serde(default)]
    pub qualify_error_paths: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            qualify_error_paths: false,
        }
    }
}

fn default_max_depth() -> usize {
    64
}

/// Converts raw payloads into [`Mappable`] types
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    config: MapperConfig,
}

impl Mapper {
    #[must_use]
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Map a raw payload onto `T`
    ///
    /// Keyed mappings fill a default `T` field by field; any other value goes
    /// through `T::construct`. Never fails outright: problems are recorded in
    /// the returned errors, and `result` is `None` only when `T` could not be
    /// instantiated.
    pub fn map<T: Mappable>(&self, raw: &Value) -> CompletedMapping<T> {
        self.map_at(raw, 0)
    }

    fn map_at<T: Mappable>(&self, raw: &Value, depth: usize) -> CompletedMapping<T> {
        if depth > self.config.max_depth {
            tracing::debug!(
                target_type = T::TYPE_NAME,
                max_depth = self.config.max_depth,
                "Payload nesting too deep, skipping subtree"
            );
            return CompletedMapping::failed(MappingError::depth_exceeded(
                T::TYPE_NAME,
                self.config.max_depth,
            ));
        }

        match raw {
            Value::Object(fields) => self.map_keyed(fields, depth),
            other => match T::construct(other) {
                Ok(instance) => CompletedMapping::ok(instance),
                Err(cause) => {
                    CompletedMapping::failed(MappingError::instantiation(T::TYPE_NAME, cause))
                }
            },
        }
    }

    fn map_keyed<T: Mappable>(&self, fields: &Map<String, Value>, depth: usize) -> CompletedMapping<T> {
        let descriptor = registry::describe::<T>();
        let mut instance = T::default();
        let mut errors = Vec::new();

        for (key, raw) in fields {
            let Some(field) = descriptor.field(key) else {
                errors.push(MappingError::unknown_field(key, T::TYPE_NAME));
                continue;
            };

            let mut scope = FieldScope {
                mapper: self,
                depth,
                field: field.name(),
                owner: T::TYPE_NAME,
                errors: &mut errors,
            };
            scope.set(&mut instance, field, raw);
        }

        CompletedMapping::new(Some(instance), errors)
    }
}

/// State for setting one field of the instance under construction
pub(crate) struct FieldScope<'m> {
    mapper: &'m Mapper,
    depth: usize,
    field: &'static str,
    owner: &'static str,
    errors: &'m mut Vec<MappingError>,
}

impl FieldScope<'_> {
    fn set<T>(&mut self, instance: &mut T, field: &FieldDescriptor<T>, raw: &Value) {
        match field.kind() {
            FieldKind::Unsupported => {
                self.errors
                    .push(MappingError::unsupported_type(self.field, self.owner));
                return;
            }
            FieldKind::Array(_) if !(raw.is_array() || raw.is_object()) => {
                self.errors.push(MappingError::array_shape(self.field, self.owner));
                return;
            }
            _ => {}
        }

        match field.apply() {
            Apply::Assign(assign) => {
                if let Err(cause) = assign(instance, raw.clone()) {
                    self.record(MappingErrorKind::AssignmentFailure, cause);
                }
            }
            Apply::Lookup(lookup) => {
                if let Err(cause) = lookup(instance, raw) {
                    self.record(MappingErrorKind::EnumLookupFailure, cause);
                }
            }
            Apply::Nested(nested) => nested(instance, raw, self),
            Apply::Skip => {}
        }
    }

    fn record<E>(&mut self, kind: MappingErrorKind, cause: E)
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let error = MappingError::new(kind, cause.to_string(), self.field, self.owner);
        self.errors.push(error.with_cause(cause));
    }

    /// Fold nested errors into the parent list
    fn absorb(&mut self, errors: Vec<MappingError>, path: impl FnOnce() -> String) {
        if errors.is_empty() {
            return;
        }

        if self.mapper.config.qualify_error_paths {
            let path = path();
            self.errors
                .extend(errors.into_iter().map(|error| error.qualified(&path)));
        } else {
            self.errors.extend(errors);
        }
    }

    /// Map a nested object field; null leaves the field empty
    pub(crate) fn map_nested<N: Mappable>(&mut self, raw: &Value) -> Option<N> {
        if raw.is_null() {
            return None;
        }

        let CompletedMapping { result, errors } = self.mapper.map_at::<N>(raw, self.depth + 1);
        let field = self.field;
        self.absorb(errors, || field.to_string());
        result
    }

    /// Map every element of an array field onto `N`, keeping keys and order
    pub(crate) fn map_object_array<N: Mappable>(&mut self, raw: &Value) -> MappedArray<N> {
        let entries = array_entries(raw);
        let mut mapped = MappedArray::with_capacity(entries.len());
        let field = self.field;

        for (key, element) in entries {
            if element.is_null() {
                mapped.push(key, None);
                continue;
            }

            let CompletedMapping { result, errors } =
                self.mapper.map_at::<N>(element, self.depth + 1);
            self.absorb(errors, || format!("{field}[{key}]"));
            mapped.push(key, result);
        }

        mapped
    }

    /// Look up every element of an array field in enum `E`
    ///
    /// A faulting lookup empties that slot and the rest carries on.
    pub(crate) fn map_enum_array<E: MappableEnum>(&mut self, raw: &Value) -> MappedArray<E> {
        let entries = array_entries(raw);
        let mut mapped = MappedArray::with_capacity(entries.len());
        let field = self.field;

        for (key, element) in entries {
            match E::try_from_value(element) {
                Ok(value) => mapped.push(key, value),
                Err(cause) => {
                    let error = MappingError::new(
                        MappingErrorKind::EnumLookupFailure,
                        cause.to_string(),
                        "",
                        E::TYPE_NAME,
                    )
                    .with_cause(cause);
                    self.absorb(vec![error], || format!("{field}[{key}]"));
                    mapped.push(key, None);
                }
            }
        }

        mapped
    }
}
