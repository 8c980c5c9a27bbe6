//! Mapping errors
//!
//! Everything that goes wrong while mapping a payload is recorded as a
//! [`MappingError`] value and handed back inside a `CompletedMapping`.
//! The typed errors below are the causes those records carry.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::raw::value_kind;

/// Category of a recorded mapping error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingErrorKind {
    /// Payload key has no matching field on the target type
    UnknownField,
    /// Field type cannot be mapped (intersection-like typing)
    UnsupportedType,
    /// Value does not fit the field's storage type
    AssignmentFailure,
    /// Non-array value given for an array field
    ArrayShapeMismatch,
    /// Enum lookup itself faulted (not a plain "no match")
    EnumLookupFailure,
    /// Target type could not be constructed from a non-keyed value
    InstantiationFailure,
    /// Payload nesting went past the configured depth limit
    DepthExceeded,
}

impl MappingErrorKind {
    /// Stable name for logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownField => "UNKNOWN_FIELD",
            Self::UnsupportedType => "UNSUPPORTED_TYPE",
            Self::AssignmentFailure => "ASSIGNMENT_FAILURE",
            Self::ArrayShapeMismatch => "ARRAY_SHAPE_MISMATCH",
            Self::EnumLookupFailure => "ENUM_LOOKUP_FAILURE",
            Self::InstantiationFailure => "INSTANTIATION_FAILURE",
            Self::DepthExceeded => "DEPTH_EXCEEDED",
        }
    }

    /// Whether this error leaves the whole mapping without a result
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::InstantiationFailure | Self::DepthExceeded)
    }
}

impl fmt::Display for MappingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded, non-fatal mapping problem
#[derive(Debug, Clone)]
pub struct MappingError {
    kind: MappingErrorKind,
    message: String,
    field_name: String,
    target_type: &'static str,
    cause: Option<Arc<dyn StdError + Send + Sync>>,
}

impl MappingError {
    pub fn new(
        kind: MappingErrorKind,
        message: impl Into<String>,
        field_name: impl Into<String>,
        target_type: &'static str,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            field_name: field_name.into(),
            target_type,
            cause: None,
        }
    }

    /// Attach the underlying failure
    #[must_use]
    pub fn with_cause(mut self, cause: impl StdError + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    pub fn unknown_field(field_name: &str, target_type: &'static str) -> Self {
        Self::new(
            MappingErrorKind::UnknownField,
            "Property does not exist on definition",
            field_name,
            target_type,
        )
    }

    pub fn unsupported_type(field_name: &str, target_type: &'static str) -> Self {
        Self::new(
            MappingErrorKind::UnsupportedType,
            "Unsupported typing",
            field_name,
            target_type,
        )
    }

    pub fn array_shape(field_name: &str, target_type: &'static str) -> Self {
        Self::new(
            MappingErrorKind::ArrayShapeMismatch,
            "Unable to map non-array to array",
            field_name,
            target_type,
        )
    }

    pub fn instantiation(target_type: &'static str, cause: ConstructError) -> Self {
        Self::new(
            MappingErrorKind::InstantiationFailure,
            "Unable to instantiate property",
            "",
            target_type,
        )
        .with_cause(cause)
    }

    pub fn depth_exceeded(target_type: &'static str, max_depth: usize) -> Self {
        Self::new(
            MappingErrorKind::DepthExceeded,
            format!("Payload nesting exceeds the maximum depth of {max_depth}"),
            "",
            target_type,
        )
    }

    #[must_use]
    pub fn kind(&self) -> MappingErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Field the error belongs to; empty at the top level
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Name of the type that owned the field
    #[must_use]
    pub fn target_type(&self) -> &'static str {
        self.target_type
    }

    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Prefix the field name with the path of the parent field
    #[must_use]
    pub(crate) fn qualified(mut self, parent: &str) -> Self {
        self.field_name = if self.field_name.is_empty() {
            parent.to_string()
        } else if self.field_name.starts_with('[') {
            format!("{parent}{}", self.field_name)
        } else {
            format!("{parent}.{}", self.field_name)
        };
        self
    }
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field_name.is_empty() {
            write!(f, "{}: {}", self.target_type, self.message)
        } else {
            write!(f, "{}.{}: {}", self.target_type, self.field_name, self.message)
        }
    }
}

impl StdError for MappingError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl PartialEq for MappingError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.message == other.message
            && self.field_name == other.field_name
            && self.target_type == other.target_type
    }
}

/// Fault raised by an enum's try-from lookup
///
/// A value that simply matches no member is not a fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumLookupError {
    #[error("{enum_name} is backed by {expected} values, {found} given")]
    BackingTypeMismatch {
        enum_name: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl EnumLookupError {
    #[must_use]
    pub fn backing_mismatch(enum_name: &'static str, expected: &'static str, raw: &Value) -> Self {
        Self::BackingTypeMismatch {
            enum_name,
            expected,
            found: value_kind(raw),
        }
    }
}

/// Failure to construct a type from a non-keyed raw value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructError {
    #[error("{type_name} cannot be constructed from a {found} value")]
    NotConstructible {
        type_name: &'static str,
        found: &'static str,
    },

    #[error("{type_name} expects {expected} constructor argument(s), {given} given")]
    ArgumentCount {
        type_name: &'static str,
        expected: usize,
        given: usize,
    },

    #[error("{type_name}: {reason}")]
    InvalidArgument {
        type_name: &'static str,
        reason: String,
    },
}

impl ConstructError {
    #[must_use]
    pub fn not_constructible(type_name: &'static str, raw: &Value) -> Self {
        Self::NotConstructible {
            type_name,
            found: value_kind(raw),
        }
    }

    #[must_use]
    pub fn invalid(type_name: &'static str, reason: impl fmt::Display) -> Self {
        Self::InvalidArgument {
            type_name,
            reason: reason.to_string(),
        }
    }
}

/// Errors returned by the `DataMapper` entry points that decode text first
#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    #[error("Invalid payload JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
