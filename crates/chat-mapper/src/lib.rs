//! # chat-mapper
//!
//! Converts loosely-typed decoded wire payloads (`serde_json::Value`) into
//! strongly-typed domain objects.
//!
//! Target types describe their fields once through [`Mappable::describe`];
//! the [`Mapper`] walks a raw payload against that description and returns a
//! [`CompletedMapping`] holding the (possibly partial) instance plus every
//! per-field problem it ran into. Nothing in here panics or returns early on
//! a bad field.

pub mod completed;
pub mod data_mapper;
pub mod descriptor;
pub mod error;
pub mod mapper;
pub mod raw;
pub mod registry;

// Re-export commonly used types at crate root
pub use completed::CompletedMapping;
pub use data_mapper::DataMapper;
pub use descriptor::{
    int_backing, string_backing, DescriptorBuilder, ElementKind, FieldDescriptor, FieldKind,
    Mappable, MappableEnum, TypeDescriptor,
};
pub use error::{ConstructError, EnumLookupError, MapperError, MappingError, MappingErrorKind};
pub use mapper::{Mapper, MapperConfig};
pub use raw::{constructor_args, value_kind, ArrayKey, MappedArray};
pub use registry::describe;
