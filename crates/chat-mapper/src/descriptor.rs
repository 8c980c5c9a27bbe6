//! Type descriptors
//!
//! A [`TypeDescriptor`] lists the fields a target type accepts from the wire,
//! what kind each field is, and how to store a converted value into it.
//! Descriptors are registered explicitly through [`DescriptorBuilder`] instead
//! of being discovered at runtime.

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ConstructError, EnumLookupError};
use crate::mapper::FieldScope;
use crate::raw::MappedArray;

/// A type that can be built from a raw payload
///
/// Keyed payloads start from `Default::default()` and fill in the fields
/// listed by [`Mappable::describe`]. Scalar and sequence payloads go through
/// [`Mappable::construct`] instead.
pub trait Mappable: Default + Sized + 'static {
    /// Name used in error records
    const TYPE_NAME: &'static str;

    /// Field layout of this type
    fn describe() -> TypeDescriptor<Self>;

    /// Build the type from a non-keyed raw value
    ///
    /// A sequence stands for the full constructor argument list, anything
    /// else for a single argument (see [`crate::constructor_args`]). Types
    /// that only come as keyed mappings keep the default, which refuses.
    fn construct(raw: &Value) -> Result<Self, ConstructError> {
        Err(ConstructError::not_constructible(Self::TYPE_NAME, raw))
    }
}

/// An enum that can be looked up from a raw backing value
pub trait MappableEnum: Sized + 'static {
    /// Name used in error records
    const TYPE_NAME: &'static str;

    /// Try-from lookup
    ///
    /// `Ok(None)` for a value that matches no member (or null); `Err` only
    /// when the lookup itself cannot run, e.g. a string given to an
    /// integer-backed enum.
    fn try_from_value(raw: &Value) -> Result<Option<Self>, EnumLookupError>;
}

/// Read the integer backing value for an integer-backed enum lookup
pub fn int_backing<E: MappableEnum>(raw: &Value) -> Result<Option<i64>, EnumLookupError> {
    match raw {
        Value::Null => Ok(None),
        Value::Number(number) => match number.as_i64() {
            Some(value) => Ok(Some(value)),
            // Past every backing value, so nothing can match
            None if number.is_u64() => Ok(None),
            None => Err(EnumLookupError::backing_mismatch(E::TYPE_NAME, "int", raw)),
        },
        _ => Err(EnumLookupError::backing_mismatch(E::TYPE_NAME, "int", raw)),
    }
}

/// Read the string backing value for a string-backed enum lookup
pub fn string_backing<E: MappableEnum>(raw: &Value) -> Result<Option<&str>, EnumLookupError> {
    match raw {
        Value::Null => Ok(None),
        Value::String(value) => Ok(Some(value)),
        _ => Err(EnumLookupError::backing_mismatch(E::TYPE_NAME, "string", raw)),
    }
}

/// Element type declared on an array field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Enum(&'static str),
    Object(&'static str),
}

/// How a field is converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Union or untyped field, stored as given
    Union,
    /// Field whose typing cannot be mapped; always recorded as an error
    Unsupported,
    /// Builtin scalar (string, int, bool, ...)
    Scalar,
    /// Backed enum, looked up with try-from semantics
    Enum(&'static str),
    /// Nested mappable type
    Object(&'static str),
    /// Array; `None` passes elements through unconverted
    Array(Option<ElementKind>),
}

pub(crate) type AssignFn<T> = Box<dyn Fn(&mut T, Value) -> Result<(), serde_json::Error> + Send + Sync>;
pub(crate) type LookupFn<T> = Box<dyn Fn(&mut T, &Value) -> Result<(), EnumLookupError> + Send + Sync>;
pub(crate) type NestedFn<T> = Box<dyn Fn(&mut T, &Value, &mut FieldScope<'_>) + Send + Sync>;

/// Typed storage hook matching a field's kind
pub(crate) enum Apply<T> {
    Assign(AssignFn<T>),
    Lookup(LookupFn<T>),
    Nested(NestedFn<T>),
    Skip,
}

/// One field of a target type
pub struct FieldDescriptor<T> {
    name: &'static str,
    kind: FieldKind,
    apply: Apply<T>,
}

impl<T> FieldDescriptor<T> {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub(crate) fn apply(&self) -> &Apply<T> {
        &self.apply
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Field layout of a target type
pub struct TypeDescriptor<T> {
    type_name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
    index: HashMap<&'static str, usize>,
}

impl<T: Mappable> TypeDescriptor<T> {
    /// Start registering the fields of `T`
    #[must_use]
    pub fn builder() -> DescriptorBuilder<T> {
        DescriptorBuilder {
            type_name: T::TYPE_NAME,
            fields: Vec::new(),
        }
    }

    /// Descriptor without fields, for types only built from scalars
    #[must_use]
    pub fn empty() -> Self {
        Self::builder().build()
    }
}

impl<T> TypeDescriptor<T> {
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.index.get(name).map(|&position| &self.fields[position])
    }

    /// Fields in registration order
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor<T>> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Fluent registration of a type's fields
///
/// Setters receive already converted values; conversion and error recording
/// stay with the mapper.
pub struct DescriptorBuilder<T> {
    type_name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T: Mappable> DescriptorBuilder<T> {
    /// Registering a name again replaces the earlier entry in place
    fn push(mut self, name: &'static str, kind: FieldKind, apply: Apply<T>) -> Self {
        let field = FieldDescriptor { name, kind, apply };
        match self.fields.iter_mut().find(|existing| existing.name == name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Builtin scalar field (`String`, integers, `bool`, and their `Option`s)
    #[must_use]
    pub fn scalar<V, F>(self, name: &'static str, set: F) -> Self
    where
        V: DeserializeOwned + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.push(name, FieldKind::Scalar, Apply::Assign(assign_with(set)))
    }

    /// Union or untyped field; use `serde_json::Value` to keep it raw
    #[must_use]
    pub fn union<V, F>(self, name: &'static str, set: F) -> Self
    where
        V: DeserializeOwned + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.push(name, FieldKind::Union, Apply::Assign(assign_with(set)))
    }

    /// Backed enum field
    #[must_use]
    pub fn enumeration<E, F>(self, name: &'static str, set: F) -> Self
    where
        E: MappableEnum,
        F: Fn(&mut T, Option<E>) + Send + Sync + 'static,
    {
        let lookup: LookupFn<T> = Box::new(move |target, raw| {
            set(target, E::try_from_value(raw)?);
            Ok(())
        });
        self.push(name, FieldKind::Enum(E::TYPE_NAME), Apply::Lookup(lookup))
    }

    /// Nested object field
    #[must_use]
    pub fn object<N, F>(self, name: &'static str, set: F) -> Self
    where
        N: Mappable,
        F: Fn(&mut T, Option<N>) + Send + Sync + 'static,
    {
        let nested: NestedFn<T> = Box::new(move |target, raw, scope| {
            set(target, scope.map_nested::<N>(raw));
        });
        self.push(name, FieldKind::Object(N::TYPE_NAME), Apply::Nested(nested))
    }

    /// Array field without an element annotation; the raw sequence is stored as is
    #[must_use]
    pub fn array<V, F>(self, name: &'static str, set: F) -> Self
    where
        V: DeserializeOwned + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.push(name, FieldKind::Array(None), Apply::Assign(assign_with(set)))
    }

    /// Array field whose elements are looked up in enum `E`
    #[must_use]
    pub fn enum_array<E, F>(self, name: &'static str, set: F) -> Self
    where
        E: MappableEnum,
        F: Fn(&mut T, MappedArray<E>) + Send + Sync + 'static,
    {
        let nested: NestedFn<T> = Box::new(move |target, raw, scope| {
            set(target, scope.map_enum_array::<E>(raw));
        });
        self.push(
            name,
            FieldKind::Array(Some(ElementKind::Enum(E::TYPE_NAME))),
            Apply::Nested(nested),
        )
    }

    /// Array field whose elements are mapped onto `N`
    #[must_use]
    pub fn object_array<N, F>(self, name: &'static str, set: F) -> Self
    where
        N: Mappable,
        F: Fn(&mut T, MappedArray<N>) + Send + Sync + 'static,
    {
        let nested: NestedFn<T> = Box::new(move |target, raw, scope| {
            set(target, scope.map_object_array::<N>(raw));
        });
        self.push(
            name,
            FieldKind::Array(Some(ElementKind::Object(N::TYPE_NAME))),
            Apply::Nested(nested),
        )
    }

    /// Field whose typing cannot be mapped
    ///
    /// Accepted as a known key but always recorded as an error.
    #[must_use]
    pub fn unsupported(self, name: &'static str) -> Self {
        self.push(name, FieldKind::Unsupported, Apply::Skip)
    }

    #[must_use]
    pub fn build(self) -> TypeDescriptor<T> {
        let index = self
            .fields
            .iter()
            .enumerate()
            .map(|(position, field)| (field.name, position))
            .collect();

        TypeDescriptor {
            type_name: self.type_name,
            fields: self.fields,
            index,
        }
    }
}

fn assign_with<T, V, F>(set: F) -> AssignFn<T>
where
    V: DeserializeOwned + 'static,
    F: Fn(&mut T, V) + Send + Sync + 'static,
{
    Box::new(move |target, raw| {
        set(target, serde_json::from_value(raw)?);
        Ok(())
    })
}
