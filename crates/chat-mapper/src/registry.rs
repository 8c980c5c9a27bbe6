//! Process-wide descriptor registry
//!
//! Descriptors are built on first use and shared read-only afterwards.

use std::any::{Any, TypeId};
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;

use crate::descriptor::{Mappable, TypeDescriptor};

type SharedDescriptor = Arc<dyn Any + Send + Sync>;

static REGISTRY: LazyLock<DashMap<TypeId, SharedDescriptor>> = LazyLock::new(DashMap::new);

/// Descriptor for `T`, built on first request
pub fn describe<T: Mappable>() -> Arc<TypeDescriptor<T>> {
    let type_id = TypeId::of::<T>();

    let found = REGISTRY.get(&type_id).map(|entry| Arc::clone(entry.value()));
    if let Some(descriptor) = found.and_then(|found| found.downcast::<TypeDescriptor<T>>().ok()) {
        return descriptor;
    }

    // Built with no shard locked; if another thread won the race its copy is kept.
    let built = Arc::new(T::describe());
    tracing::trace!(
        target_type = T::TYPE_NAME,
        fields = built.len(),
        "Registered type descriptor"
    );

    let shared = Arc::clone(
        REGISTRY
            .entry(type_id)
            .or_insert_with(|| Arc::clone(&built) as SharedDescriptor)
            .value(),
    );
    shared.downcast::<TypeDescriptor<T>>().unwrap_or(built)
}

/// Whether a descriptor for `T` has been built yet
#[must_use]
pub fn is_registered<T: Mappable>() -> bool {
    REGISTRY.contains_key(&TypeId::of::<T>())
}
