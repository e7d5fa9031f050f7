#[cfg(test)]
#[path = "../../../tests/unit/models/common/dimens_test.rs"]
mod dimens_test;

use rustc_hash::FxHasher;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::sync::Arc;

/// Multiple dimensions which can contain anything:
/// a node id, a display name, or any other metadata attached to a domain entity.
#[derive(Clone, Debug, Default)]
pub struct Dimensions {
    index: HashMap<TypeId, Arc<dyn Any + Send + Sync>, BuildHasherDefault<FxHasher>>,
}

impl Dimensions {
    /// Gets a value using `K` type as a key.
    pub fn get_value<K: 'static, V: 'static>(&self) -> Option<&V> {
        self.index.get(&TypeId::of::<K>()).and_then(|any| any.downcast_ref::<V>())
    }

    /// Sets the value using `K` type as a key.
    pub fn set_value<K: 'static, V: 'static + Send + Sync>(&mut self, value: V) {
        self.index.insert(TypeId::of::<K>(), Arc::new(value));
    }
}
