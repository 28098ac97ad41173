//! Typed property keys and the per-element property map.
//!
//! Keys are declared once as `const` items (`Property::new` / `Property::with_default`) and the
//! value type travels with the key, so reads and writes are checked at compile time. A missing
//! value falls back to the key's default; a key without a default reports
//! [`GraphError::MissingProperty`].

use crate::error::{GraphError, Result};
use rustc_hash::FxHashMap;
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

pub struct Property<T> {
    id: &'static str,
    default: Option<fn() -> T>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Property<T> {
    pub const fn new(id: &'static str) -> Self {
        Self {
            id,
            default: None,
            _marker: PhantomData,
        }
    }

    pub const fn with_default(id: &'static str, default: fn() -> T) -> Self {
        Self {
            id,
            default: Some(default),
            _marker: PhantomData,
        }
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }

    pub fn default_value(&self) -> Option<T> {
        self.default.map(|f| f())
    }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Property<T> {}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("id", &self.id)
            .field("has_default", &self.default.is_some())
            .finish()
    }
}

#[derive(Default)]
pub struct PropertyMap {
    values: FxHashMap<&'static str, Box<dyn Any + Send + Sync>>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value, or the key's default when nothing is stored.
    pub fn get<T: Clone + 'static>(&self, property: &Property<T>) -> Result<T> {
        match self.values.get(property.id) {
            Some(value) => value
                .downcast_ref::<T>()
                .cloned()
                .ok_or(GraphError::PropertyType { key: property.id }),
            None => property
                .default_value()
                .ok_or(GraphError::MissingProperty { key: property.id }),
        }
    }

    /// Returns the stored value only. Defaults are not consulted.
    pub fn get_ref<T: 'static>(&self, property: &Property<T>) -> Option<&T> {
        self.values.get(property.id)?.downcast_ref::<T>()
    }

    pub fn set<T: Send + Sync + 'static>(&mut self, property: &Property<T>, value: T) {
        self.values.insert(property.id, Box::new(value));
    }

    pub fn remove<T: 'static>(&mut self, property: &Property<T>) -> Option<T> {
        let value = self.values.remove(property.id)?;
        value.downcast::<T>().ok().map(|b| *b)
    }

    pub fn contains<T>(&self, property: &Property<T>) -> bool {
        self.values.contains_key(property.id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for PropertyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.values.keys().copied().collect();
        keys.sort_unstable();
        f.debug_set().entries(keys).finish()
    }
}

/// Shared accessors for everything that carries a [`PropertyMap`].
pub trait PropertyHolder {
    fn properties(&self) -> &PropertyMap;
    fn properties_mut(&mut self) -> &mut PropertyMap;

    fn property<T: Clone + 'static>(&self, property: &Property<T>) -> Result<T> {
        self.properties().get(property)
    }

    fn set_property<T: Send + Sync + 'static>(&mut self, property: &Property<T>, value: T) {
        self.properties_mut().set(property, value);
    }

    fn has_property<T>(&self, property: &Property<T>) -> bool {
        self.properties().contains(property)
    }

    fn remove_property<T: 'static>(&mut self, property: &Property<T>) -> Option<T> {
        self.properties_mut().remove(property)
    }
}
