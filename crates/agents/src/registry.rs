//! Name → adapter directory for one configuration domain.
//!
//! A registry is built explicitly from a list of adapters and is read-only
//! once shared: registration takes `&mut self`, lookups and conversion take
//! `&self`, so a `Registry` behind an `Arc` or a `&` can be used from many
//! threads with no locking.

use crate::adapters::traits::{Adapter, Entity};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;

pub type BoxedAdapter<E> = Box<dyn Adapter<Entity = E>>;

pub struct Registry<E: Entity> {
    adapters: BTreeMap<String, BoxedAdapter<E>>,
}

impl<E: Entity> Registry<E> {
    pub fn new() -> Self {
        Self {
            adapters: BTreeMap::new(),
        }
    }

    /// Builds a registry from an explicit adapter set.
    pub fn from_adapters<I>(adapters: I) -> Result<Self>
    where
        I: IntoIterator<Item = BoxedAdapter<E>>,
    {
        let mut registry = Self::new();
        for adapter in adapters {
            registry.register(adapter)?;
        }
        Ok(registry)
    }

    /// Adds an adapter under its name.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateAdapter`] when the name is already taken; the
    /// existing adapter stays registered.
    pub fn register(&mut self, adapter: BoxedAdapter<E>) -> Result<()> {
        let name = adapter.name().to_string();
        if self.adapters.contains_key(&name) {
            return Err(Error::DuplicateAdapter {
                domain: E::DOMAIN,
                name,
            });
        }
        tracing::trace!(domain = E::DOMAIN, adapter = %name, "Registered adapter");
        self.adapters.insert(name, adapter);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Adapter<Entity = E>> {
        self.adapters.get(name).map(|a| a.as_ref())
    }

    /// Like [`get`](Self::get), but fails with an error listing the
    /// registered names.
    pub fn require(&self, name: &str) -> Result<&dyn Adapter<Entity = E>> {
        self.get(name).ok_or_else(|| Error::UnknownAdapter {
            domain: E::DOMAIN,
            name: name.to_string(),
            available: self.names(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adapters.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Registered names in lexicographic order.
    pub fn names(&self) -> Vec<String> {
        self.adapters.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Adapter<Entity = E>> {
        self.adapters.values().map(|a| a.as_ref())
    }
}

impl<E: Entity> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("domain", &E::DOMAIN)
            .field("adapters", &self.adapters.keys().collect::<Vec<_>>())
            .finish()
    }
}
