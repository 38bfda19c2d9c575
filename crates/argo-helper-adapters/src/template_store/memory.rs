//! In-memory template store with built-in templates.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use argo_helper_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainValidator as validator, Template, TemplateName},
    error::ArgoResult,
};
use tracing::debug;

use crate::builtin_templates;

/// Thread-safe in-memory template store.
///
/// Keyed by [`TemplateName`], so listing follows catalog order.
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<BTreeMap<TemplateName, Template>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> ArgoResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load built-in templates.
    pub fn load_builtin(&self) -> ArgoResult<()> {
        let templates = builtin_templates::all_templates();
        debug!(count = templates.len(), "Loading built-in templates");

        for template in templates {
            self.insert(template)?;
        }

        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove a template, returning whether it was present.
    pub fn remove(&self, name: TemplateName) -> ArgoResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.remove(&name).is_some())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, name: TemplateName) -> ArgoResult<Template> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(&name)
            .cloned()
            .ok_or_else(|| ApplicationError::TemplateNotFound { name }.into())
    }

    fn list(&self) -> ArgoResult<Vec<Template>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.values().cloned().collect())
    }

    fn insert(&self, template: Template) -> ArgoResult<()> {
        // Validate before insertion
        validator::validate_template(&template)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(template.name, template);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argo_helper_core::{domain::TemplateSource, error::ArgoError};

    #[test]
    fn builtin_store_has_full_catalog() {
        let store = InMemoryStore::with_builtin().unwrap();
        assert_eq!(store.len(), TemplateName::ALL.len());

        let listed: Vec<_> = store.list().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(listed, TemplateName::ALL.to_vec());
    }

    #[test]
    fn missing_template_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.get(TemplateName::Chart).unwrap_err();
        let expected: ArgoError = ApplicationError::TemplateNotFound {
            name: TemplateName::Chart,
        }
        .into();
        assert_eq!(err, expected);
    }

    #[test]
    fn insert_rejects_invalid_template() {
        let store = InMemoryStore::new();
        let empty = Template::new(TemplateName::Readme, TemplateSource::Static(""));
        assert!(store.insert(empty).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn insert_replaces_existing() {
        let store = InMemoryStore::with_builtin().unwrap();
        let custom = Template::new(TemplateName::Readme, TemplateSource::Owned("# Ours\n".into()));
        store.insert(custom.clone()).unwrap();
        assert_eq!(store.get(TemplateName::Readme).unwrap(), custom);
        assert_eq!(store.len(), TemplateName::ALL.len());
    }

    #[test]
    fn remove_reports_presence() {
        let store = InMemoryStore::with_builtin().unwrap();
        assert!(store.remove(TemplateName::Readme).unwrap());
        assert!(!store.remove(TemplateName::Readme).unwrap());
    }
}
