//! Named theme catalog

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::ThemeError;
use crate::presets::ThemePreset;
use crate::theme::Theme;

/// Themes by id, in registration order
///
/// Ids are matched case-insensitively. Registering an id twice replaces the
/// earlier theme but keeps its position.
#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Arc<dyn Theme>>,
}

impl ThemeRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in preset under its id
    pub fn with_presets() -> Self {
        let mut registry = Self::new();
        for preset in ThemePreset::all() {
            registry.register(preset.id(), preset.theme());
        }
        registry
    }

    /// Add a theme, returning the one it replaced
    pub fn register(&mut self, id: &str, theme: Arc<dyn Theme>) -> Option<Arc<dyn Theme>> {
        let key = normalize(id);
        debug!(id = %key, theme = theme.name(), "theme registered");
        self.themes.insert(key, theme)
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Theme>> {
        self.themes.get(&normalize(id)).cloned()
    }

    pub fn get_or_err(&self, id: &str) -> Result<Arc<dyn Theme>, ThemeError> {
        self.get(id)
            .ok_or_else(|| ThemeError::UnknownTheme(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.themes.contains_key(&normalize(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Theme>)> {
        self.themes.iter().map(|(id, theme)| (id.as_str(), theme))
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

fn normalize(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}
