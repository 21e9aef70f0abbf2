//! Hue configuration file handling

use anyhow::{Context, Result};
use hue_theme::{AccessibilityContext, Theme, ThemeFile, ThemeRegistry};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

pub const CONFIG_FILE: &str = "hue.toml";

/// Top-level Hue configuration (hue.toml)
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HueConfig {
    /// Theme id used when no `--theme` or `--file` is given
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Extra theme files, registered in order under their file stem
    #[serde(default)]
    pub themes: Vec<PathBuf>,
    /// Accessibility settings applied unless overridden on the command line
    #[serde(default)]
    pub accessibility: AccessibilityContext,

    /// Directory relative theme paths are resolved against
    #[serde(skip)]
    base_dir: PathBuf,
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for HueConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            themes: Vec::new(),
            accessibility: AccessibilityContext::default(),
            base_dir: PathBuf::from("."),
        }
    }
}

impl HueConfig {
    /// Load `path`, or `hue.toml` from the current directory if present
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None if Path::new(CONFIG_FILE).exists() => Self::load_from(Path::new(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut config = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Whether `id` names the configured default theme
    pub fn is_default_theme(&self, id: &str) -> bool {
        id.trim().eq_ignore_ascii_case(self.theme.trim())
    }

    /// Presets plus every configured theme file
    ///
    /// Files may extend presets or any file listed before them.
    pub fn registry(&self) -> Result<ThemeRegistry> {
        let mut registry = ThemeRegistry::with_presets();
        for path in &self.themes {
            let path = self.base_dir.join(path);
            let id = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .with_context(|| format!("Invalid theme file name {}", path.display()))?
                .to_string();

            let theme = load_theme(&path, &registry)?;
            registry.register(&id, Arc::new(theme));
        }
        Ok(registry)
    }
}

/// Load a theme file, resolving `extends` against `registry`
pub fn load_theme(path: &Path, registry: &ThemeRegistry) -> Result<hue_theme::StandardTheme> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file = ThemeFile::from_toml(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let theme = file
        .into_builder(registry)
        .and_then(|builder| builder.build())
        .with_context(|| format!("Invalid theme in {}", path.display()))?;

    debug!(path = %path.display(), theme = theme.name(), "loaded theme");
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_theme::SizeCategory;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_uses_defaults() {
        let config = HueConfig::parse("").unwrap();
        assert_eq!(config.theme, "light");
        assert!(config.themes.is_empty());
        assert_eq!(config.accessibility, AccessibilityContext::default());
    }

    #[test]
    fn accessibility_section_is_read() {
        let config = HueConfig::parse(
            r#"
theme = "dark"

[accessibility]
reduce_motion = true
size_category = "accessibilityLarge"
legibility_weight = "bold"
"#,
        )
        .unwrap();

        assert_eq!(config.theme, "dark");
        assert!(config.accessibility.reduce_motion);
        assert_eq!(
            config.accessibility.size_category,
            SizeCategory::AccessibilityLarge
        );
    }

    #[test]
    fn default_theme_match_ignores_case() {
        let config = HueConfig::parse("theme = \" Dark \"").unwrap();
        assert!(config.is_default_theme("dark"));
        assert!(!config.is_default_theme("light"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(HueConfig::parse("colour = \"red\"").is_err());
    }

    #[test]
    fn configured_theme_files_are_registered() {
        let dir = std::env::temp_dir().join(format!("hue-cli-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("ocean.toml"),
            "name = \"Ocean\"\nextends = \"dark\"\n[colors]\nprimary = \"#0EA5E9\"\n",
        )
        .unwrap();
        fs::write(
            dir.join("deep-ocean.toml"),
            "name = \"Deep Ocean\"\nextends = \"ocean\"\n[colors]\nbackground = \"#0B1220\"\n",
        )
        .unwrap();
        fs::write(
            dir.join(CONFIG_FILE),
            "themes = [\"ocean.toml\", \"deep-ocean.toml\"]\n",
        )
        .unwrap();

        let config = HueConfig::load(Some(&dir.join(CONFIG_FILE))).unwrap();
        let registry = config.registry().unwrap();
        fs::remove_dir_all(&dir).ok();

        let deep = registry.get("deep-ocean").unwrap();
        assert_eq!(deep.name(), "Deep Ocean");
        assert_eq!(
            deep.colors().get(hue_theme::ColorToken::Primary).to_hex_string(),
            "#0EA5E9"
        );
        assert_eq!(registry.len(), 6);
    }
}
