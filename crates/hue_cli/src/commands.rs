//! Subcommand implementations

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use hue_core::Color;
use hue_theme::{
    css_stylesheet, css_variables, resolved_tokens, validate_contrast, AccessibilityContext,
    LegibilityWeight, Theme, ThemeFile, ThemeManager, ThemeRegistry, TokenCategory, TokenPath,
    TokenValue, WcagLevel,
};
use tracing::{debug, info};

use crate::config::{load_theme, HueConfig};
use crate::{AccessibilityArgs, Format, ThemeSource};

pub fn presets(config: &HueConfig) -> Result<()> {
    let registry = config.registry()?;
    for (id, theme) in registry.iter() {
        let marker = if config.is_default_theme(id) { "*" } else { " " };
        println!(
            "{marker} {id:<16} {:<16} {}",
            theme.name(),
            theme.color_scheme()
        );
    }
    Ok(())
}

pub fn check(config: &HueConfig, file: &Path, level: WcagLevel) -> Result<()> {
    let registry = config.registry()?;
    let theme = load_theme(file, &registry)?;

    let issues = validate_contrast(&theme, level);
    if issues.is_empty() {
        println!("{}: ok (WCAG {level})", theme.name());
        return Ok(());
    }

    println!("{}:", theme.name());
    for issue in &issues {
        println!("  {issue}");
    }
    bail!("{} contrast issue(s) at WCAG {level}", issues.len())
}

pub fn show(
    config: &HueConfig,
    source: &ThemeSource,
    accessibility: &AccessibilityArgs,
    overrides: &[String],
    path: Option<&str>,
) -> Result<()> {
    let registry = config.registry()?;
    let manager = ThemeManager::new(select_theme(config, source, &registry)?);
    for entry in overrides {
        let (token, value) = parse_override(entry)?;
        manager.register_custom_token(token.to_string(), value);
    }

    let ctx = context(config, accessibility);
    debug!(?ctx, theme = manager.current_theme().name(), "resolving tokens");

    match path {
        Some(path) => {
            let value = manager.resolve_path(path, &ctx)?;
            println!("{}", value.to_css());
        }
        None => {
            for category in TokenCategory::ALL {
                for name in category.required_names() {
                    let value = manager.resolve(category, name, &ctx)?;
                    println!("{category}.{name} = {}", value.to_css());
                }
            }
        }
    }
    Ok(())
}

pub fn export(
    config: &HueConfig,
    source: &ThemeSource,
    accessibility: &AccessibilityArgs,
    format: Format,
    output: Option<&Path>,
) -> Result<()> {
    let registry = config.registry()?;
    let theme = select_theme(config, source, &registry)?;
    let rendered = render(theme.as_ref(), &context(config, accessibility), format)?;

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), theme = theme.name(), "exported theme");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// TOML output is the raw theme; the other formats are resolved for `ctx`
fn render(theme: &dyn Theme, ctx: &AccessibilityContext, format: Format) -> Result<String> {
    Ok(match format {
        Format::Css => css_stylesheet(&css_variables(theme, ctx)),
        Format::Json => {
            let mut tokens = serde_json::Map::new();
            for (path, value) in resolved_tokens(theme, ctx) {
                tokens.insert(path.to_string(), serde_json::to_value(value)?);
            }
            let mut json = serde_json::to_string_pretty(&serde_json::json!({
                "name": theme.name(),
                "scheme": theme.color_scheme(),
                "tokens": tokens,
            }))?;
            json.push('\n');
            json
        }
        Format::Toml => ThemeFile::from_theme(theme).to_toml()?,
    })
}

fn select_theme(
    config: &HueConfig,
    source: &ThemeSource,
    registry: &ThemeRegistry,
) -> Result<Arc<dyn Theme>> {
    if let Some(path) = &source.file {
        return Ok(Arc::new(load_theme(path, registry)?));
    }
    let id = source.theme.as_deref().unwrap_or(&config.theme);
    Ok(registry.get_or_err(id)?)
}

fn context(config: &HueConfig, args: &AccessibilityArgs) -> AccessibilityContext {
    let mut ctx = config.accessibility;
    if let Some(size_category) = args.size_category {
        ctx = ctx.with_size_category(size_category);
    }
    if args.bold {
        ctx = ctx.with_legibility_weight(LegibilityWeight::Bold);
    }
    if args.reduce_motion {
        ctx = ctx.with_reduce_motion(true);
    }
    ctx
}

/// Parse `colors.primary=#FF5500` or `spacing.md=20`
fn parse_override(entry: &str) -> Result<(TokenPath, TokenValue)> {
    let (path, raw) = entry
        .split_once('=')
        .with_context(|| format!("Expected PATH=VALUE, got `{entry}`"))?;
    let path = TokenPath::parse(path)?;
    let raw = raw.trim();

    let value = match path.category.value_kind() {
        "color" => TokenValue::Color(raw.parse::<Color>()?),
        "number" => TokenValue::Number(
            raw.trim_end_matches("px")
                .parse::<f32>()
                .with_context(|| format!("`{raw}` is not a number"))?,
        ),
        kind => bail!("{kind} tokens cannot be overridden from the command line"),
    };
    Ok((path, value))
}
