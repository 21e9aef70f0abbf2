use hue_theme::{
    AccessibilityContext, BorderToken, ColorScheme, ColorToken, StandardTheme, Theme,
    ThemePreset, TokenCategory, TypographyToken,
};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["brand", "dark", "high-contrast", "light"]);
}

#[test]
fn every_required_name_resolves_for_builtin_themes() {
    let contexts = [
        AccessibilityContext::default(),
        AccessibilityContext::default()
            .with_reduce_motion(true)
            .with_size_category(hue_theme::SizeCategory::AccessibilityExtraExtraExtraLarge)
            .with_legibility_weight(hue_theme::LegibilityWeight::Bold),
    ];

    for preset in ThemePreset::all() {
        let theme = preset.theme();
        for ctx in &contexts {
            for category in TokenCategory::ALL {
                for name in category.required_names() {
                    let value = theme.resolve(category, name, ctx).unwrap_or_else(|err| {
                        panic!("{preset}: {category}.{name} failed to resolve: {err}")
                    });
                    assert_eq!(value.kind(), category.value_kind(), "{preset}: {category}.{name}");
                }
            }
        }
    }
}

#[test]
fn body_medium_resolves_under_light_and_dark() {
    let ctx = AccessibilityContext::default();
    let light = ThemePreset::Light.theme();
    let dark = ThemePreset::Dark.theme();

    let light_body = light
        .resolve(TokenCategory::Typography, "bodyMedium", &ctx)
        .unwrap();
    let dark_body = dark
        .resolve_path("typography.bodyMedium", &ctx)
        .unwrap();

    for body in [&light_body, &dark_body] {
        let font = body.as_font().expect("bodyMedium is a font");
        assert!(!font.family.is_empty());
        assert!(font.size > 0.0);
        assert!(font.line_height >= font.size);
    }
}

#[test]
fn bundle_has_distinct_light_and_dark_primary() {
    let bundle = StandardTheme::bundle();
    let light = bundle.for_scheme(ColorScheme::Light);
    let dark = bundle.for_scheme(ColorScheme::Dark);

    assert_eq!(light.color_scheme(), ColorScheme::Light);
    assert_eq!(dark.color_scheme(), ColorScheme::Dark);
    assert_ne!(
        light.colors().get(ColorToken::Primary),
        dark.colors().get(ColorToken::Primary)
    );
}

#[test]
fn brand_preset_uses_rounder_radii_and_inter() {
    let brand = ThemePreset::Brand.build();

    assert_eq!(brand.borders().get(BorderToken::RadiusSm), 6.0);
    assert_eq!(brand.borders().get(BorderToken::RadiusMd), 10.0);
    assert_eq!(brand.borders().get(BorderToken::RadiusLg), 14.0);
    assert_eq!(
        brand.typography().get(TypographyToken::BodyMedium).family,
        "Inter"
    );
}

#[test]
fn high_contrast_preset_uses_heavier_borders() {
    let default = ThemePreset::Light.build();
    let high = ThemePreset::HighContrast.build();

    for token in [
        BorderToken::WidthHairline,
        BorderToken::WidthThin,
        BorderToken::WidthMedium,
        BorderToken::WidthThick,
    ] {
        assert!(
            high.borders().get(token) > default.borders().get(token),
            "{token} should be heavier"
        );
    }
}
