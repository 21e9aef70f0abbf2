use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use hue_core::Color;
use hue_theme::{
    AccessibilityContext, ColorToken, FixedTheme, StandardTheme, Theme, ThemeBuilder,
    ThemeError, ThemeManager, ThemePreset, ThemeProvider, TokenCategory, TokenValue,
};

fn light() -> Arc<dyn Theme> {
    Arc::new(StandardTheme::light())
}

fn dark() -> Arc<dyn Theme> {
    Arc::new(StandardTheme::dark())
}

#[test]
fn read_after_write() {
    let manager = ThemeManager::default();
    let a = dark();
    manager.set_theme(Arc::clone(&a));
    assert!(Arc::ptr_eq(&manager.current_theme(), &a));
}

#[test]
fn switching_back_and_forth_ends_on_first_theme() {
    let manager = ThemeManager::default();
    let a = light();
    let b = dark();

    manager.set_theme(Arc::clone(&a));
    manager.set_theme(Arc::clone(&b));
    manager.set_theme(Arc::clone(&a));

    assert!(Arc::ptr_eq(&manager.current_theme(), &a));
    assert_eq!(manager.revision(), 3);
}

#[test]
fn custom_token_round_trip() {
    let manager = ThemeManager::default();
    let value = TokenValue::Number(42.0);

    manager.register_custom_token("x", value.clone());
    assert_eq!(manager.custom_token("x"), Some(value));
    assert_eq!(manager.custom_token("unset"), None);
}

#[test]
fn theme_missing_error_color_is_rejected() {
    let result = ThemeBuilder::from_theme(&StandardTheme::light())
        .name("No Error")
        .without(ColorToken::Error)
        .build();

    match result {
        Err(ThemeError::MissingToken { category, name, .. }) => {
            assert_eq!(category, TokenCategory::Color);
            assert_eq!(name, "error");
        }
        other => panic!("expected MissingToken, got {other:?}"),
    }
}

#[test]
fn concurrent_switches_never_mix_categories() {
    let manager = Arc::new(ThemeManager::default());
    let a = ThemePreset::Brand.theme();
    let b = ThemePreset::HighContrast.theme();
    let ctx = AccessibilityContext::default();

    thread::scope(|scope| {
        for theme in [&a, &b] {
            let manager = Arc::clone(&manager);
            scope.spawn(move || {
                for _ in 0..500 {
                    manager.set_theme(Arc::clone(theme));
                }
            });
        }

        for _ in 0..2 {
            let manager = Arc::clone(&manager);
            let (a, b) = (&a, &b);
            scope.spawn(move || {
                for _ in 0..2_000 {
                    let current = manager.current_theme();
                    let expected = if current.name() == a.name() { a } else { b };

                    assert_eq!(current.colors(), expected.colors());
                    assert_eq!(current.typography(), expected.typography());
                    assert_eq!(current.spacing(), expected.spacing());
                    assert_eq!(current.shadows(), expected.shadows());
                    assert_eq!(current.borders(), expected.borders());
                    assert_eq!(current.animations(), expected.animations());
                    assert_eq!(
                        current.resolve(TokenCategory::Border, "widthThin", &ctx).unwrap(),
                        expected.resolve(TokenCategory::Border, "widthThin", &ctx).unwrap()
                    );
                }
            });
        }
    });

    let last = manager.current_theme();
    assert!(Arc::ptr_eq(&last, &a) || Arc::ptr_eq(&last, &b));
}

#[test]
fn concurrent_revisions_are_unique() {
    let manager = Arc::new(ThemeManager::default());
    let revisions: Vec<u64> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let manager = Arc::clone(&manager);
                let preset = if i % 2 == 0 {
                    ThemePreset::Light
                } else {
                    ThemePreset::Dark
                };
                scope.spawn(move || {
                    (0..100)
                        .map(|_| manager.set_preset(preset))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let mut sorted = revisions.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), 400);
    assert_eq!(manager.revision(), 400);
}

#[test]
fn subscribers_are_notified_once_per_swap() {
    let manager = ThemeManager::default();
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let id = manager.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    manager.set_preset(ThemePreset::Dark);
    manager.set_preset(ThemePreset::Light);
    manager.unsubscribe(id);
    manager.set_preset(ThemePreset::Dark);

    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn components_take_any_provider() {
    fn primary(provider: &dyn ThemeProvider) -> Color {
        provider.theme().colors().get(ColorToken::Primary)
    }

    let manager = Arc::new(ThemeManager::from_preset(ThemePreset::Dark));
    let pinned = FixedTheme(light());

    assert_eq!(primary(&manager), StandardTheme::dark().colors().get(ColorToken::Primary));
    assert_eq!(primary(&pinned), StandardTheme::light().colors().get(ColorToken::Primary));
}
