//! Current-theme state shared by every consumer
//!
//! [`ThemeManager`] owns the active theme and the custom-token side table.
//! Reads never block: the active theme sits behind an [`ArcSwap`], so a reader
//! always gets one whole theme even while another thread switches it.
//!
//! - Swapping the theme marks both repaint and layout dirty
//! - Custom color/shadow/motion tokens mark repaint only; numeric and font
//!   tokens mark layout too

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, TryLockError};

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::accessibility::AccessibilityContext;
use crate::builder::check_value;
use crate::error::ThemeError;
use crate::presets::ThemePreset;
use crate::theme::Theme;
use crate::tokens::{TokenCategory, TokenPath, TokenValue};

/// Event delivered to subscribers after a theme swap
#[derive(Clone, Debug)]
pub struct ThemeChange {
    pub previous: Arc<dyn Theme>,
    pub current: Arc<dyn Theme>,
    /// Revision of `current`
    pub revision: u64,
}

/// Handle returned by [`ThemeManager::subscribe`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&ThemeChange) + Send + Sync>;

struct ActiveTheme {
    theme: Arc<dyn Theme>,
    revision: u64,
}

/// Holds the current theme and resolves tokens against it
///
/// Share it with `Arc<ThemeManager>`; every method takes `&self`.
///
/// ```rust
/// use hue_theme::{AccessibilityContext, ThemeManager, ThemePreset, TokenCategory};
///
/// let manager = ThemeManager::default();
/// manager.set_theme(ThemePreset::Dark.theme());
///
/// let ctx = AccessibilityContext::default();
/// let body = manager.resolve(TokenCategory::Typography, "bodyMedium", &ctx).unwrap();
/// assert_eq!(body.as_font().unwrap().size, 14.0);
/// ```
pub struct ThemeManager {
    active: ArcSwap<ActiveTheme>,

    /// Serializes writers so revision order matches swap order
    write_lock: Mutex<()>,

    /// App-defined tokens keyed by free-form name
    custom_tokens: RwLock<FxHashMap<String, TokenValue>>,

    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,

    /// Changes not yet delivered, in revision order
    pending: Mutex<VecDeque<ThemeChange>>,
    /// Held by the one thread currently delivering `pending`
    delivering: Mutex<()>,

    needs_repaint: AtomicBool,
    needs_layout: AtomicBool,
}

impl ThemeManager {
    pub fn new(theme: Arc<dyn Theme>) -> Self {
        debug!(theme = theme.name(), "theme manager initialized");
        Self {
            active: ArcSwap::from_pointee(ActiveTheme { theme, revision: 0 }),
            write_lock: Mutex::new(()),
            custom_tokens: RwLock::new(FxHashMap::default()),
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
            pending: Mutex::new(VecDeque::new()),
            delivering: Mutex::new(()),
            needs_repaint: AtomicBool::new(false),
            needs_layout: AtomicBool::new(false),
        }
    }

    pub fn from_preset(preset: ThemePreset) -> Self {
        Self::new(preset.theme())
    }

    // ========== Current Theme ==========

    /// The active theme
    pub fn current_theme(&self) -> Arc<dyn Theme> {
        Arc::clone(&self.active.load().theme)
    }

    /// Number of swaps applied since construction
    pub fn revision(&self) -> u64 {
        self.active.load().revision
    }

    /// The active theme together with its revision, read atomically
    pub fn snapshot(&self) -> (Arc<dyn Theme>, u64) {
        let active = self.active.load();
        (Arc::clone(&active.theme), active.revision)
    }

    /// Replace the active theme and return the new revision
    ///
    /// Passing the theme that is already active (same `Arc`) changes nothing
    /// and returns the current revision.
    ///
    /// Subscribers see changes strictly in revision order. The change is
    /// delivered on the calling thread, unless another thread is already
    /// delivering; that thread then delivers it after its own.
    pub fn set_theme(&self, theme: Arc<dyn Theme>) -> u64 {
        let revision = {
            let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
            let previous = self.active.load_full();
            if Arc::ptr_eq(&previous.theme, &theme) {
                return previous.revision;
            }

            let revision = previous.revision + 1;
            self.active.store(Arc::new(ActiveTheme {
                theme: Arc::clone(&theme),
                revision,
            }));

            debug!(
                from = previous.theme.name(),
                to = theme.name(),
                revision,
                "theme switched"
            );

            // Queued under the write lock so queue order is revision order
            self.pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push_back(ThemeChange {
                    previous: Arc::clone(&previous.theme),
                    current: theme,
                    revision,
                });
            revision
        };

        self.needs_repaint.store(true, Ordering::SeqCst);
        self.needs_layout.store(true, Ordering::SeqCst);
        self.deliver_pending();
        revision
    }

    /// Switch to a freshly built preset
    pub fn set_preset(&self, preset: ThemePreset) -> u64 {
        self.set_theme(preset.theme())
    }

    // ========== Resolution ==========

    /// Resolve a token against the active theme
    ///
    /// A custom token registered under the qualified path (e.g.
    /// `colors.primary`) wins over the theme value when its kind matches the
    /// category and the value is one a theme could carry. The override gets
    /// the same accessibility adjustment as the theme value would.
    pub fn resolve(
        &self,
        category: TokenCategory,
        name: &str,
        ctx: &AccessibilityContext,
    ) -> Result<TokenValue, ThemeError> {
        let path = TokenPath::new(category, name)?;
        match self.override_for(path) {
            Some(custom) => Ok(custom.adjusted(ctx)),
            None => self.current_theme().resolve(category, name, ctx),
        }
    }

    /// Resolve a qualified path such as `spacing.md`
    pub fn resolve_path(
        &self,
        path: &str,
        ctx: &AccessibilityContext,
    ) -> Result<TokenValue, ThemeError> {
        let path = TokenPath::parse(path)?;
        self.resolve(path.category, path.name, ctx)
    }

    /// The usable custom override for `path`, if any
    fn override_for(&self, path: TokenPath) -> Option<TokenValue> {
        let key = path.to_string();
        let custom = self.custom_token(&key)?;

        if custom.kind() != path.category.value_kind() {
            warn!(
                token = %key,
                expected = path.category.value_kind(),
                found = custom.kind(),
                "ignoring custom token of the wrong kind"
            );
            return None;
        }
        if let Err(err) = check_value(path, &custom) {
            warn!(token = %key, %err, "ignoring invalid custom token");
            return None;
        }
        Some(custom)
    }

    // ========== Custom Tokens ==========

    /// Register an app-defined token, returning the value it replaced
    pub fn register_custom_token(
        &self,
        name: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Option<TokenValue> {
        let name = name.into();
        let value = value.into();
        let affects_layout = matches!(value, TokenValue::Number(_) | TokenValue::Font(_));

        debug!(token = %name, kind = value.kind(), "custom token registered");
        let previous = self
            .custom_tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, value);

        self.needs_repaint.store(true, Ordering::SeqCst);
        if affects_layout {
            self.needs_layout.store(true, Ordering::SeqCst);
        }
        previous
    }

    /// Look up an app-defined token; `None` if it was never registered
    pub fn custom_token(&self, name: &str) -> Option<TokenValue> {
        self.custom_tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn remove_custom_token(&self, name: &str) -> Option<TokenValue> {
        let removed = self
            .custom_tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
        if removed.is_some() {
            self.needs_repaint.store(true, Ordering::SeqCst);
            self.needs_layout.store(true, Ordering::SeqCst);
        }
        removed
    }

    pub fn clear_custom_tokens(&self) {
        self.custom_tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.needs_repaint.store(true, Ordering::SeqCst);
        self.needs_layout.store(true, Ordering::SeqCst);
    }

    /// Names of all registered custom tokens, sorted
    pub fn custom_token_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .custom_tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    // ========== Subscribers ==========

    /// Call `listener` after every theme swap
    pub fn subscribe(&self, listener: impl Fn(&ThemeChange) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Drain `pending` unless another thread is already draining it
    ///
    /// A listener that switches the theme lands here re-entrantly; its change
    /// is queued and delivered by the enclosing loop.
    fn deliver_pending(&self) {
        loop {
            let guard = match self.delivering.try_lock() {
                Ok(guard) => guard,
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
                Err(TryLockError::WouldBlock) => return,
            };

            while let Some(change) = self.next_pending() {
                self.notify(&change);
            }
            drop(guard);

            // A writer may have queued between the last pop and the unlock
            if self.pending.lock().unwrap_or_else(PoisonError::into_inner).is_empty() {
                return;
            }
        }
    }

    fn next_pending(&self) -> Option<ThemeChange> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }

    fn notify(&self, change: &ThemeChange) {
        // Listeners may call back into the manager, so run them unlocked
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(change);
        }
    }

    // ========== Dirty Flags ==========

    /// Check if theme changes require repaint
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint.load(Ordering::SeqCst)
    }

    /// Clear the repaint flag
    pub fn clear_repaint(&self) {
        self.needs_repaint.store(false, Ordering::SeqCst);
    }

    /// Check if theme changes require layout
    pub fn needs_layout(&self) -> bool {
        self.needs_layout.load(Ordering::SeqCst)
    }

    /// Clear the layout flag
    pub fn clear_layout(&self) {
        self.needs_layout.store(false, Ordering::SeqCst);
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::from_preset(ThemePreset::Light)
    }
}

impl fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = self.active.load();
        f.debug_struct("ThemeManager")
            .field("theme", &active.theme.name())
            .field("revision", &active.revision)
            .field("needs_repaint", &self.needs_repaint())
            .field("needs_layout", &self.needs_layout())
            .finish_non_exhaustive()
    }
}

/// Anything that can hand out the theme to render with
///
/// [`FixedTheme`] pins one theme, e.g. for previews and tests.
pub trait ThemeProvider: Send + Sync {
    fn theme(&self) -> Arc<dyn Theme>;
}

impl ThemeProvider for ThemeManager {
    fn theme(&self) -> Arc<dyn Theme> {
        self.current_theme()
    }
}

impl<P: ThemeProvider + ?Sized> ThemeProvider for Arc<P> {
    fn theme(&self) -> Arc<dyn Theme> {
        (**self).theme()
    }
}

/// Provider that always returns the same theme
#[derive(Clone, Debug)]
pub struct FixedTheme(pub Arc<dyn Theme>);

impl ThemeProvider for FixedTheme {
    fn theme(&self) -> Arc<dyn Theme> {
        Arc::clone(&self.0)
    }
}
