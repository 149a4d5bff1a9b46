//! The theme registry: the single owner of the active preset.
//!
//! The registry restores the persisted preference once at construction,
//! persists every change and notifies subscribers. Storage failures are
//! logged and otherwise ignored; the registry keeps working in memory.

pub mod store;

use folio_core::{ThemeId, ThemePreset};
use std::cell::RefCell;
use std::rc::Rc;
pub use store::{FileThemeStore, MemoryThemeStore, ThemeStore};

/// Called with the new preset after every change.
pub type ThemeListener = Box<dyn FnMut(&'static ThemePreset)>;

/// The registry as shared between the interpreter's setter and the front-end.
pub type SharedThemeRegistry = Rc<RefCell<ThemeRegistry>>;

pub struct ThemeRegistry {
    active: ThemeId,
    store: Option<Box<dyn ThemeStore>>,
    listeners: Vec<ThemeListener>,
}

impl std::fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("active", &self.active)
            .field("persistent", &self.store.is_some())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl ThemeRegistry {
    /// A registry starting at the default preset with nothing persisted.
    pub fn in_memory() -> Self {
        Self {
            active: ThemeId::ALL[0],
            store: None,
            listeners: Vec::new(),
        }
    }

    /// A registry backed by `store`, restoring its preference if it holds a
    /// valid one.
    pub fn with_store(store: Box<dyn ThemeStore>) -> Self {
        let active = match store.load() {
            Ok(Some(raw)) => match raw.parse::<ThemeId>() {
                Ok(id) => {
                    tracing::debug!(theme = %id, "restored theme preference");
                    id
                }
                Err(e) => {
                    tracing::debug!("ignoring stored theme preference: {e}");
                    ThemeId::ALL[0]
                }
            },
            Ok(None) => ThemeId::ALL[0],
            Err(e) => {
                tracing::warn!("could not read theme preference: {e}");
                ThemeId::ALL[0]
            }
        };
        Self {
            active,
            store: Some(store),
            listeners: Vec::new(),
        }
    }

    pub fn into_shared(self) -> SharedThemeRegistry {
        Rc::new(RefCell::new(self))
    }

    pub fn active(&self) -> &'static ThemePreset {
        self.active.preset()
    }

    pub fn active_id(&self) -> ThemeId {
        self.active
    }

    /// Switch presets. Persists and notifies only when the preset changes.
    pub fn set_active(&mut self, id: ThemeId) {
        if id == self.active {
            return;
        }
        self.active = id;
        tracing::info!(theme = %id, "theme changed");

        if let Some(store) = &self.store {
            if let Err(e) = store.save(id) {
                tracing::warn!("could not persist theme preference: {e}");
            }
        }

        let preset = id.preset();
        for listener in &mut self.listeners {
            listener(preset);
        }
    }

    /// Move to the next preset, wrapping around.
    pub fn cycle(&mut self) -> ThemeId {
        let next = self.active.next();
        self.set_active(next);
        next
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&'static ThemePreset) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}
