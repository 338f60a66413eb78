use super::*;
use crate::util::storage::MemoryStore;
use std::cell::RefCell;
use std::rc::Rc;

/// Root surface that records the marker it was given.
#[derive(Clone, Default)]
struct RecordingRoot {
    events: Rc<RefCell<Vec<String>>>,
}

impl ThemeSurface for RecordingRoot {
    fn set_dark(&self, enabled: bool) {
        self.events.borrow_mut().push(format!("root:{enabled}"));
    }
}

/// Store that logs writes into the same event list as `RecordingRoot`.
#[derive(Clone)]
struct RecordingStore {
    inner: MemoryStore,
    events: Rc<RefCell<Vec<String>>>,
}

impl KeyValueStore for RecordingStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        self.events.borrow_mut().push(format!("store:{key}={value}"));
        self.inner.set_item(key, value);
    }

    fn remove_item(&self, key: &str) {
        self.inner.remove_item(key);
    }
}

fn service_with(stored: Option<&str>) -> (ThemeService<MemoryStore, RecordingRoot>, MemoryStore, RecordingRoot) {
    let store = MemoryStore::new();
    if let Some(value) = stored {
        store.set_item(THEME_KEY, value);
    }
    let root = RecordingRoot::default();
    (ThemeService::new(store.clone(), root.clone()), store, root)
}

// =============================================================
// Theme
// =============================================================

#[test]
fn parse_recognizes_exact_values_only() {
    assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
    assert_eq!(Theme::parse(Some("light")), Theme::Light);
    assert_eq!(Theme::parse(Some("Dark")), Theme::Light);
    assert_eq!(Theme::parse(Some("blue")), Theme::Light);
    assert_eq!(Theme::parse(None), Theme::Light);
}

#[test]
fn toggled_flips_between_variants() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn initial_theme_defaults_to_light() {
    let (service, store, root) = service_with(None);
    assert_eq!(service.resolve_initial(), Theme::Light);
    assert_eq!(store.get_item(THEME_KEY).as_deref(), Some("light"));
    assert_eq!(*root.events.borrow(), vec!["root:false".to_owned()]);
}

#[test]
fn initial_theme_reads_stored_dark() {
    let (service, _, root) = service_with(Some("dark"));
    assert_eq!(service.resolve_initial(), Theme::Dark);
    assert_eq!(*root.events.borrow(), vec!["root:true".to_owned()]);
}

#[test]
fn initial_theme_ignores_invalid_value() {
    let (service, store, _) = service_with(Some("blue"));
    assert_eq!(service.resolve_initial(), Theme::Light);
    assert_eq!(store.get_item(THEME_KEY).as_deref(), Some("light"));
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_twice_returns_to_original_and_persists_light() {
    let (service, store, _) = service_with(None);
    let start = service.resolve_initial();
    let once = service.toggle(start);
    assert_eq!(once, Theme::Dark);
    assert_eq!(store.get_item(THEME_KEY).as_deref(), Some("dark"));
    let twice = service.toggle(once);
    assert_eq!(twice, start);
    assert_eq!(store.get_item(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn commit_marks_root_before_writing_storage() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let store = RecordingStore { inner: MemoryStore::new(), events: events.clone() };
    let root = RecordingRoot { events: events.clone() };
    let service = ThemeService::new(store, root);

    service.toggle(Theme::Light);

    assert_eq!(*events.borrow(), vec!["root:true".to_owned(), "store:theme=dark".to_owned()]);
}
