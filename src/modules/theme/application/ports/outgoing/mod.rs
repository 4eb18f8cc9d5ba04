mod theme_preference_store;

pub use theme_preference_store::{StoredTheme, ThemePreferenceStore, ThemeStoreError};
