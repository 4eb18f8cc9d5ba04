use tracing::{info, warn};

use crate::shared::observable::Observable;
use crate::theme::application::ports::outgoing::{ThemePreferenceStore, ThemeStoreError};
use crate::theme::domain::{ThemePreference, VisitorId};

/// Owns one visitor's theme state.
///
/// The stored value wins over `default`. A value is persisted before it is
/// published, so a failed write leaves the visible state untouched. The flip
/// itself happens inside the store, so concurrent toggles for one visitor
/// never collapse into one.
pub struct ThemeController<S>
where
    S: ThemePreferenceStore,
{
    store: S,
    visitor: VisitorId,
    state: Observable<ThemePreference>,
}

impl<S> ThemeController<S>
where
    S: ThemePreferenceStore,
{
    pub async fn load(
        store: S,
        visitor: VisitorId,
        default: ThemePreference,
    ) -> Result<Self, ThemeStoreError> {
        let initial = match store.read(&visitor).await {
            Ok(Some(theme)) => theme,
            Ok(None) => {
                store.write(&visitor, default).await?;
                default
            }
            Err(ThemeStoreError::CorruptValue(raw)) => {
                warn!(%visitor, raw = %raw, "Discarding unreadable theme value");
                store.write(&visitor, default).await?;
                default
            }
            Err(err) => return Err(err),
        };

        Ok(Self {
            store,
            visitor,
            state: Observable::new(initial),
        })
    }

    pub fn current(&self) -> ThemePreference {
        self.state.get()
    }

    pub async fn toggle(&self) -> Result<ThemePreference, ThemeStoreError> {
        let next = self.store.toggle(&self.visitor, self.current()).await?;
        self.state.set(next);

        info!(visitor = %self.visitor, theme = %next, "Theme toggled");
        Ok(next)
    }
}
