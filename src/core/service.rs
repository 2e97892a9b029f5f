//! Application service: the single place where stores, analyzer, id
//! generator and analytics sink meet.

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::core::analyzer::RideAnalyzer;
use crate::core::rides::RideCollection;
use crate::core::settings::SettingsStore;
use crate::core::theme::ThemeStore;
use crate::errors::AppResult;
use crate::models::{IdGenerator, RideAnalysis, RideId, RideInput, Settings, Theme};
use crate::store::KeyValueStore;

pub struct RideService<S, A, G> {
    store: S,
    sink: A,
    ids: G,
    settings: Settings,
    rides: RideCollection,
    theme: Theme,
}

impl<S, A, G> RideService<S, A, G>
where
    S: KeyValueStore,
    A: AnalyticsSink,
    G: IdGenerator,
{
    /// Load all state from `store`. `make_ids` receives the newest stored
    /// id so that fresh ids sort after every existing ride.
    pub fn open<F>(store: S, sink: A, make_ids: F) -> Self
    where
        F: FnOnce(Option<RideId>) -> G,
    {
        let settings = SettingsStore::load(&store);
        let rides = RideCollection::load(&store);
        let theme = ThemeStore::initial(&store);
        let ids = make_ids(rides.newest_id());

        Self {
            store,
            sink,
            ids,
            settings,
            rides,
            theme,
        }
    }

    /// Analyze, store and report a new ride.
    ///
    /// The analytics event is sent only after the rides were persisted and
    /// its outcome is ignored.
    pub fn add_ride(&mut self, input: RideInput) -> AppResult<RideAnalysis> {
        let id = self.ids.next_id();
        let analysis = self.rides.add(input, &self.settings, id).clone();

        if let Err(e) = self.rides.persist(&mut self.store) {
            self.rides.remove(&id);
            return Err(e);
        }

        let _ = self
            .sink
            .send(&AnalyticsEvent::ride_analyzed(analysis.profitability));

        Ok(analysis)
    }

    /// Analysis under the current settings, without storing anything.
    pub fn preview(&mut self, input: RideInput) -> RideAnalysis {
        RideAnalyzer::analyze(&input, &self.settings, self.ids.next_id())
    }

    /// Returns whether a ride was removed; unknown ids are a no-op.
    pub fn delete_ride(&mut self, id: &RideId) -> AppResult<bool> {
        if !self.rides.remove(id) {
            return Ok(false);
        }
        self.rides.persist(&mut self.store)?;
        Ok(true)
    }

    /// Replace the settings and bring every stored ride in line with them.
    ///
    /// Settings that would make any ride unstorable are rejected before
    /// anything is written. Past that point settings and rides are written
    /// independently: if the rides write fails, the new settings stay saved.
    pub fn save_settings(&mut self, settings: Settings) -> AppResult<()> {
        SettingsStore::validate(&settings)?;
        let mut rides = self.rides.clone();
        rides.reanalyze_all(&settings);
        rides.ensure_storable()?;

        SettingsStore::save(&mut self.store, &settings)?;
        self.settings = settings;
        self.rides = rides;
        self.rides.persist(&mut self.store)
    }

    pub fn toggle_theme(&mut self) -> AppResult<Theme> {
        self.set_theme(self.theme.toggled())
    }

    pub fn set_theme(&mut self, theme: Theme) -> AppResult<Theme> {
        ThemeStore::save(&mut self.store, theme)?;
        self.theme = theme;
        Ok(theme)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn rides(&self) -> &RideCollection {
        &self.rides
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
