use crate::core::analyzer::RideAnalyzer;
use crate::errors::{AppError, AppResult};
use crate::models::{Profitability, RideAnalysis, RideId, RideInput, Settings};
use crate::store::{KeyValueStore, RIDES_KEY};

/// Ride history, newest insertions first.
///
/// Every record is kept consistent with the settings it was last analyzed
/// with; callers run `reanalyze_all` whenever settings change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RideCollection {
    rides: Vec<RideAnalysis>,
}

impl RideCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rides(rides: Vec<RideAnalysis>) -> Self {
        Self { rides }
    }

    /// Stored rides, or an empty collection when the key is missing,
    /// unreadable or does not decode.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let rides = store
            .get(RIDES_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str::<Vec<RideAnalysis>>(&raw).ok())
            .unwrap_or_default();
        Self { rides }
    }

    /// Like `load`, but reports a value that does not decode.
    pub fn load_strict<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<Option<Self>> {
        match store.get(RIDES_KEY)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str::<Vec<RideAnalysis>>(&raw)
                .map(|rides| Some(Self { rides }))
                .map_err(|_| AppError::CorruptedState(RIDES_KEY.to_string())),
        }
    }

    /// Fails on the first ride whose numbers cannot survive a JSON round-trip.
    pub fn ensure_storable(&self) -> AppResult<()> {
        match self.rides.iter().find(|r| !r.is_finite()) {
            Some(ride) => Err(AppError::InvalidInput(format!(
                "ride {} produces values too large to store",
                ride.id
            ))),
            None => Ok(()),
        }
    }

    /// Write the whole history. Nothing is written when a ride is not storable.
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> AppResult<()> {
        self.ensure_storable()?;
        let json = serde_json::to_string(&self.rides)?;
        store.set(RIDES_KEY, &json)
    }

    /// Analyze `input` under `settings` and put the result at the front.
    pub fn add(&mut self, input: RideInput, settings: &Settings, id: RideId) -> &RideAnalysis {
        let analysis = RideAnalyzer::analyze(&input, settings, id);
        self.rides.insert(0, analysis);
        &self.rides[0]
    }

    /// Drop the ride with `id`. Returns false (and changes nothing) when
    /// there is no such ride.
    pub fn remove(&mut self, id: &RideId) -> bool {
        let before = self.rides.len();
        self.rides.retain(|r| &r.id != id);
        self.rides.len() != before
    }

    /// Recompute every ride from its original input, keeping ids and order.
    pub fn reanalyze_all(&mut self, settings: &Settings) {
        for ride in self.rides.iter_mut() {
            *ride = RideAnalyzer::analyze(&ride.input, settings, ride.id);
        }
    }

    /// Newest first by id. The stored order is left untouched.
    pub fn list_sorted(&self) -> Vec<&RideAnalysis> {
        let mut sorted: Vec<&RideAnalysis> = self.rides.iter().collect();
        sorted.sort_by(|a, b| b.id.cmp(&a.id));
        sorted
    }

    /// Id of the ride shown at 1-based `position` in `list_sorted`.
    pub fn id_at(&self, position: usize) -> Option<RideId> {
        if position == 0 {
            return None;
        }
        self.list_sorted().get(position - 1).map(|r| r.id)
    }

    pub fn get(&self, id: &RideId) -> Option<&RideAnalysis> {
        self.rides.iter().find(|r| &r.id == id)
    }

    pub fn newest_id(&self) -> Option<RideId> {
        self.rides.iter().map(|r| r.id).max()
    }

    /// Verdict of the newest ride, `None` on an empty history.
    pub fn latest_profitability(&self) -> Profitability {
        self.list_sorted()
            .first()
            .map(|r| r.profitability)
            .unwrap_or_default()
    }

    /// Rides in stored order.
    pub fn as_slice(&self) -> &[RideAnalysis] {
        &self.rides
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}
