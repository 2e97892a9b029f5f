use chrono::Duration;
use std::cell::RefCell;
use std::rc::Rc;
use tavalendo::analytics::{AnalyticsEvent, AnalyticsSink, NullSink};
use tavalendo::core::{RideCollection, RideService, SettingsStore};
use tavalendo::errors::{AppError, AppResult};
use tavalendo::models::{
    Profitability, RideId, RideInput, SequentialIdGenerator, Settings, Theme,
};
use tavalendo::store::{KeyValueStore, MemoryStore, RIDES_KEY, SETTINGS_KEY, THEME_KEY};

mod common;
use common::{free_vehicle, sample_ride, t0};

#[derive(Clone, Default)]
struct RecordingSink(Rc<RefCell<Vec<AnalyticsEvent>>>);

impl AnalyticsSink for RecordingSink {
    fn send(&self, event: &AnalyticsEvent) -> AppResult<()> {
        self.0.borrow_mut().push(event.clone());
        Ok(())
    }
}

struct FailingSink;

impl AnalyticsSink for FailingSink {
    fn send(&self, _event: &AnalyticsEvent) -> AppResult<()> {
        Err(AppError::Analytics("offline".to_string()))
    }
}

fn ids(_newest: Option<RideId>) -> SequentialIdGenerator {
    SequentialIdGenerator::new(t0(), Duration::minutes(1))
}

fn light_store() -> MemoryStore {
    MemoryStore::with_values([(THEME_KEY, "light")])
}

#[test]
fn test_add_ride_persists_and_reports() {
    let sink = RecordingSink::default();
    let mut service = RideService::open(light_store(), sink.clone(), ids);

    let ride = service.add_ride(sample_ride()).unwrap();
    assert_eq!(ride.profitability, Profitability::Bad);

    let stored = RideCollection::load(service.store());
    assert_eq!(stored.len(), 1);
    assert_eq!(stored.as_slice()[0].id, ride.id);

    let events = sink.0.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].category, "Ride");
    assert_eq!(events[0].action, "Analyzed_Ride");
    assert_eq!(events[0].label, "Profitability: BAD");
}

#[test]
fn test_analytics_failure_does_not_break_add() {
    let mut service = RideService::open(light_store(), FailingSink, ids);

    let ride = service.add_ride(sample_ride()).unwrap();
    assert_eq!(service.rides().len(), 1);
    assert!(service.rides().get(&ride.id).is_some());
}

#[test]
fn test_failed_persist_rolls_back_and_sends_nothing() {
    let mut store = light_store();
    store.set_read_only(true);
    let sink = RecordingSink::default();
    let mut service = RideService::open(store, sink.clone(), ids);

    assert!(service.add_ride(sample_ride()).is_err());
    assert!(service.rides().is_empty());
    assert!(sink.0.borrow().is_empty());
}

#[test]
fn test_preview_stores_nothing() {
    let sink = RecordingSink::default();
    let mut service = RideService::open(light_store(), sink.clone(), ids);

    let preview = service.preview(sample_ride());
    assert_eq!(preview.profitability, Profitability::Bad);
    assert!(service.rides().is_empty());
    assert!(service.store().get(RIDES_KEY).unwrap().is_none());
    assert!(sink.0.borrow().is_empty());
}

#[test]
fn test_delete_ride() {
    let mut service = RideService::open(light_store(), NullSink, ids);
    let first = service.add_ride(sample_ride()).unwrap();
    let second = service.add_ride(RideInput::new(50.0, 10.0, 20.0)).unwrap();

    let unknown = RideId::new(t0() + Duration::days(3), 0);
    assert!(!service.delete_ride(&unknown).unwrap());
    assert_eq!(service.rides().len(), 2);

    assert!(service.delete_ride(&first.id).unwrap());
    let stored = RideCollection::load(service.store());
    assert_eq!(stored.len(), 1);
    assert_eq!(stored.as_slice()[0].id, second.id);
}

#[test]
fn test_save_settings_reanalyzes_every_ride() {
    let mut service = RideService::open(light_store(), NullSink, ids);
    let ride = service.add_ride(sample_ride()).unwrap();
    assert_eq!(ride.profitability, Profitability::Bad);

    service.save_settings(free_vehicle(1.0)).unwrap();

    let updated = service.rides().get(&ride.id).unwrap();
    assert_eq!(updated.profitability, Profitability::Good);
    assert_eq!(updated.input, ride.input);

    let store = service.store();
    assert_eq!(SettingsStore::load(store), free_vehicle(1.0));
    let stored = RideCollection::load(store);
    assert_eq!(stored.as_slice()[0].profitability, Profitability::Good);
}

#[test]
fn test_settings_write_survives_failed_rides_write() {
    let mut store = light_store();
    store.fail_writes_to(RIDES_KEY);
    let mut service = RideService::open(store, NullSink, ids);

    assert!(service.save_settings(free_vehicle(9.0)).is_err());
    assert_eq!(SettingsStore::load(service.store()), free_vehicle(9.0));
    assert!(service.store().get(RIDES_KEY).unwrap().is_none());
}

#[test]
fn test_open_uses_stored_state_and_defaults() {
    let service = RideService::open(light_store(), NullSink, ids);
    assert_eq!(service.settings(), &Settings::default());
    assert!(service.rides().is_empty());
    assert_eq!(service.theme(), Theme::Light);

    let corrupted = MemoryStore::with_values([
        (SETTINGS_KEY, "{"),
        (RIDES_KEY, "oops"),
        (THEME_KEY, "dark"),
    ]);
    let service = RideService::open(corrupted, NullSink, ids);
    assert_eq!(service.settings(), &Settings::default());
    assert!(service.rides().is_empty());
    assert_eq!(service.theme(), Theme::Dark);
}

#[test]
fn test_new_ids_follow_stored_ones() {
    let mut service = RideService::open(light_store(), NullSink, ids);
    service.add_ride(sample_ride()).unwrap();
    let store = service.into_store();

    let seen = Rc::new(RefCell::new(None));
    let seen_in = seen.clone();
    let service = RideService::open(store, NullSink, move |newest| {
        *seen_in.borrow_mut() = newest;
        ids(newest)
    });

    assert_eq!(*seen.borrow(), Some(RideId::new(t0(), 0)));
    assert_eq!(service.rides().len(), 1);
}

#[test]
fn test_theme_toggle_persists() {
    let mut service = RideService::open(light_store(), NullSink, ids);

    assert_eq!(service.toggle_theme().unwrap(), Theme::Dark);
    assert_eq!(service.store().get(THEME_KEY).unwrap().as_deref(), Some("dark"));

    assert_eq!(service.set_theme(Theme::Light).unwrap(), Theme::Light);
    assert_eq!(service.store().get(THEME_KEY).unwrap().as_deref(), Some("light"));
}

fn service_with_two_rides() -> RideService<MemoryStore, NullSink, SequentialIdGenerator> {
    let mut service = RideService::open(light_store(), NullSink, ids);
    service.add_ride(sample_ride()).unwrap();
    service.add_ride(RideInput::new(35.0, 8.0, 20.0)).unwrap();
    service
}

#[test]
fn test_overflowing_ride_is_rejected_and_history_kept() {
    let mut service = service_with_two_rides();

    let result = service.add_ride(RideInput::new(1e308, 1e-10, 30.0));
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert_eq!(service.rides().len(), 2);

    let raw = service.store().raw(RIDES_KEY).unwrap();
    assert!(!raw.contains("null"));
    assert_eq!(RideCollection::load(service.store()).len(), 2);
}

#[test]
fn test_settings_with_overflowing_cost_are_rejected() {
    let mut service = service_with_two_rides();
    let before = service.rides().clone();

    let tiny_consumption = Settings {
        fuel_consumption: 1e-320,
        ..Settings::default()
    };
    let result = service.save_settings(tiny_consumption);
    assert!(matches!(result, Err(AppError::InvalidInput(_))));

    assert_eq!(service.settings(), &Settings::default());
    assert_eq!(service.rides(), &before);
    assert_eq!(SettingsStore::load(service.store()), Settings::default());
    assert_eq!(RideCollection::load(service.store()).len(), 2);
}

#[test]
fn test_settings_making_a_stored_ride_overflow_are_rejected() {
    let mut service = RideService::open(light_store(), NullSink, ids);
    service.add_ride(RideInput::new(1.0, 1e300, 30.0)).unwrap();

    // finite cost per km, but 1e300 km × 1e10 overflows the trip cost
    let costly = Settings {
        other_vehicle_costs_per_km: 1e10,
        ..Settings::default()
    };
    assert!(service.save_settings(costly).is_err());
    assert_eq!(SettingsStore::load(service.store()), Settings::default());
    assert_eq!(RideCollection::load(service.store()).len(), 1);
}
