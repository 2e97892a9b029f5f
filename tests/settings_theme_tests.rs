use tavalendo::core::ThemeStore;
use tavalendo::core::SettingsStore;
use tavalendo::core::theme::parse_colorfgbg;
use tavalendo::errors::AppError;
use tavalendo::models::{Settings, SettingsPatch, Theme, User};
use tavalendo::store::{KeyValueStore, MemoryStore, SETTINGS_KEY, THEME_KEY};

#[test]
fn test_default_settings() {
    let s = Settings::default();
    assert_eq!(s.target_earnings_per_km, 2.0);
    assert_eq!(s.gas_price, 5.80);
    assert_eq!(s.fuel_consumption, 12.0);
    assert_eq!(s.other_vehicle_costs_per_km, 0.30);
    assert_eq!(s.currency, "R$");
}

#[test]
fn test_load_falls_back_to_defaults() {
    assert_eq!(SettingsStore::load(&MemoryStore::new()), Settings::default());

    for raw in ["", "null", "{broken", "{\"gasPrice\": 6.0}", "[]"] {
        let store = MemoryStore::with_values([(SETTINGS_KEY, raw)]);
        assert_eq!(SettingsStore::load(&store), Settings::default(), "raw: {raw}");
    }
}

#[test]
fn test_load_strict_distinguishes_missing_and_corrupted() {
    assert!(SettingsStore::load_strict(&MemoryStore::new()).unwrap().is_none());

    let store = MemoryStore::with_values([(SETTINGS_KEY, "{broken")]);
    match SettingsStore::load_strict(&store) {
        Err(AppError::CorruptedState(key)) => assert_eq!(key, SETTINGS_KEY),
        other => panic!("expected CorruptedState, got {other:?}"),
    }
}

#[test]
fn test_save_replaces_whole_record() {
    let mut store = MemoryStore::new();
    let custom = Settings {
        target_earnings_per_km: 1.5,
        gas_price: 6.25,
        fuel_consumption: 10.0,
        other_vehicle_costs_per_km: 0.5,
        currency: "€".to_string(),
    };

    SettingsStore::save(&mut store, &custom).unwrap();

    let raw = store.raw(SETTINGS_KEY).unwrap();
    assert!(raw.contains("\"targetEarningsPerKm\":1.5"));
    assert!(raw.contains("\"otherVehicleCostsPerKm\":0.5"));
    assert!(raw.contains("\"currency\":\"€\""));
    assert_eq!(SettingsStore::load(&store), custom);
}

#[test]
fn test_patch_keeps_unset_fields() {
    let current = Settings::default();
    let patch = SettingsPatch {
        gas_price: Some(6.0),
        currency: Some("US$".to_string()),
        ..SettingsPatch::default()
    };
    assert!(!patch.is_empty());
    assert!(SettingsPatch::default().is_empty());

    let next = patch.apply_to(&current);
    assert_eq!(next.gas_price, 6.0);
    assert_eq!(next.currency, "US$");
    assert_eq!(next.fuel_consumption, current.fuel_consumption);
    assert_eq!(next.target_earnings_per_km, current.target_earnings_per_km);
}

#[test]
fn test_theme_resolution_order() {
    assert_eq!(ThemeStore::resolve(Some(Theme::Light), Some(true)), Theme::Light);
    assert_eq!(ThemeStore::resolve(Some(Theme::Dark), Some(false)), Theme::Dark);
    assert_eq!(ThemeStore::resolve(None, Some(true)), Theme::Dark);
    assert_eq!(ThemeStore::resolve(None, Some(false)), Theme::Light);
    assert_eq!(ThemeStore::resolve(None, None), Theme::Light);
}

#[test]
fn test_theme_is_stored_as_literal() {
    let mut store = MemoryStore::new();
    ThemeStore::save(&mut store, Theme::Dark).unwrap();

    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(ThemeStore::load(&store), Some(Theme::Dark));
}

#[test]
fn test_unknown_theme_value_counts_as_absent() {
    let store = MemoryStore::with_values([(THEME_KEY, "\"dark\"")]);
    assert_eq!(ThemeStore::load(&store), None);
    assert!(ThemeStore::load_strict(&store).is_err());

    let store = MemoryStore::with_values([(THEME_KEY, "DARK")]);
    assert_eq!(ThemeStore::load(&store), None);
}

#[test]
fn test_theme_toggle_and_codes() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::from_code(" Dark "), Some(Theme::Dark));
    assert_eq!(Theme::from_code("sepia"), None);
}

#[test]
fn test_colorfgbg_signal() {
    assert_eq!(parse_colorfgbg("15;0"), Some(true));
    assert_eq!(parse_colorfgbg("15;default;8"), Some(true));
    assert_eq!(parse_colorfgbg("0;15"), Some(false));
    assert_eq!(parse_colorfgbg("0;7"), Some(false));
    assert_eq!(parse_colorfgbg("garbage"), None);
}

#[test]
fn test_user_uses_camel_case_fields() {
    let user: User =
        serde_json::from_str(r#"{"email":"a@b.c","password":"x","isPro":true}"#).unwrap();
    assert!(user.is_pro);
    assert_eq!(user.email, "a@b.c");
    assert!(serde_json::to_string(&user).unwrap().contains("\"isPro\":true"));
}
