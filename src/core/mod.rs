pub mod analyzer;
pub mod calculator;
pub mod check;
pub mod rides;
pub mod service;
pub mod settings;
pub mod theme;

pub use analyzer::RideAnalyzer;
pub use rides::RideCollection;
pub use service::RideService;
pub use settings::SettingsStore;
pub use theme::ThemeStore;
