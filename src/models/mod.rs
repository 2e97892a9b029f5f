pub mod profitability;
pub mod ride;
pub mod ride_id;
pub mod settings;
pub mod theme;
pub mod user;

pub use profitability::Profitability;
pub use ride::{RideAnalysis, RideInput};
pub use ride_id::{ClockIdGenerator, IdGenerator, RideId, SequentialIdGenerator};
pub use settings::{Settings, SettingsPatch};
pub use theme::Theme;
pub use user::User;
