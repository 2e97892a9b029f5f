pub mod classify;
pub mod cost;
pub mod rates;
