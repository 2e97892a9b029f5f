use serde::{Deserialize, Serialize};

/// Account shape kept for storage compatibility; no command reads or writes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub password: String,
    pub is_pro: bool,
}
