use serde::{Deserialize, Serialize};

/// Verdict on whether a trip's net earnings per km meet the driver's target.
///
/// `None` is never produced by the analyzer: it marks "no verdict yet" in
/// the presentation layer (e.g. `status` on an empty history).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Profitability {
    Good,
    Medium,
    Bad,
    #[default]
    None,
}

impl Profitability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profitability::Good => "GOOD",
            Profitability::Medium => "MEDIUM",
            Profitability::Bad => "BAD",
            Profitability::None => "NONE",
        }
    }

    /// Short human label used in terminal output.
    pub fn describe(&self) -> &'static str {
        match self {
            Profitability::Good => "Worth it",
            Profitability::Medium => "Borderline",
            Profitability::Bad => "Not worth it",
            Profitability::None => "No verdict",
        }
    }
}

impl std::fmt::Display for Profitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
