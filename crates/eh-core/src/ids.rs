use core::cmp::Ordering;
use core::fmt;

/// Operating-time index used as the x axis of every chart.
pub type Cycle = i64;

/// Identifier of a monitored engine as it appears in the `engine_id` column.
///
/// Upstream tables usually carry integer unit numbers, so ordering is natural:
/// two ids that both parse as integers compare numerically, integer ids sort
/// before textual ones, and textual ids compare lexically.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct EngineId(String);

impl EngineId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }
}

impl Ord for EngineId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            // Tie-break on the raw text so "01" and "1" stay distinct.
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for EngineId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EngineId({})", self.0)
    }
}

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EngineId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EngineId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
