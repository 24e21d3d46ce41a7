//! Distances and edge records.

use core::fmt;

/// Weight of a single edge. Always non-negative.
pub type Distance = u32;

/// Accumulated total over several edges (route lengths, path lengths).
///
/// Wider than [`Distance`] so long walks cannot overflow.
pub type Metric = u64;

/// A directed, weighted connection between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: String,
    pub destination: String,
    pub distance: Distance,
}

impl Edge {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        distance: Distance,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            distance,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.source, self.destination, self.distance)
    }
}

impl<S, D> From<(S, D, Distance)> for Edge
where
    S: Into<String>,
    D: Into<String>,
{
    fn from((source, destination, distance): (S, D, Distance)) -> Self {
        Self::new(source, destination, distance)
    }
}
