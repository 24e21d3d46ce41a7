//! Exact route distance.

use core::fmt;

use rn_core::Metric;
use serde::{Deserialize, Serialize};

use crate::engine::RouteEngine;

/// Result of costing a fixed route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDistance {
    Distance(Metric),
    /// Some hop has no matching edge, or the route has no length.
    NoSuchRoute,
}

impl RouteDistance {
    pub fn value(self) -> Option<Metric> {
        match self {
            RouteDistance::Distance(d) => Some(d),
            RouteDistance::NoSuchRoute => None,
        }
    }
}

impl fmt::Display for RouteDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteDistance::Distance(d) => write!(f, "{}", d),
            RouteDistance::NoSuchRoute => f.write_str("NO_SUCH_ROUTE"),
        }
    }
}

/// Split a textual route into station labels.
///
/// `"A-B-C"` splits on dashes; anything without a dash is read one
/// character per station (`"ABC"`).
pub fn split_route(route: &str) -> Vec<&str> {
    let route = route.trim();
    if route.contains('-') {
        return route.split('-').map(str::trim).collect();
    }
    route
        .char_indices()
        .map(|(i, c)| &route[i..i + c.len_utf8()])
        .collect()
}

impl RouteEngine<'_> {
    /// Total distance along `route`, visiting the stations in order.
    ///
    /// Each hop adds up every matching edge out of the station. A total of
    /// zero is reported as [`RouteDistance::NoSuchRoute`], which also covers
    /// single-station routes.
    pub fn route_distance<S: AsRef<str>>(&self, route: &[S]) -> RouteDistance {
        let mut total: Metric = 0;
        for hop in route.windows(2) {
            match self.hop_distance(hop[0].as_ref(), hop[1].as_ref()) {
                Some(d) => total += d,
                None => return RouteDistance::NoSuchRoute,
            }
        }

        if total == 0 {
            RouteDistance::NoSuchRoute
        } else {
            RouteDistance::Distance(total)
        }
    }

    /// [`route_distance`](Self::route_distance) on a route written as text.
    pub fn route_distance_str(&self, route: &str) -> RouteDistance {
        self.route_distance(&split_route(route))
    }

    /// Sum of every `from -> to` edge; parallel edges all contribute.
    fn hop_distance(&self, from: &str, to: &str) -> Option<Metric> {
        let to = self.store.vertex_id(to)?;
        self.store
            .neighbours(from)?
            .iter()
            .filter(|n| n.destination == to)
            .map(|n| Metric::from(n.distance))
            .fold(None, |acc, d| Some(acc.unwrap_or(0) + d))
    }
}
