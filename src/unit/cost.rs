use derive_more::{Add, Sum};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt::Display;

/// The scalar traversal cost used throughout a query: shortcut weights, accumulated
/// distances, and the distance carried on a [`crate::model::query_result::QueryResult`].
///
/// Does not carry units, mirroring how a reference routing engine's own `Cost` type is the
/// unitless sink that all of its typed quantities (time, energy, distance) convert into before
/// being compared or summed by the search.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Add, Sum, Serialize, Deserialize)]
pub struct Cost(OrderedFloat<f64>);

impl Cost {
    pub const ZERO: Cost = Cost(OrderedFloat(0.0));
    pub const INFINITY: Cost = Cost(OrderedFloat(f64::MAX));

    /// the reserved value reported on an unreachable [`crate::model::query_result::QueryResult`].
    pub const INVALID: Cost = Cost(OrderedFloat(-1.0));

    pub const fn new(value: f64) -> Cost {
        Cost(OrderedFloat(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }
}

impl Default for Cost {
    fn default() -> Self {
        Cost::ZERO
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Cost::new(value)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priority used by [`crate::algorithm::search::queue::SearchQueue`]. The `priority_queue` crate
/// is a max-heap; wrapping `Cost` in `Reverse` turns "pop the smallest distance" into "pop the
/// greatest priority" without reimplementing `Ord` by hand.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct ReverseCost(Reverse<Cost>);

impl ReverseCost {
    pub fn cost(&self) -> Cost {
        self.0 .0
    }
}

impl From<Cost> for ReverseCost {
    fn from(cost: Cost) -> Self {
        ReverseCost(Reverse(cost))
    }
}
