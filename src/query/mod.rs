//! Read-side query patterns built on the geometric predicates.
//!
//! Every pattern follows the same shape: collect the records that carry a
//! location, evaluate a predicate or distance per record, then filter, sort
//! or group. Nothing here mutates its input, and records without a location
//! never appear in any result.

mod grouping;
mod near;
mod region;
mod types;

pub use grouping::group_by_proximity;
pub use near::find_near;
pub use region::find_in_region;
pub use types::{Centroid, Locatable, NearResult, ProximityGroup, RegionMatches, WithDistance};
