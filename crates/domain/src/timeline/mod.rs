//! Era timeline: partition of the collection by yuga and the spotlight
//! navigator over it.

mod partition;
mod spotlight;

pub use partition::{EraGroup, YugaPartition};
pub use spotlight::{SpotlightAction, SpotlightState, SpotlightView};
