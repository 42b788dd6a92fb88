//! CMAA2 (Conservative Morphological Anti-Aliasing 2) renderer feature

pub mod feature;
pub mod pass;
pub mod volume;

pub use feature::{Cmaa2Feature, FeatureError};
pub use pass::Cmaa2Pass;
pub use volume::{Cmaa2Quality, Cmaa2Volume, VolumeParameter};
