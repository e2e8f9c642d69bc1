pub mod tracker;

pub use tracker::{intersection_ratio, MotionPreference, RevealState, RevealTracker};
