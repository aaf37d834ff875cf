//! Typed wrappers for CLI values.

pub mod ids;

pub use ids::PlayerId;
