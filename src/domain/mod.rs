//! View models produced by the normalizer and consumed by the screens.

pub mod event;
pub mod installment;
pub mod metrics;
pub mod program;
pub mod revenue;
pub mod roster;
pub mod types;
pub mod user;
