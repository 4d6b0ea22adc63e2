//! View-model normalizer.
//!
//! Pure functions turning one raw payload of the remote service into a stable
//! view model. Anything time dependent takes the reference instant as an
//! argument.

pub mod event;
pub mod export;
pub mod financial;
pub mod installment;
pub mod payload;
pub mod roster;
pub mod time;
pub mod user;
