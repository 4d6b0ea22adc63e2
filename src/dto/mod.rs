//! DTOs bridging the services with the JSON and CSV responses.

pub mod calendar;
pub mod dashboard;
pub mod financials;
pub mod installments;
pub mod roster;
pub mod users;
