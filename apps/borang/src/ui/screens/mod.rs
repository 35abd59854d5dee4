//! Screen renderers for each wizard step.

pub mod additional;
pub mod complete;
pub mod documents;
pub mod person;
pub mod unit;
