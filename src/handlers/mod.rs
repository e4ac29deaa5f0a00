//! HTTP handlers for the students resource and service probes.

pub mod health;
pub mod students;
