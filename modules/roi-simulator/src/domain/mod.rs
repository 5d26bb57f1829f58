//! Domain layer: value objects, validation, the ROI calculator, and the
//! scenario service.
//!
//! Everything here is synchronous and free of I/O except [`service::Service`],
//! which drives the repository port.

pub mod calculator;
pub mod error;
pub mod model;
pub mod report;
pub mod repo;
pub mod service;
