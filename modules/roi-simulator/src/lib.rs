//! ROI Simulator Module
//!
//! Computes return-on-investment projections from a handful of numeric
//! business inputs, persists named scenarios, and exposes a stubbed
//! report-download endpoint.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │         REST API (/api/...)        │
//! │  thin handlers, DTOs, error map    │
//! └────────────────────────────────────┘
//!                  │
//!                  ▼
//! ┌────────────────────────────────────┐
//! │          Domain Service            │
//! │  - input validation (loose nums)   │
//! │  - ROI calculator (pure)           │
//! │  - report rendering seam           │
//! └────────────────────────────────────┘
//!                  │
//!                  ▼
//! ┌────────────────────────────────────┐
//! │     Scenario store (SeaORM)        │
//! └────────────────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;

pub use domain::calculator::{calculate, BOOST_FACTOR};
pub use domain::error::DomainError;
pub use domain::model::{SimulationInputs, SimulationResult};
pub use domain::service::Service;
