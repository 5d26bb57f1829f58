//! API adapters.

pub mod rest;
