//! Data models for the Retro Board application.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod retro;
mod team;

pub use retro::*;
pub use team::*;
