//! Shared types for the Comanda flow
//!
//! Wire and domain types used across the workspace: menu items as they
//! arrive from the remote endpoint, and the order/stage result shapes
//! produced by the simulated order pipeline.

pub mod models;

// Re-exports
pub use models::{MenuItem, ORDER_RECEIVED, Order, StageStatus};
pub use serde::{Deserialize, Serialize};
