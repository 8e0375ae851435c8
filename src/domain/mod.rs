//! Session state and the pure calculation core. No UI, no I/O.

pub mod app_state;
pub mod entities;
pub mod evaluation;
pub mod export;

pub use app_state::{AppState, FixedCostField, ProductField, StateError};
pub use entities::{FixedCosts, ProductEntry};
pub use evaluation::{classify, evaluate, AggregateResult, Band};
pub use export::{build_tables, ExportTable};
