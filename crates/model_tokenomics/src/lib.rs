//! Pure tokenomics model: vesting unlock schedules and valuation estimates
//! No I/O, no logging, no unwrap/panic, all functions deterministic

pub mod state;
pub mod error;
pub mod math;
pub mod unlock;
pub mod distribution;
pub mod format;
pub mod comparables;
pub mod risk;
pub mod valuation;
pub mod report;
pub mod templates;

// Re-export commonly used types
pub use state::*;
pub use error::*;
pub use unlock::*;
pub use distribution::*;
pub use format::*;
pub use comparables::*;
pub use risk::*;
pub use valuation::*;
pub use report::*;
pub use templates::*;
