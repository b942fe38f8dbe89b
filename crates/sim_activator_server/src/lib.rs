//! sim_activator_server — REST surface for SIM activation.
//!
//! ```text
//! POST /activate            {"iccid", "customerEmail"} -> {"message", "recorded", "recordId", "active", "outcome"}
//! GET  /query?simCardId=N   -> {"iccid", "customerEmail", "active"} | 404
//! GET  /health
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod mock_actuator;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
