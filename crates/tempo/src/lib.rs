//! Top-level facade crate for tempo.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use tempo_core::*;
}

pub mod gateway {
    pub use tempo_gateway::*;
}
