//! Public chain state polling.
//!
//! # Data Flow
//! ```text
//! GET /public/getchaininfo
//!     → `best`   → render → panel "bestblock"
//!     → `mining` → render_capped → panel "mining"
//!     → notice "update block info {height}"
//! ```

pub mod poller;

pub use poller::ChainInfoPoller;
