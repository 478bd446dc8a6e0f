//! Smart-contract calls.
//!
//! # Data Flow
//! ```text
//! MethodTable (external JSON: address → method → [descriptor])
//!     → ContractArg::parse per argument (JSON + kind check in one step)
//!     → login guard
//!     → POST /private/contracttransfer {c_address, c_method, c_args}
//!     → panel "contract-result"
//! ```
//!
//! A single bad argument aborts the call before anything is sent and
//! leaves earlier output in place.

pub mod args;
pub mod composer;
pub mod descriptor;

pub use args::{validate_input, ArgError, ContractArg, FieldState};
pub use composer::ContractCallComposer;
pub use descriptor::{ArgKind, MethodTable, ParamDescriptor};
