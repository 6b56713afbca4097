//! Runtime context for resolution calls
//!
//! The platform decides which per-platform settings map applies and how paths
//! are joined and split. The execution context pins every entry point to the
//! single serialization context (the host's UI thread equivalent).

mod execution;
mod platform;

pub use execution::{ExecutionContext, UiRegistration};
pub use platform::Platform;
