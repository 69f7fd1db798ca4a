//! procall procedure - stored procedure and function invocation
//!
//! Callers describe a call as a set of named, typed parameters with a
//! direction; this crate writes the anonymous-block call text, binds the
//! parameters positionally, executes and collects OUT/INOUT values.
//!
//! ```text
//! ProcedureInvoker
//!     ↓ CallSpec::new      (validate, fix parameter order)
//!     ↓ build_call_text    ("begin ? := PKG.FUNC(P1 => ?); end;")
//!     ↓ prepare_call       (driver)
//!     ↓ bind_parameters
//!     ↓ execute            (driver)
//!     ↓ extract_outputs
//!     ↓ release            (ScopedRelease, always)
//! ```

mod error;
pub mod procedure;

pub use error::{ProcedureError, ProcedureResult};
pub use procedure::*;
