//! Stored procedure and function calls
//!
//! This module builds anonymous-block calls from named IN, OUT and INOUT
//! parameters, binds them positionally and reads the outputs back.

mod binder;
mod call_text;
mod coercion;
mod extractor;
mod invoker;
mod parameter;


pub use binder::*;
pub use call_text::*;
pub use coercion::*;
pub use extractor::*;
pub use invoker::*;
pub use parameter::*;
