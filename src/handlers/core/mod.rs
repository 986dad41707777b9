//! Core handler infrastructure: context, trait, and registry.

pub mod context;
pub mod registry;

pub use context::{Context, Handler, HandlerResult};
pub use registry::Registry;
