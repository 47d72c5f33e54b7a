//! Diet analysis — the adapter around the external model plus everything
//! derived from its output.
//!
//! `analyzer` owns the external-call contract, `schema` declares the response
//! shape, `prompts` builds the instruction, `view` derives chart-friendly
//! values, `handlers` wires it all to the HTTP surface.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
pub mod schema;
pub mod view;
