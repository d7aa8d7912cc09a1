//! Shared graph fixtures for graze tests and benches.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{ring_with_hub, shared_pocket, twin_pockets};
