//! Page builder: a composition engine for `<SectionBlock>` pages and the HTTP
//! service that hosts editing sessions over it.
//!
//! # Architecture
//! - `layout`, `composition` and `generation::codegen` are the pure core:
//!   synchronous, no I/O, no logging.
//! - `sessions`, `saves` and `routes` are the async host built on Axum.

pub mod composition;
pub mod config;
pub mod errors;
pub mod generation;
pub mod layout;
pub mod routes;
pub mod saves;
pub mod sessions;
pub mod state;
