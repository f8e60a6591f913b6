#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Tunesort sort form controller.
//!
//! The controller core (`config`, `contract`, `controller`, `error`, `logs`) is
//! target-agnostic and tested natively. The DOM binding and fetch transport
//! are compiled for wasm32 only.

pub mod config;
pub mod contract;
pub mod controller;
pub mod error;
pub mod logs;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod transport;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
