//! Library surface of the vCard batcher CLI: logging setup and the staged
//! export pipeline. The binary in `main.rs` adds argument parsing and
//! terminal presentation on top.

#![deny(unsafe_code)]

pub mod logging;
pub mod pipeline;
