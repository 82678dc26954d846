//! Test helpers: seed collections mirroring the staging datasets, plus
//! scriptable entity sources for exercising the load lifecycle.
//!
//! Run from workspace root: `cargo test -p opsdeck-engine`.

#![allow(dead_code)]

pub mod fixtures;
pub mod sources;
