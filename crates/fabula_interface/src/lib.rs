//! Trait definitions for the Fabula story suggestion library.
//!
//! A [`FabulaDriver`] is the model handle: anything that can turn a
//! [`GenerateRequest`](fabula_core::GenerateRequest) into text. The HTTP
//! client in `fabula_models` implements it, and so do the mocks in tests.

mod traits;

pub use traits::FabulaDriver;
