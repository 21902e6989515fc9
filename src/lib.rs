//! promptsmith - Randomized creative prompt generation
//!
//! Composes writing, AI-art, blog, fantasy, persuasive and name prompts from
//! hand-authored dictionaries and `{placeholder}` templates, with optional
//! per-category enhancement clauses. Randomness is injected, so every draw
//! can be seeded or scripted.

pub mod check;
pub mod cli;
pub mod compose;
pub mod config;
pub mod controls;
pub mod enhance;
pub mod error;
pub mod generate;
pub mod rng;
pub mod selector;
pub mod store;

pub use controls::Controls;
pub use error::{GenerateError, SelectError};
pub use generate::{generate, Generated, Generator, Prompt};
pub use store::Store;
