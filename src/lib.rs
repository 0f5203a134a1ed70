//! Generator for Weather Now - writes AI-generated blog articles as static HTML
//!
//! Each run asks a language model for a handful of short articles, pairs each
//! with a stock photo and writes self-contained pages under `articles/`.

pub mod ai;
pub mod app;
pub mod article;
pub mod config;
pub mod error;
pub mod image;
pub mod models;
pub mod prompts;
pub mod render;
pub mod slug;

pub use error::{Error, Result};
