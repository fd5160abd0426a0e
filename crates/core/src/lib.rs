//! Core library for telcoref
//!
//! This crate implements the **Functional Core** of the telcoref application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The telcoref project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`telcoref_core`** (this crate): The catalog and every query over it, with zero I/O
//! - **`telcoref`**: The MCP server, transports and CLI (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: Same catalog and arguments always produce the same output
//! - **No side effects**: No I/O operations, no global state
//! - **Testable**: Every module is tested against small fixture catalogs or the
//!   built-in one, no mocking required
//!
//! # Module Organization
//!
//! - [`catalog`]: Record types, categories, the built-in data and its validation
//! - [`search`]: Weighted search, ranking and offset pagination
//! - [`lookup`]: Detail lookup and side-by-side comparison of stable APIs
//! - [`categories`]: Category listing with nested API summaries
//! - [`use_cases`]: Use cases grouped by industry
//! - [`markdown`]: Markdown rendering for every response shape
//! - [`output`]: The `markdown | json` response format selector
//! - [`snippets`]: Client code snippets generated from templates
//! - [`prompts`]: Prompt templates
//! - [`resources`]: The `telcoref://` resource scheme
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use telcoref_core::catalog::Catalog;
//! use telcoref_core::search::{search, SearchParams};
//!
//! let catalog = Catalog::builtin();
//! let page = search(
//!     &catalog,
//!     &SearchParams {
//!         query: Some("fraud".to_string()),
//!         ..SearchParams::default()
//!     },
//! );
//!
//! assert!(page.total > 0);
//! ```

pub mod catalog;
pub mod categories;
pub mod lookup;
pub mod markdown;
pub mod output;
pub mod prompts;
pub mod resources;
pub mod search;
pub mod snippets;
pub mod use_cases;
