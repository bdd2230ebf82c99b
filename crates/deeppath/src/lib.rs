//! XPath-like access to deeply nested JSON structures.
//!
//! Paths are slash-delimited: `users[0]/name`, `users/*/name`,
//! `servers[*]/port`. [`get`] reads with wildcard fan-out, [`get_strict`]
//! is a fail-fast single-cursor lookup, [`set`] writes in place and
//! creates intermediate containers, and [`walk`] lazily enumerates every
//! leaf with its path.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let mut doc = json!({"users": [{"name": "Al"}, {"name": "Bo"}]});
//!
//! assert_eq!(deeppath::get(&doc, "users[0]/name"), Some(json!("Al")));
//! // Wildcard paths always return an array of every match
//! assert_eq!(deeppath::get(&doc, "users/*/name"), Some(json!(["Al", "Bo"])));
//!
//! deeppath::set(&mut doc, "users[2]/name", json!("Cy")).unwrap();
//! assert_eq!(deeppath::get(&doc, "users/*/name"), Some(json!(["Al", "Bo", "Cy"])));
//! ```
//!
//! The value tree is plain [`serde_json::Value`]; any decoder that
//! produces one (and any encoder that consumes one) composes with this
//! crate. Reads borrow the tree and [`set`] takes `&mut`, so callers
//! must serialize mutating access themselves.

mod types;
pub use types::{PathCommand, Repetition};

mod parser;
pub use parser::{parse_path, repetition_index};

mod eval;
pub use eval::{eval, get};

mod strict;
pub use strict::get_strict;

mod set;
pub use set::{set, SetError};

mod walk;
pub use walk::{walk, Walk};
