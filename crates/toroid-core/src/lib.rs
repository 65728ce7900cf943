//! Core types and traits for the Toroid spatial index.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Toroid workspace:
//! object identities, wrapped grid positions, the [`Identified`]
//! capability, and the [`IndexError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::IndexError;
pub use id::{ObjectId, Pos};
pub use traits::Identified;
