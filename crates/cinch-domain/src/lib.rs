//! Cinch Domain Layer
//!
//! This crate defines the capability traits that every Cinch combinator is
//! built on. It has ZERO external dependencies: it only describes what a
//! deferred computation is, never how one is combined.
//!
//! ## Key Concepts
//!
//! - **Scalar**: a deferred zero-argument computation that yields a value or fails
//! - **Func**: a deferred single-argument computation that yields a value or fails
//! - **Proc**: a deferred single-argument computation run only for its side effects
//!
//! Plain closures returning `Result` implement these traits directly, so
//! callers rarely need to write an impl by hand:
//!
//! ```
//! use cinch_domain::{Func, Scalar};
//!
//! let ready = || Ok::<_, String>(true);
//! assert_eq!(ready.value(), Ok(true));
//!
//! let succ = |x: i32| Ok::<_, String>(x + 1);
//! assert_eq!(succ.apply(41), Ok(42));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod traits;

// Re-exports for convenience
pub use traits::{Func, Proc, Scalar};
