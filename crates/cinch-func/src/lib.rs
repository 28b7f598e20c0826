//! Cinch Func
//!
//! Combinators over the deferred computations defined in `cinch-domain`.
//!
//! # Overview
//!
//! - **[`Conjunction`]**: short-circuiting logical AND over an ordered
//!   sequence of deferred booleans
//! - **[`Repeated`]**: invokes a function a fixed number of times and returns
//!   the last result
//! - **[`FuncOf`]**: lifts a side-effecting [`Proc`](cinch_domain::Proc) into
//!   a [`Func`](cinch_domain::Func) with a fixed result
//!
//! Both combinators are synchronous and pass errors of the wrapped
//! computations through untouched. The only errors they raise on their own
//! are [`FuncError`] values.
//!
//! # Usage
//!
//! ```
//! use cinch_domain::{Func, Scalar};
//! use cinch_func::{Conjunction, FuncError, Repeated};
//!
//! let checks: [fn() -> Result<bool, FuncError>; 2] = [|| Ok(true), || Ok(false)];
//! assert_eq!(Conjunction::new(checks.iter()).value(), Ok(false));
//!
//! let succ = Repeated::new(|x: i32| Ok::<_, FuncError>(x + 1), 3);
//! assert_eq!(succ.apply(5), Ok(6));
//! ```
//!
//! # Configuration
//!
//! The repetition count can be loaded from TOML:
//!
//! ```toml
//! times = 3
//! ```
//!
//! # Logging
//!
//! Combinator flow is reported through `tracing` at `debug` and `trace`
//! level. Installing a subscriber is left to the application.

#![warn(missing_docs)]

mod error;
mod config;
mod conjunction;
mod func_of;
mod repeated;

pub use error::{FuncError, INVALID_REPETITIONS};
pub use config::RepeatConfig;
pub use conjunction::Conjunction;
pub use func_of::FuncOf;
pub use repeated::Repeated;
