//! Function that repeats its computation before returning the last result

use crate::{FuncError, FuncOf, RepeatConfig};
use cinch_domain::Func;
use tracing::{debug, trace};

/// Invokes a [`Func`] a fixed number of times and returns the last result
///
/// Every invocation receives the same input and genuinely runs, so wrapped
/// side effects happen `times` times. A failing invocation stops the loop
/// and its error is returned as is.
///
/// A count below 1 is accepted at construction and rejected on every
/// [`apply`](Func::apply) with [`FuncError::InvalidArgument`], converted into
/// the wrapped computation's error type. That is why the wrapped error type
/// must implement `From<FuncError>`.
///
/// # Examples
///
/// ```
/// use cinch_domain::Func;
/// use cinch_func::{FuncError, Repeated};
///
/// let succ = Repeated::new(|x: i32| Ok::<_, FuncError>(x + 1), 3);
/// assert_eq!(succ.apply(5), Ok(6));
///
/// let never = Repeated::new(|x: i32| Ok::<_, FuncError>(x), 0);
/// assert_eq!(never.apply(5), Err(FuncError::invalid_repetitions()));
/// ```
#[derive(Debug, Clone)]
pub struct Repeated<F> {
    func: F,
    times: i64,
}

impl<F> Repeated<F> {
    /// Repeat `func` `times` times per invocation
    pub fn new(func: F, times: i64) -> Self {
        Self { func, times }
    }

    /// Repeat `func` as many times as `config` says
    ///
    /// The configuration is not validated here; an invalid count surfaces
    /// on invocation.
    pub fn with_config(func: F, config: &RepeatConfig) -> Self {
        Self::new(func, config.times)
    }

    /// Configured repetition count
    pub fn times(&self) -> i64 {
        self.times
    }
}

impl<P> Repeated<FuncOf<P, ()>> {
    /// Repeat a side effect `times` times per invocation
    ///
    /// Invocations yield `()`; only the side effects are observable.
    pub fn from_proc(proc: P, times: i64) -> Self {
        Self::new(FuncOf::new(proc, ()), times)
    }
}

impl<X, F> Func<X> for Repeated<F>
where
    X: Clone,
    F: Func<X>,
    F::Error: From<FuncError>,
{
    type Output = F::Output;
    type Error = F::Error;

    fn apply(&self, input: X) -> Result<F::Output, F::Error> {
        if self.times <= 0 {
            return Err(FuncError::invalid_repetitions().into());
        }
        debug!(times = self.times, "Repeating invocation");
        for idx in 1..self.times {
            trace!("Invocation {}/{}", idx, self.times);
            self.func.apply(input.clone())?;
        }
        self.func.apply(input)
    }
}
