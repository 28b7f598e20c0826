//! Adapter lifting a side effect into a value-producing function

use cinch_domain::{Func, Proc};

/// A [`Func`] that runs a [`Proc`] and then returns a fixed result
///
/// # Examples
///
/// ```
/// use cinch_domain::Func;
/// use cinch_func::FuncOf;
/// use std::cell::Cell;
///
/// let last = Cell::new(0);
/// let func = FuncOf::new(|x: i32| { last.set(x); Ok::<_, String>(()) }, "done");
///
/// assert_eq!(func.apply(7), Ok("done"));
/// assert_eq!(last.get(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct FuncOf<P, Y> {
    proc: P,
    result: Y,
}

impl<P, Y> FuncOf<P, Y> {
    /// Wrap `proc`, answering every application with a clone of `result`
    pub fn new(proc: P, result: Y) -> Self {
        Self { proc, result }
    }
}

impl<X, P, Y> Func<X> for FuncOf<P, Y>
where
    P: Proc<X>,
    Y: Clone,
{
    type Output = Y;
    type Error = P::Error;

    fn apply(&self, input: X) -> Result<Y, P::Error> {
        self.proc.exec(input)?;
        Ok(self.result.clone())
    }
}
