//! Short-circuiting logical conjunction over deferred booleans

use cinch_domain::Scalar;
use tracing::trace;

/// Logical AND over an ordered sequence of deferred booleans
///
/// Items are evaluated in iteration order. Evaluation stops at the first
/// item that yields `false` or fails; items after it are never pulled from
/// the sequence. An empty sequence is `true`.
///
/// The sequence must be `Clone` so the conjunction can be evaluated more than
/// once: pass a borrowed iterator (`items.iter()`), an owned collection of
/// cloneable computations, or a lazy adapter.
///
/// # Examples
///
/// ```
/// use cinch_domain::Scalar;
/// use cinch_func::Conjunction;
///
/// let checks: [fn() -> Result<bool, String>; 2] = [|| Ok(true), || Ok(true)];
/// assert_eq!(Conjunction::new(checks.iter()).value(), Ok(true));
///
/// let empty: [fn() -> Result<bool, String>; 0] = [];
/// assert_eq!(Conjunction::new(empty).value(), Ok(true));
/// ```
#[derive(Debug, Clone)]
pub struct Conjunction<I> {
    items: I,
}

impl<I> Conjunction<I> {
    /// Create a conjunction over `items`
    pub fn new(items: I) -> Self {
        Self { items }
    }
}

impl<I> Scalar for Conjunction<I>
where
    I: IntoIterator + Clone,
    I::Item: Scalar<Output = bool>,
{
    type Output = bool;
    type Error = <I::Item as Scalar>::Error;

    fn value(&self) -> Result<bool, Self::Error> {
        for (idx, item) in self.items.clone().into_iter().enumerate() {
            if !item.value()? {
                trace!("Conjunction short-circuited at item {}", idx);
                return Ok(false);
            }
        }
        Ok(true)
    }
}
