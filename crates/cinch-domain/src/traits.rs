//! Trait definitions for deferred computations
//!
//! These traits are the seams between the combinators in `cinch-func` and
//! the caller's own code. Each one has a single method and a blanket impl for
//! the matching closure shape.

/// A deferred computation with no input
///
/// Nothing runs until [`Scalar::value`] is called, and every call runs the
/// computation again.
pub trait Scalar {
    /// Value produced on success
    type Output;

    /// Error produced on failure
    type Error;

    /// Evaluate the computation
    fn value(&self) -> Result<Self::Output, Self::Error>;
}

/// A deferred computation taking one input
pub trait Func<X> {
    /// Value produced on success
    type Output;

    /// Error produced on failure
    type Error;

    /// Apply the computation to `input`
    fn apply(&self, input: X) -> Result<Self::Output, Self::Error>;
}

/// A deferred computation taking one input and producing nothing
///
/// Procs are run for their side effects only.
pub trait Proc<X> {
    /// Error produced on failure
    type Error;

    /// Run the side effect with `input`
    fn exec(&self, input: X) -> Result<(), Self::Error>;
}

impl<T, E, F> Scalar for F
where
    F: Fn() -> Result<T, E>,
{
    type Output = T;
    type Error = E;

    fn value(&self) -> Result<T, E> {
        self()
    }
}

impl<X, Y, E, F> Func<X> for F
where
    F: Fn(X) -> Result<Y, E>,
{
    type Output = Y;
    type Error = E;

    fn apply(&self, input: X) -> Result<Y, E> {
        self(input)
    }
}

impl<X, E, F> Proc<X> for F
where
    F: Fn(X) -> Result<(), E>,
{
    type Error = E;

    fn exec(&self, input: X) -> Result<(), E> {
        self(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_closure_scalar_is_deferred() {
        let calls = Cell::new(0);
        let scalar = || {
            calls.set(calls.get() + 1);
            Ok::<_, String>("ready")
        };

        assert_eq!(calls.get(), 0);
        assert_eq!(scalar.value(), Ok("ready"));
        assert_eq!(scalar.value(), Ok("ready"));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_closure_scalar_error() {
        let scalar = || Err::<bool, _>("broken".to_string());
        assert_eq!(scalar.value(), Err("broken".to_string()));
    }

    #[test]
    fn test_closure_func() {
        let double = |x: i32| Ok::<_, String>(x * 2);
        assert_eq!(double.apply(21), Ok(42));
    }

    #[test]
    fn test_closure_proc() {
        let seen = Cell::new(0);
        let record = |x: i32| {
            seen.set(x);
            Ok::<_, String>(())
        };

        assert_eq!(record.exec(7), Ok(()));
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_boxed_scalars_share_a_type() {
        let items: Vec<Box<dyn Fn() -> Result<bool, String>>> = vec![
            Box::new(|| Ok(true)),
            Box::new(|| Err("nope".to_string())),
        ];

        assert_eq!(items[0].value(), Ok(true));
        assert_eq!(items[1].value(), Err("nope".to_string()));
    }

    struct Fixed(u8);

    impl Scalar for Fixed {
        type Output = u8;
        type Error = ();

        fn value(&self) -> Result<u8, ()> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_hand_written_scalar() {
        assert_eq!(Fixed(9).value(), Ok(9));
    }
}
