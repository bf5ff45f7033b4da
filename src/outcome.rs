//! The outcome of a computation that may fail.
//!
//! Failure is data, not control flow: a fallible computation hands back an
//! [`Outcome`], and the combinators here thread it through further steps
//! without ever panicking or short-circuiting the *caller*, only the
//! chain itself. Every operation is total.
//!
//! The optional-value counterpart is [`core::option::Option`]; the two
//! conversions [`Outcome::to_option`] and [`Outcome::from_option`] cross
//! that seam (one of them lossily).

use zeroize::Zeroize;

use self::Outcome::{Err, Ok};

/// Either success, carrying a value, or failure, carrying an error
/// descriptor of caller-chosen type.
///
/// Constructed once by a producer, then consumed by the combinators below;
/// each produces a fresh `Outcome`, never mutating in place.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// Successful completion, with the produced value.
    Ok(T),
    /// Failure, with the error descriptor.
    Err(E),
}

// predicates and borrows
impl<T, E> Outcome<T, E> {
    pub fn is_ok(&self) -> bool {
        match self {
            Ok(_) => true,
            Err(_) => false,
        }
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Borrow the live payload, leaving `self` in place.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error),
        }
    }
}

// transforms
impl<T, E> Outcome<T, E> {
    /// Apply `f` to a success value, passing an error through untouched.
    ///
    /// `f` runs at most once, and never on [`Err`]; the error case costs
    /// nothing but moving the descriptor.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Ok(value) => Ok(f(value)),
            Err(error) => Err(error),
        }
    }

    /// Chain a further fallible step onto a success.
    ///
    /// On [`Ok`], returns `f(value)` directly, so `f` decides whether the
    /// chain continues. On [`Err`], returns the error unchanged without
    /// invoking `f`: a sequence of `and_then` calls stops at the first
    /// failure and propagates that exact error value.
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        match self {
            Ok(value) => f(value),
            Err(error) => Err(error),
        }
    }

    /// Apply `f` to an error descriptor, passing a success through untouched.
    ///
    /// The symmetric counterpart to [`map`][Self::map], for enriching or
    /// simplifying error representations without disturbing the success path.
    pub fn format_error<F2, F: FnOnce(E) -> F2>(self, f: F) -> Outcome<T, F2> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(f(error)),
        }
    }

    /// Combine two successes with `f`; the first error (left to right) wins.
    ///
    /// `f` is not invoked unless both arguments are [`Ok`].
    pub fn map2<U, R, F>(f: F, a: Outcome<T, E>, b: Outcome<U, E>) -> Outcome<R, E>
    where
        F: FnOnce(T, U) -> R,
    {
        match (a, b) {
            (Ok(a), Ok(b)) => Ok(f(a, b)),
            (Err(error), _) => Err(error),
            (_, Err(error)) => Err(error),
        }
    }
}

// escape hatches
impl<T, E> Outcome<T, E> {
    /// The success value, discarding the error irrecoverably.
    pub fn to_option(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(_) => None,
        }
    }

    /// The error descriptor, discarding the success value.
    pub fn err(self) -> Option<E> {
        match self {
            Ok(_) => None,
            Err(error) => Some(error),
        }
    }

    /// Promote an optional value, tagging absence with `err`.
    ///
    /// `err` is supplied eagerly; if computing the descriptor is expensive,
    /// do it at the (single) call site that observed the `None`.
    pub fn from_option(err: E, option: Option<T>) -> Self {
        match option {
            Some(value) => Ok(value),
            None => Err(err),
        }
    }

    /// The success value, or the eagerly-supplied `default` on failure.
    pub fn with_default(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(_) => default,
        }
    }
}

impl<T: Zeroize, E: Zeroize> Zeroize for Outcome<T, E> {
    fn zeroize(&mut self) {
        match self {
            Ok(value) => value.zeroize(),
            Err(error) => error.zeroize(),
        }
    }
}
