//! Lossless bridges to [`core::result::Result`].
//!
//! Call sites that live in `?`-land can convert at the boundary in either
//! direction; both bridges preserve the variant and its payload exactly.

use crate::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// [`From`] as an inherent method, for chaining convenience.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

#[cfg(test)]
mod test {
    use crate::Outcome;

    #[test]
    fn round_trips_core_result() {
        let ok: Result<u32, &str> = Ok(2);
        assert_eq!(Result::from(Outcome::from(ok)), ok);

        let err: Result<u32, &str> = Err("kept");
        assert_eq!(Outcome::from(err).into_result(), err);
    }

    #[test]
    fn question_mark_at_the_boundary() {
        fn parse(s: &str) -> Outcome<u32, core::num::ParseIntError> {
            s.parse::<u32>().into()
        }

        fn double(s: &str) -> Result<u32, core::num::ParseIntError> {
            let n = parse(s).into_result()?;
            Ok(n * 2)
        }

        assert_eq!(double("21"), Ok(42));
        assert!(double("twenty-one").is_err());
    }
}
