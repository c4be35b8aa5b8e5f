//! The step protocol: resumable computations driven one yield at a time.
//!
//! A [`Stepper`] is an explicit state machine. Every call to
//! [`resume`](Stepper::resume) runs until the next yield point and returns
//! either a [`Resume::Yield`] record or the final [`Resume::Return`] value.
//! Failures travel through the `Err` side and also end the computation.
//!
//! [`Generator`] wraps a boxed stepper and enforces the lifecycle: once a
//! stepper has returned or failed, resuming it again is an invariant
//! violation rather than a silent no-op.

use crate::error::{Invariant, Result};

/// Outcome of one resume.
#[derive(Debug, Clone, PartialEq)]
pub enum Resume<Y, R> {
    Yield(Y),
    Return(R),
}

impl<Y, R> Resume<Y, R> {
    pub fn is_return(&self) -> bool {
        matches!(self, Self::Return(_))
    }

    pub fn into_yield(self) -> Option<Y> {
        match self {
            Self::Yield(y) => Some(y),
            Self::Return(_) => None,
        }
    }
}

/// A resumable computation.
pub trait Stepper {
    type Yield;
    type Return;

    /// Run until the next yield point.
    fn resume(&mut self) -> Result<Resume<Self::Yield, Self::Return>>;
}

/// Lifecycle-checked, type-erased stepper.
pub struct Generator<Y, R> {
    inner: Box<dyn Stepper<Yield = Y, Return = R>>,
    completed: bool,
    yields: u64,
}

impl<Y, R> Generator<Y, R> {
    pub fn new(stepper: impl Stepper<Yield = Y, Return = R> + 'static) -> Self {
        Self {
            inner: Box::new(stepper),
            completed: false,
            yields: 0,
        }
    }

    /// Resume the wrapped stepper.
    ///
    /// Fails with [`Invariant::ResumedAfterCompletion`] once the stepper has
    /// returned or failed.
    pub fn resume(&mut self) -> Result<Resume<Y, R>> {
        if self.completed {
            return Err(Invariant::ResumedAfterCompletion.into());
        }
        let out = self.inner.resume();
        match &out {
            Ok(Resume::Yield(_)) => self.yields += 1,
            Ok(Resume::Return(_)) | Err(_) => self.completed = true,
        }
        out
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Number of records yielded so far.
    pub fn yields(&self) -> u64 {
        self.yields
    }

    /// Drive to completion, collecting every yielded record.
    pub fn run_to_end(&mut self) -> Result<(Vec<Y>, R)> {
        let mut records = Vec::new();
        loop {
            match self.resume()? {
                Resume::Yield(y) => records.push(y),
                Resume::Return(r) => return Ok((records, r)),
            }
        }
    }
}

impl<Y, R> std::fmt::Debug for Generator<Y, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("completed", &self.completed)
            .field("yields", &self.yields)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Countdown(u32);

    impl Stepper for Countdown {
        type Yield = u32;
        type Return = &'static str;

        fn resume(&mut self) -> Result<Resume<u32, &'static str>> {
            if self.0 == 0 {
                return Ok(Resume::Return("liftoff"));
            }
            self.0 -= 1;
            Ok(Resume::Yield(self.0))
        }
    }

    struct Failing;

    impl Stepper for Failing {
        type Yield = ();
        type Return = ();

        fn resume(&mut self) -> Result<Resume<(), ()>> {
            Err(Error::NoPathFound { strategy: "test" })
        }
    }

    #[test]
    fn run_to_end_collects() {
        let mut g = Generator::new(Countdown(3));
        let (records, ret) = g.run_to_end().unwrap();
        assert_eq!(records, vec![2, 1, 0]);
        assert_eq!(ret, "liftoff");
        assert_eq!(g.yields(), 3);
        assert!(g.is_completed());
    }

    #[test]
    fn resume_after_return_is_invariant() {
        let mut g = Generator::new(Countdown(0));
        assert_eq!(g.resume().unwrap(), Resume::Return("liftoff"));
        assert_eq!(
            g.resume(),
            Err(Error::Invariant(Invariant::ResumedAfterCompletion))
        );
    }

    #[test]
    fn resume_after_error_is_invariant() {
        let mut g = Generator::new(Failing);
        assert!(matches!(g.resume(), Err(Error::NoPathFound { .. })));
        assert!(g.is_completed());
        assert_eq!(
            g.resume(),
            Err(Error::Invariant(Invariant::ResumedAfterCompletion))
        );
    }
}
