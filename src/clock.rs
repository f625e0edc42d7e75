//! Sources of "today".
//!
//! Conversion itself never reads the wall clock; callers that want the
//! current date ask a [`Clock`], which tests replace with a [`FixedClock`].

use crate::{GregorianDate, ParseError};

/// Something that knows which calendar date it is.
pub trait Clock {
    /// Returns the current calendar date.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the current year falls outside
    /// the supported `1..=9999` range.
    fn today(&self) -> Result<GregorianDate, ParseError>;
}

/// The host's local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<GregorianDate, ParseError> {
        let now = chrono::Local::now().date_naive();
        tracing::trace!(%now, "read local date");
        GregorianDate::try_from(now)
    }
}

/// A clock stopped on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub GregorianDate);

impl Clock for FixedClock {
    fn today(&self) -> Result<GregorianDate, ParseError> {
        Ok(self.0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Result<GregorianDate, ParseError> {
        (**self).today()
    }
}
