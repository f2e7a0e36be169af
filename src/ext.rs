//! Method-style assertions on `Result` and `Option`.

use std::any::type_name;

use crate::error::BoxError;
use crate::must::{fail, fail_with};
use crate::MUST_PANIC;

/// Unwraps a value or raises a must-failure.
pub trait MustExt<T> {
    /// Returns the contained value, panicking with a [`KnownError`](crate::KnownError)
    /// payload when there is none.
    fn must(self) -> T;
}

impl<T, E: Into<BoxError>> MustExt<T> for Result<T, E> {
    #[track_caller]
    fn must(self) -> T {
        match self {
            Ok(v) => v,
            Err(err) => fail_with(
                &format!("must::Result<{}>::must received error", type_name::<T>()),
                err,
            ),
        }
    }
}

impl<T> MustExt<T> for Option<T> {
    #[track_caller]
    fn must(self) -> T {
        match self {
            Some(v) => v,
            None => fail(MUST_PANIC.wrap(format!(
                "must::Option<{}>::must received None",
                type_name::<T>()
            ))),
        }
    }
}
