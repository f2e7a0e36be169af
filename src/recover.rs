//! Catching must-failures at a boundary.
//!
//! The helpers in [`crate::must`] panic with a [`KnownError`] payload. Test
//! harnesses and crash reporters use [`recover`] to turn that panic back into
//! a value while leaving every other panic untouched.

use std::any::Any;
use std::panic::{self, UnwindSafe};

use crate::error::KnownError;

/// Runs `f`, converting a must-failure into `Err`.
///
/// Panics whose payload is not a [`KnownError`] are resumed unchanged.
pub fn recover<F, R>(f: F) -> Result<R, KnownError>
where
    F: FnOnce() -> R + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<KnownError>() {
            Ok(err) => Err(*err),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Returns a readable message for a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(err) = payload.downcast_ref::<KnownError>() {
        err.to_string()
    } else if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}
