//! Assertion helpers that panic on unexpected errors.
//!
//! Each helper either hands back its success value unchanged or panics with a
//! [`KnownError`] payload carrying [`MUST_PANIC`], a message naming the helper
//! and the generic types involved, and the original error as its source.
//!
//! ```
//! let port: u16 = must::v1("8080".parse::<u16>());
//! assert_eq!(port, 8080);
//!
//! let (a, b) = must::fn2(|| Ok::<_, std::io::Error>((1u8, "two")));
//! assert_eq!((a, b), (1, "two"));
//! ```

use std::any::{type_name, Any};
use std::panic::Location;

use crate::error::{is_known, BoxError, KnownError};
use crate::logging::{install_panic_hook, PanicFormat};
use crate::MUST_PANIC;

/// Panics unless `v` is of type `T`, returning it as `T`.
///
/// `V` is the static type of `v`, so an already erased `Box<dyn Any>` only
/// aliases to `Box<dyn Any>`. Use [`alias_box`] or [`alias_ref`] to look
/// inside an erased value.
#[track_caller]
pub fn alias<T: Any, V: Any>(v: V) -> T {
    let boxed: Box<dyn Any> = Box::new(v);
    match boxed.downcast::<T>() {
        Ok(t) => *t,
        Err(_) => fail(MUST_PANIC.wrap(format!(
            "must::alias::<{}> cannot alias value of type {}",
            type_name::<T>(),
            type_name::<V>()
        ))),
    }
}

/// Panics unless the erased value holds a `T`, returning it by value.
#[track_caller]
pub fn alias_box<T: Any>(v: Box<dyn Any>) -> T {
    match v.downcast::<T>() {
        Ok(t) => *t,
        Err(_) => fail(MUST_PANIC.wrap(format!(
            "must::alias_box::<{}> cannot alias value of type dyn Any",
            type_name::<T>()
        ))),
    }
}

/// Panics unless the erased reference points at a `T`.
#[track_caller]
pub fn alias_ref<T: Any>(v: &dyn Any) -> &T {
    match v.downcast_ref::<T>() {
        Some(t) => t,
        None => fail(MUST_PANIC.wrap(format!(
            "must::alias_ref::<{}> cannot alias value of type dyn Any",
            type_name::<T>()
        ))),
    }
}

/// Panics if the error is set and its chain carries no [`Known`](crate::Known) identity.
#[track_caller]
pub fn known_err<E: Into<BoxError>>(result: Result<(), E>) {
    if let Err(err) = result {
        let err: BoxError = err.into();
        if !is_known(&*err) {
            let context = format!("must::known_err received unknown error: {err}");
            fail(MUST_PANIC.wrap_err(context, err));
        }
    }
}

/// Panics if the error is set.
///
/// This is equivalent to [`v0`].
#[track_caller]
pub fn not_err<E: Into<BoxError>>(result: Result<(), E>) {
    if let Err(err) = result {
        fail_with("must::not_err received error", err);
    }
}

/// Panics if `t` equals the default value of its type.
///
/// Zero is `T::default()` under `PartialEq`, so an empty `Vec`, `HashMap`
/// or `String` is zero, and so is `-0.0` since it compares equal to `0.0`.
#[track_caller]
pub fn not_zero<T: Default + PartialEq>(t: T) -> T {
    if t == T::default() {
        fail(MUST_PANIC.wrap(format!(
            "must::not_zero::<{}> received zero value",
            type_name::<T>()
        )));
    }
    t
}

/// Alias for [`fn1`], the most common case.
#[track_caller]
pub fn call<T, E, F>(f: F) -> T
where
    E: Into<BoxError>,
    F: FnOnce() -> Result<T, E>,
{
    fn1(f)
}

/// Calls `f` and panics if it returns an error, otherwise returns the value.
#[track_caller]
pub fn fn1<T, E, F>(f: F) -> T
where
    E: Into<BoxError>,
    F: FnOnce() -> Result<T, E>,
{
    match f() {
        Ok(v) => v,
        Err(err) => fail_with(
            &format!("must::fn1::<{}> returned error", type_name::<T>()),
            err,
        ),
    }
}

/// Calls `f` and panics if it returns an error, otherwise returns both values.
#[track_caller]
pub fn fn2<T1, T2, E, F>(f: F) -> (T1, T2)
where
    E: Into<BoxError>,
    F: FnOnce() -> Result<(T1, T2), E>,
{
    match f() {
        Ok(v) => v,
        Err(err) => fail_with(
            &format!(
                "must::fn2::<{}, {}> returned error",
                type_name::<T1>(),
                type_name::<T2>()
            ),
            err,
        ),
    }
}

/// Panics if the error is set.
///
/// This is equivalent to [`not_err`].
#[track_caller]
pub fn v0<E: Into<BoxError>>(result: Result<(), E>) {
    if let Err(err) = result {
        fail_with("must::v0 received error", err);
    }
}

/// Panics if the error is set, otherwise returns the value.
#[track_caller]
pub fn v1<T, E: Into<BoxError>>(result: Result<T, E>) -> T {
    match result {
        Ok(t) => t,
        Err(err) => fail_with(
            &format!("must::v1::<{}> received error", type_name::<T>()),
            err,
        ),
    }
}

/// Panics if the error is set, otherwise returns both values.
#[track_caller]
pub fn v2<T1, T2, E: Into<BoxError>>(result: Result<(T1, T2), E>) -> (T1, T2) {
    match result {
        Ok(v) => v,
        Err(err) => fail_with(
            &format!(
                "must::v2::<{}, {}> received error",
                type_name::<T1>(),
                type_name::<T2>()
            ),
            err,
        ),
    }
}

/// Wraps `err` under [`MUST_PANIC`] with `prefix: {err}` as context and panics.
#[track_caller]
pub(crate) fn fail_with<E: Into<BoxError>>(prefix: &str, err: E) -> ! {
    let err: BoxError = err.into();
    let context = format!("{prefix}: {err}");
    fail(MUST_PANIC.wrap_err(context, err))
}

/// Raises a must-failure.
///
/// The error is logged, then used as the panic payload so a boundary can
/// recover it with [`crate::recover`]. The text panic hook is installed on
/// first use unless one was installed already.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail(err: KnownError) -> ! {
    // take_hook panics while unwinding
    if !std::thread::panicking() {
        install_panic_hook(PanicFormat::Text);
    }
    let location = Location::caller();
    tracing::error!(
        code = err.known().code,
        namespace = err.known().namespace,
        location = %location,
        "{err}"
    );
    std::panic::panic_any(err)
}
