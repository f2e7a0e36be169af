//! must - assertion helpers for invariant violations
//!
//! Turns errors that should never happen into panics. Every failure panics
//! with a [`KnownError`] payload carrying [`MUST_PANIC`], a message naming the
//! helper and generic types involved, and the original error as its
//! [`source`](std::error::Error::source), so a top-level handler can still
//! inspect the root cause.
//!
//! ```
//! use must::MustExt;
//!
//! let n: u32 = must::v1("42".parse::<u32>());
//! let n = must::not_zero(n);
//! let first = "a,b".split(',').next().must();
//! assert_eq!(n, 42);
//! assert_eq!(first, "a");
//! ```

pub mod error;
pub mod ext;
pub mod logging;
pub mod must;
pub mod recover;

pub use error::{find_known, is_known, BoxError, Known, KnownError, PanicReport};
pub use ext::MustExt;
pub use must::{
    alias, alias_box, alias_ref, call, fn1, fn2, known_err, not_err, not_zero, v0, v1, v2,
};
pub use recover::{panic_message, recover};

/// Identity carried by every must-failure.
pub const MUST_PANIC: Known = Known::new("must_panic", "assertion failed", "must");
