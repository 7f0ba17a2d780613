//! ALICE-Thunk — deferred execution for static scheduler tables
//!
//! A thunk is a fn pointer plus a way to reach the caller's context,
//! small enough to sit by value inside a task or queue entry:
//! - `Thunk<C, A>`: fn pointer + explicit typed context
//! - `Embedded<T, A>`: fn pointer in front of the caller's own state
//! - No heap, no locks, constant-time arm and call
//! - Invoking an empty thunk is a silent no-op
//!
//! Author: Moroya Sakamoto

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod thunk;
pub mod embedded;
#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "python")]
pub mod python;

pub use error::ThunkError;
pub use thunk::{Thunk, ThunkFn};
pub use embedded::{Embedded, EmbeddedFn};
#[cfg(feature = "ffi")]
pub use ffi::{RawThunk, RawThunkFn, RAW_THUNK_NULL};
