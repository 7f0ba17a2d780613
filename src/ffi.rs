//! C-ABI thunk for C schedulers (feature `ffi`)
//!
//! Raw rendition of [`Thunk`](crate::Thunk): `#[repr(C)]` layout, a
//! `void *` context and NULL-pointer checks instead of `Option`.
//!
//! ```c
//! typedef struct alice_thunk alice_thunk_t;
//! typedef void (*alice_thunk_fn)(alice_thunk_t *thunk, void *args);
//! struct alice_thunk { alice_thunk_fn fn; void *context; };
//!
//! alice_thunk_t *alice_thunk_init(alice_thunk_t *thunk, alice_thunk_fn fn, void *context);
//! void alice_thunk_call(alice_thunk_t *thunk, void *args);
//! ```
//!
//! Author: Moroya Sakamoto

use core::ffi::c_void;
use core::ptr;

/// C thunk function pointer
pub type RawThunkFn = unsafe extern "C" fn(thunk: *mut RawThunk, args: *mut c_void);

/// C-layout thunk — 2 pointers
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawThunk {
    /// Function to execute (NULL = empty)
    pub func: Option<RawThunkFn>,
    /// User-defined execution context
    pub context: *mut c_void,
}

/// Empty thunk: NULL fn, NULL context
pub const RAW_THUNK_NULL: RawThunk = RawThunk {
    func: None,
    context: ptr::null_mut(),
};

/// Initialize a thunk. Returns `thunk`, or NULL if `thunk` is NULL.
///
/// A NULL `func` is accepted and leaves the thunk empty.
///
/// # Safety
///
/// `thunk` must be NULL or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn alice_thunk_init(
    thunk: *mut RawThunk,
    func: Option<RawThunkFn>,
    context: *mut c_void,
) -> *mut RawThunk {
    if thunk.is_null() {
        log::debug!("alice_thunk_init rejected: NULL thunk");
        return ptr::null_mut();
    }
    unsafe { alice_thunk_init_unchecked(thunk, func, context) }
}

/// Run the thunk's function with `args`. No-op on a NULL thunk or NULL fn.
///
/// # Safety
///
/// `thunk` must be NULL or point to an initialized `RawThunk`; the stored
/// function's own contract applies to `args`.
#[no_mangle]
pub unsafe extern "C" fn alice_thunk_call(thunk: *mut RawThunk, args: *mut c_void) {
    if let Some(raw) = unsafe { thunk.as_ref() } {
        if let Some(func) = raw.func {
            unsafe { func(thunk, args) };
        }
    }
}

/// `alice_thunk_init` without the NULL check.
///
/// # Safety
///
/// `thunk` must be non-NULL and valid for writes.
#[no_mangle]
pub unsafe extern "C" fn alice_thunk_init_unchecked(
    thunk: *mut RawThunk,
    func: Option<RawThunkFn>,
    context: *mut c_void,
) -> *mut RawThunk {
    unsafe { thunk.write(RawThunk { func, context }) };
    thunk
}

/// `alice_thunk_call` without the NULL checks.
///
/// # Safety
///
/// `thunk` must be non-NULL, initialized and armed.
#[no_mangle]
pub unsafe extern "C" fn alice_thunk_call_unchecked(thunk: *mut RawThunk, args: *mut c_void) {
    let raw = unsafe { &*thunk };
    debug_assert!(raw.func.is_some(), "alice_thunk_call_unchecked on an empty thunk");
    let func = unsafe { raw.func.unwrap_unchecked() };
    unsafe { func(thunk, args) };
}
