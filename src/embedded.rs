//! Embedded thunk — fn pointer in front of caller state
//!
//! The callable is the leading field of a container that also holds the
//! caller's state, so the callable gets a typed `&mut` to the whole entry
//! instead of a bare thunk. With `T = ()` the container is exactly one
//! fn pointer wide.
//!
//! Unlike [`Thunk`](crate::Thunk), an `Embedded` can only be armed with a
//! real callable; `init` rejects `None`.
//!
//! Author: Moroya Sakamoto

use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::error::{Result, ThunkError};

/// Embedded thunk function pointer
pub type EmbeddedFn<T, A = ()> = fn(&mut Embedded<T, A>, &mut A);

/// Callable + enclosing state
#[repr(C)]
pub struct Embedded<T, A = ()> {
    /// Function to run (None = storage not yet armed)
    func: Option<EmbeddedFn<T, A>>,
    /// Caller state, reachable through `Deref`
    pub state: T,
}

impl<T, A> Embedded<T, A> {
    /// Armed entry
    pub const fn new(func: EmbeddedFn<T, A>, state: T) -> Self {
        Self {
            func: Some(func),
            state,
        }
    }

    /// Unarmed storage, ready for `init`
    pub const fn empty(state: T) -> Self {
        Self { func: None, state }
    }

    /// Arm `entry` with `func`, leaving its state untouched.
    ///
    /// Fails if either the storage or the callable is absent.
    pub fn init<'e>(
        entry: Option<&'e mut Self>,
        func: Option<EmbeddedFn<T, A>>,
    ) -> Result<&'e mut Self> {
        let Some(entry) = entry else {
            log::debug!("embedded thunk init rejected: no storage");
            return Err(ThunkError::InvalidArgument("storage"));
        };
        let Some(func) = func else {
            log::debug!("embedded thunk init rejected: no callable");
            return Err(ThunkError::InvalidArgument("callable"));
        };
        Ok(entry.set(func))
    }

    /// Unchecked `init`
    #[inline(always)]
    pub fn set(&mut self, func: EmbeddedFn<T, A>) -> &mut Self {
        self.func = Some(func);
        self
    }

    /// Run the callable once, if there is an entry and it is armed
    #[inline]
    pub fn call(entry: Option<&mut Self>, args: &mut A) {
        if let Some(entry) = entry {
            entry.invoke(args);
        }
    }

    /// Run the callable once if armed
    #[inline]
    pub fn invoke(&mut self, args: &mut A) {
        if let Some(func) = self.func {
            func(self, args);
        }
    }

    /// Run the callable with no armed check.
    ///
    /// # Safety
    ///
    /// The entry must be armed (built with `new`, or `init`/`set` succeeded).
    #[inline(always)]
    pub unsafe fn call_unchecked(&mut self, args: &mut A) {
        debug_assert!(self.func.is_some(), "call_unchecked on an unarmed entry");
        // SAFETY: the caller guarantees `func` is Some.
        let func = unsafe { self.func.unwrap_unchecked() };
        func(self, args);
    }

    /// Is a callable present?
    pub fn is_armed(&self) -> bool {
        self.func.is_some()
    }

    /// Consume the entry, returning its state
    pub fn into_inner(self) -> T {
        self.state
    }
}

impl<T, A> Deref for Embedded<T, A> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.state
    }
}

impl<T, A> DerefMut for Embedded<T, A> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.state
    }
}

impl<T: Default, A> Default for Embedded<T, A> {
    fn default() -> Self {
        Self::empty(T::default())
    }
}

impl<T: fmt::Debug, A> fmt::Debug for Embedded<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Embedded")
            .field("armed", &self.is_armed())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scheduler-style entry: the thunk leads, bookkeeping follows
    #[derive(Default)]
    struct Blinker {
        count: u32,
        last_arg: u32,
    }

    fn blink(entry: &mut Embedded<Blinker, u32>, arg: &mut u32) {
        entry.count += 1;
        entry.last_arg = *arg;
    }

    fn blink_twice(entry: &mut Embedded<Blinker, u32>, _: &mut u32) {
        entry.count += 2;
    }

    fn noop(_: &mut Embedded<()>, _: &mut ()) {}

    fn add_one(_: &mut Embedded<(), u32>, n: &mut u32) {
        *n += 1;
    }

    #[test]
    fn test_init_returns_storage() {
        let mut entry: Embedded<Blinker, u32> = Embedded::default();
        let expected = &entry as *const Embedded<Blinker, u32>;
        let result = Embedded::init(Some(&mut entry), Some(blink)).unwrap();
        assert!(core::ptr::eq(result, expected));
        assert!(entry.is_armed());
    }

    #[test]
    fn test_init_without_storage() {
        let result = Embedded::<Blinker, u32>::init(None, Some(blink));
        assert_eq!(result.err(), Some(ThunkError::InvalidArgument("storage")));
    }

    #[test]
    fn test_init_without_callable() {
        let mut entry: Embedded<Blinker, u32> = Embedded::default();
        let result = Embedded::init(Some(&mut entry), None);
        assert_eq!(result.err(), Some(ThunkError::InvalidArgument("callable")));
        assert!(!entry.is_armed());
    }

    #[test]
    fn test_init_keeps_state() {
        let mut entry: Embedded<Blinker, u32> = Embedded::empty(Blinker {
            count: 9,
            last_arg: 0,
        });
        Embedded::init(Some(&mut entry), Some(blink)).unwrap();
        assert_eq!(entry.count, 9);
    }

    #[test]
    fn test_counter_on_enclosing_state() {
        let mut entry: Embedded<Blinker, u32> = Embedded::new(blink, Blinker::default());
        for i in 0..3 {
            entry.invoke(&mut { i });
        }
        assert_eq!(entry.count, 3);
        assert_eq!(entry.last_arg, 2);
    }

    #[test]
    fn test_call_noop_cases() {
        Embedded::<Blinker, u32>::call(None, &mut 0);

        let mut entry: Embedded<Blinker, u32> = Embedded::default();
        Embedded::call(Some(&mut entry), &mut 5);
        assert_eq!(entry.count, 0);
    }

    #[test]
    fn test_rearm_overwrites() {
        let mut entry: Embedded<Blinker, u32> = Embedded::default();
        Embedded::init(Some(&mut entry), Some(blink)).unwrap();
        Embedded::init(Some(&mut entry), Some(blink_twice)).unwrap();
        entry.invoke(&mut 0);
        assert_eq!(entry.count, 2);
    }

    #[test]
    fn test_args_counter() {
        let mut entry: Embedded<(), u32> = Embedded::new(add_one, ());
        let mut n = 0;
        entry.invoke(&mut n);
        unsafe { entry.call_unchecked(&mut n) };
        assert_eq!(n, 2);
    }

    #[test]
    fn test_single_pointer_size() {
        let entry: Embedded<()> = Embedded::new(noop, ());
        assert!(entry.is_armed());
        assert_eq!(core::mem::size_of::<Embedded<()>>(), core::mem::size_of::<fn()>());
    }
}
