//! Thunk — fn pointer + explicit context, no heap
//!
//! A deferred call that a scheduler entry can hold by value. The callable
//! receives the thunk itself (and through it, the context) plus per-call args.
//!
//! Author: Moroya Sakamoto

use core::fmt;

use crate::error::{Result, ThunkError};

/// Thunk function pointer — called with the thunk and per-call args
pub type ThunkFn<C, A = ()> = fn(&mut Thunk<C, A>, &mut A);

/// Deferred call with an explicit context
///
/// Size: one fn pointer + `size_of::<C>()`. An empty thunk (no callable)
/// is valid and invoking it does nothing.
pub struct Thunk<C, A = ()> {
    /// Function to run (None = empty)
    func: Option<ThunkFn<C, A>>,
    /// Caller-owned execution context
    context: C,
}

impl<A> Thunk<(), A> {
    /// Empty thunk with no context
    pub const NULL: Self = Self {
        func: None,
        context: (),
    };
}

impl<C, A> Thunk<C, A> {
    /// Armed thunk
    pub const fn new(func: ThunkFn<C, A>, context: C) -> Self {
        Self {
            func: Some(func),
            context,
        }
    }

    /// Empty thunk holding `context`
    pub const fn empty(context: C) -> Self {
        Self {
            func: None,
            context,
        }
    }

    /// Initialize `thunk` with a callable and context.
    ///
    /// Fails only when `thunk` is absent. A `None` callable leaves the thunk
    /// empty but still stores `context`. Any previous callable is overwritten.
    pub fn init<'t>(
        thunk: Option<&'t mut Self>,
        func: Option<ThunkFn<C, A>>,
        context: C,
    ) -> Result<&'t mut Self> {
        match thunk {
            Some(thunk) => Ok(thunk.set(func, context)),
            None => {
                log::debug!("thunk init rejected: no storage");
                Err(ThunkError::InvalidArgument("storage"))
            }
        }
    }

    /// Unchecked `init` for callers that already hold the storage
    #[inline(always)]
    pub fn set(&mut self, func: Option<ThunkFn<C, A>>, context: C) -> &mut Self {
        self.func = func;
        self.context = context;
        self
    }

    /// Run the callable once, if there is a thunk and it is armed.
    ///
    /// A missing or empty thunk is a silent no-op.
    #[inline]
    pub fn call(thunk: Option<&mut Self>, args: &mut A) {
        if let Some(thunk) = thunk {
            thunk.invoke(args);
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
    /// The thunk must be armed.
    #[inline(always)]
    pub unsafe fn call_unchecked(&mut self, args: &mut A) {
        debug_assert!(self.func.is_some(), "call_unchecked on an empty thunk");
        // SAFETY: the caller guarantees `func` is Some.
        let func = unsafe { self.func.unwrap_unchecked() };
        func(self, args);
    }

    /// Is a callable present?
    pub fn is_armed(&self) -> bool {
        self.func.is_some()
    }

    /// Is the thunk empty?
    pub fn is_empty(&self) -> bool {
        self.func.is_none()
    }

    /// Stored callable
    pub fn func(&self) -> Option<ThunkFn<C, A>> {
        self.func
    }

    /// Shared context
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Mutable context
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Consume the thunk, returning its context
    pub fn into_context(self) -> C {
        self.context
    }
}

impl<C: Default, A> Default for Thunk<C, A> {
    fn default() -> Self {
        Self::empty(C::default())
    }
}

impl<C: Clone, A> Clone for Thunk<C, A> {
    fn clone(&self) -> Self {
        Self {
            func: self.func,
            context: self.context.clone(),
        }
    }
}

impl<C: Copy, A> Copy for Thunk<C, A> {}

impl<C: fmt::Debug, A> fmt::Debug for Thunk<C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thunk")
            .field("armed", &self.is_armed())
            .field("context", &self.context)
            .finish()
    }
}
