//! Interrupt-safe storage for state handed from `main` to interrupt handlers.

use core::cell::RefCell;

use critical_section::Mutex;

/// A `static`-friendly slot guarded by a critical section.
///
/// `main` installs the value once the hardware is set up; handlers then
/// borrow it for the duration of one invocation. Because the borrow happens
/// inside a critical section, a handler's `goto` and the writes that follow
/// it are never split by the other handler.
pub struct InterruptShared<T> {
    slot: Mutex<RefCell<Option<T>>>,
}

impl<T> InterruptShared<T> {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(RefCell::new(None)),
        }
    }

    /// Stores `value`, returning whatever was there before.
    pub fn install(&self, value: T) -> Option<T> {
        critical_section::with(|cs| self.slot.borrow(cs).replace(Some(value)))
    }

    /// Removes and returns the value.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.slot.borrow(cs).take())
    }

    /// Returns true once a value has been installed.
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.slot.borrow(cs).borrow().is_some())
    }

    /// Runs `f` on the value inside a critical section.
    ///
    /// Returns `None` if nothing is installed yet (an interrupt that fires
    /// before `main` finished start-up) or if the slot is already borrowed.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| {
            let mut slot = self.slot.borrow(cs).try_borrow_mut().ok()?;
            let value = slot.as_mut()?;
            Some(f(value))
        })
    }
}

impl<T> Default for InterruptShared<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `f` with two shared values borrowed in one critical section.
///
/// Used by a handler that needs both its own state and the display.
pub fn with_both<A, B, R>(
    first: &InterruptShared<A>,
    second: &InterruptShared<B>,
    f: impl FnOnce(&mut A, &mut B) -> R,
) -> Option<R> {
    critical_section::with(|cs| {
        let mut first = first.slot.borrow(cs).try_borrow_mut().ok()?;
        let mut second = second.slot.borrow(cs).try_borrow_mut().ok()?;
        let (Some(a), Some(b)) = (first.as_mut(), second.as_mut()) else {
            return None;
        };
        Some(f(a, b))
    })
}
