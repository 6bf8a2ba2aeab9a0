//! Observer callback lists with scoped suppression.
//!
//! A [`Signal`] holds the handlers connected to one notification. Handlers
//! run synchronously, in connection order, on the thread that emits.

use std::{
    cell::{Cell, RefCell},
    fmt::{Debug, Formatter, Result as FmtResult},
    rc::Rc,
};

type Handler<T> = Rc<dyn Fn(&T)>;

/// A list of handlers for one kind of notification.
pub struct Signal<T> {
    handlers: RefCell<Vec<Handler<T>>>,
    /// Number of live [`SignalBlocker`]s.
    blocked: Cell<usize>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
            blocked: Cell::new(0),
        }
    }
}

impl<T> Debug for Signal<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Signal")
            .field("handlers", &self.handlers.borrow().len())
            .field("blocked", &self.blocked.get())
            .finish()
    }
}

impl<T> Signal<T> {
    /// Creates a signal with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects a handler.
    pub fn connect(&self, handler: impl Fn(&T) + 'static) {
        self.handlers.borrow_mut().push(Rc::new(handler));
    }

    /// Calls every handler with `value` unless the signal is blocked.
    ///
    /// Handlers may connect further handlers or emit other signals; new
    /// handlers only see later emissions.
    pub fn emit(&self, value: &T) {
        if self.is_blocked() {
            return;
        }

        let handlers = self.handlers.borrow().clone();
        for handler in handlers {
            handler(value);
        }
    }

    /// Whether at least one blocker is alive.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.blocked.get() > 0
    }

    /// Suppresses emissions until the returned guard is dropped.
    ///
    /// Blockers nest. The guard releases on every exit path, including
    /// early returns and unwinding.
    #[must_use = "the signal is unblocked as soon as the blocker is dropped"]
    pub fn block(&self) -> SignalBlocker<'_, T> {
        self.blocked.set(self.blocked.get() + 1);
        SignalBlocker { signal: self }
    }
}

/// Guard returned by [`Signal::block`].
pub struct SignalBlocker<'a, T> {
    signal: &'a Signal<T>,
}

impl<T> Drop for SignalBlocker<'_, T> {
    fn drop(&mut self) {
        self.signal.blocked.set(self.signal.blocked.get() - 1);
    }
}
