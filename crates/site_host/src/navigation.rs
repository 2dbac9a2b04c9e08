//! Navigation observer hub.
//!
//! Browser adapters route every history mutation and navigation event through a
//! [`NavigationHub`]; anything that needs to react to navigation subscribes here instead of
//! patching the navigation primitives itself.

use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Source of a navigation notification.
pub enum NavigationTrigger {
    /// The renderer was just mounted.
    Initial,
    /// The document finished parsing (`DOMContentLoaded`).
    DocumentReady,
    /// Back/forward traversal (`popstate`).
    PopState,
    /// `history.pushState` completed.
    PushState,
    /// `history.replaceState` completed.
    ReplaceState,
}

impl NavigationTrigger {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::DocumentReady => "document-ready",
            Self::PopState => "popstate",
            Self::PushState => "push-state",
            Self::ReplaceState => "replace-state",
        }
    }
}

/// Callback invoked for every emitted trigger.
pub type NavigationObserver = Rc<dyn Fn(NavigationTrigger)>;

#[derive(Clone, Default)]
/// Registration point for navigation observers.
pub struct NavigationHub {
    observers: Rc<RefCell<Vec<NavigationObserver>>>,
}

impl NavigationHub {
    /// Registers `observer` for all future triggers.
    pub fn subscribe(&self, observer: impl Fn(NavigationTrigger) + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Notifies every observer in registration order.
    pub fn emit(&self, trigger: NavigationTrigger) {
        // Observers may subscribe while being notified.
        let observers = self.observers.borrow().clone();
        for observer in observers {
            observer(trigger);
        }
    }

    /// Runs `primitive`, then notifies observers, returning the primitive's result unchanged.
    pub fn wrap<T>(&self, trigger: NavigationTrigger, primitive: impl FnOnce() -> T) -> T {
        let result = primitive();
        self.emit(trigger);
        result
    }

    /// Like [`NavigationHub::wrap`], but observers are only notified when `primitive` succeeds.
    ///
    /// # Errors
    ///
    /// Returns the primitive's error untouched.
    pub fn wrap_fallible<T, E>(
        &self,
        trigger: NavigationTrigger,
        primitive: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        let result = primitive()?;
        self.emit(trigger);
        Ok(result)
    }
}

impl std::fmt::Debug for NavigationHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationHub")
            .field("observers", &self.observer_count())
            .finish()
    }
}
