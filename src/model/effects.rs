//! Scoped host effects
//!
//! While the lightbox is open the host has to lock page scrolling and route
//! arrow/escape keys to the lightbox. Both are modelled as guards handed out
//! by an [`EffectRegistry`]: acquiring returns an [`EffectGuard`], dropping
//! the guard releases the effect. Whoever owns the guard (the open lightbox)
//! decides the lifetime, so every exit path (close, filter change, dropping
//! the whole view) releases exactly what was acquired.
//!
//! The registry is single-threaded (`Rc<RefCell<..>>`); it lives on the UI
//! thread next to the model that uses it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A host-side effect held by the lightbox while it is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Grid scrolling is suspended
    ScrollLock,
    /// Escape / arrow keys are routed to the lightbox
    LightboxKeys,
}

/// Tracks which effects are currently held
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct EffectRegistry {
    active: Rc<RefCell<Vec<Effect>>>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire an effect; it stays active until the guard is dropped
    pub fn acquire(&self, effect: Effect) -> EffectGuard {
        self.active.borrow_mut().push(effect);
        EffectGuard {
            active: Rc::clone(&self.active),
            effect,
        }
    }

    pub fn is_active(&self, effect: Effect) -> bool {
        self.active.borrow().contains(&effect)
    }

    /// Number of live guards for `effect`
    pub fn count(&self, effect: Effect) -> usize {
        self.active.borrow().iter().filter(|e| **e == effect).count()
    }

    /// Total number of live guards
    pub fn len(&self) -> usize {
        self.active.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.borrow().is_empty()
    }
}

impl fmt::Debug for EffectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectRegistry")
            .field("active", &*self.active.borrow())
            .finish()
    }
}

/// Releases its effect when dropped
pub struct EffectGuard {
    active: Rc<RefCell<Vec<Effect>>>,
    effect: Effect,
}

impl Drop for EffectGuard {
    fn drop(&mut self) {
        let mut active = self.active.borrow_mut();
        if let Some(pos) = active.iter().rposition(|e| *e == self.effect) {
            active.remove(pos);
        }
    }
}

impl fmt::Debug for EffectGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EffectGuard").field(&self.effect).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_release() {
        let registry = EffectRegistry::new();
        assert!(!registry.is_active(Effect::ScrollLock));

        let guard = registry.acquire(Effect::ScrollLock);
        assert!(registry.is_active(Effect::ScrollLock));
        assert!(!registry.is_active(Effect::LightboxKeys));

        drop(guard);
        assert!(!registry.is_active(Effect::ScrollLock));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_nested_guards_release_independently() {
        let registry = EffectRegistry::new();
        let first = registry.acquire(Effect::ScrollLock);
        let second = registry.acquire(Effect::ScrollLock);
        assert_eq!(registry.count(Effect::ScrollLock), 2);

        drop(first);
        assert!(registry.is_active(Effect::ScrollLock));
        drop(second);
        assert!(!registry.is_active(Effect::ScrollLock));
    }

    #[test]
    fn test_clones_share_state() {
        let registry = EffectRegistry::new();
        let handle = registry.clone();
        let _guard = handle.acquire(Effect::LightboxKeys);
        assert!(registry.is_active(Effect::LightboxKeys));
        assert_eq!(registry.len(), 1);
    }
}
