//! Keyboard navigator
//!
//! Roving focus among one group's headers. Focus and activation are
//! separate: moving focus never toggles an item.

use accordion_a11y::{Key, RovingFocus};

use crate::{DomAccess, UiEvent};

pub struct KeyboardNavigator;

impl KeyboardNavigator {
    /// Header that should receive focus for `key`, or `None` when the key
    /// is not a navigation key (the event must then be left alone).
    ///
    /// `current` must be one of `headers`; a miss trips a debug assertion
    /// and is a no-op in release builds.
    pub fn handle_key<E: Copy + Eq + std::fmt::Debug>(headers: &[E], current: E, key: &Key) -> Option<E> {
        let action = key.nav_action()?;
        let Some(index) = headers.iter().position(|&h| h == current) else {
            debug_assert!(false, "{current:?} is not one of the navigated headers");
            return None;
        };
        RovingFocus::new(headers.len())
            .target(index, action)
            .map(|i| headers[i])
    }

    /// Like [`handle_key`](Self::handle_key) over a page-wide header list
    /// tagged with group indices; only `current`'s own group is considered.
    pub fn handle_key_scoped<E: Copy + Eq + std::fmt::Debug>(
        headers: &[(usize, E)],
        current: E,
        key: &Key,
    ) -> Option<E> {
        let group = headers.iter().find(|(_, h)| *h == current).map(|(g, _)| *g);
        let Some(group) = group else {
            debug_assert!(false, "{current:?} is not one of the navigated headers");
            return None;
        };
        let scoped: Vec<E> = headers
            .iter()
            .filter(|(g, _)| *g == group)
            .map(|(_, h)| *h)
            .collect();
        Self::handle_key(&scoped, current, key)
    }

    /// Run navigation for a keydown event: suppress the key's default
    /// action and move input focus. Returns the newly focused header.
    pub fn navigate<D, Ev>(dom: &mut D, headers: &[D::Element], event: &mut Ev) -> Option<D::Element>
    where
        D: DomAccess,
        Ev: UiEvent<D::Element>,
    {
        let target = Self::handle_key(headers, event.target(), event.key()?)?;
        event.prevent_default();
        dom.focus(target);
        Some(target)
    }
}
