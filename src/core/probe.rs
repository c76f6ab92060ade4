//! Capability lookup along a decorator chain.
//!
//! The walk starts at the outermost link. For a chain node the decorating
//! behavior is tested, then the walk moves to the interactor it wraps; the
//! innermost interactor is tested last. The first layer that provides the
//! capability wins, so an outer decorator shadows what inner ones advertise.

use crate::core::capability::{Capability, Request, Slot};
use crate::core::chain::as_node;
use crate::core::interactor::Interactor;
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;

/// A capability found on a chain: the layer that provides it and the value it gave.
pub struct Probed<C: Capability> {
    layer: Arc<dyn Interactor>,
    value: C::Value,
}

impl<C: Capability> Probed<C> {
    /// The decorating behavior (or innermost interactor) that matched.
    pub fn layer(&self) -> &Arc<dyn Interactor> {
        &self.layer
    }

    /// The matched layer as a concrete type.
    pub fn downcast_layer<T: Interactor>(&self) -> Option<&T> {
        self.layer.as_ref().as_any().downcast_ref::<T>()
    }

    pub fn value(&self) -> &C::Value {
        &self.value
    }

    pub fn into_value(self) -> C::Value {
        self.value
    }
}

impl<C: Capability> Deref for Probed<C> {
    type Target = C::Value;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

/// Finds the first layer of the chain that provides `C`.
///
/// ```rust
/// use usecase::{probe, IoInteractor, Title};
///
/// let u = IoInteractor::new(None, None, |_ctx, _input, _output| Ok(()))
///     .with_title("Create widget")
///     .into_arc();
///
/// let title = probe::<Title>(&u).expect("title is declared");
/// assert_eq!(title.as_str(), "Create widget");
/// ```
pub fn probe<C: Capability>(chain: &Arc<dyn Interactor>) -> Option<Probed<C>> {
    let mut slot = Slot::new::<C>();
    if !probe_into(Some(chain), Some(&mut slot as &mut dyn Any)) {
        return None;
    }

    slot.take::<C>().map(|(layer, value)| Probed { layer, value })
}

/// Finds the first layer of the chain that provides the capability `target` is
/// bound to, and if so, fills `target` with that layer and its value and returns
/// true.
///
/// An absent chain is never found. `target` must be a [`Slot`]: passing no target,
/// or any other value, is a caller bug and panics.
pub fn probe_into(chain: Option<&Arc<dyn Interactor>>, target: Option<&mut dyn Any>) -> bool {
    let Some(mut current) = chain else {
        return false;
    };

    let Some(target) = target else {
        panic!("probe target cannot be nil");
    };
    let Some(slot) = target.downcast_mut::<Slot>() else {
        panic!("probe target must be a capability slot, not a concrete value");
    };

    slot.clear();

    loop {
        let node = as_node(current.as_ref());
        let candidate = node.map_or(current, |node| node.active());

        candidate.provide(&mut Request::new(slot));
        if slot.has_value() {
            slot.fill(Arc::clone(candidate));
            return true;
        }

        match node {
            Some(node) => current = node.wrapped(),
            None => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::capability::{InputPort, OutputPort, Title};
    use crate::core::chain::{wrap, MiddlewareFn};
    use crate::core::info::Info;
    use crate::core::interactor::IoInteractor;

    fn base() -> Arc<dyn Interactor> {
        IoInteractor::new(None, Some(Arc::new(0u64)), |_ctx, _input, _output| Ok(()))
            .with_title("Base")
            .into_arc()
    }

    #[test]
    fn absent_chain_is_not_found() {
        let mut slot = Slot::new::<Title>();
        assert!(!probe_into(None, Some(&mut slot)));
        assert!(!slot.is_filled());
    }

    #[test]
    fn absent_chain_with_absent_target_is_not_found() {
        assert!(!probe_into(None, None));
    }

    #[test]
    #[should_panic(expected = "probe target cannot be nil")]
    fn absent_target_panics() {
        probe_into(Some(&base()), None);
    }

    #[test]
    #[should_panic(expected = "probe target must be a capability slot")]
    fn plain_value_target_panics() {
        probe_into(Some(&base()), Some(&mut 123));
    }

    #[test]
    #[should_panic(expected = "probe target must be a capability slot")]
    fn concrete_type_target_panics() {
        probe_into(Some(&base()), Some(&mut Info::default()));
    }

    #[test]
    fn leaf_is_tested() {
        let u = base();
        let title = probe::<Title>(&u).expect("title");
        assert_eq!(title.as_str(), "Base");
        assert!(title.downcast_layer::<IoInteractor>().is_some());
        assert!(Arc::ptr_eq(title.layer(), &u));
        assert!(probe::<InputPort>(&u).is_none());
    }

    #[test]
    fn slot_is_reset_between_probes() {
        let u = base();
        let mut slot = Slot::new::<OutputPort>();
        assert!(probe_into(Some(&u), Some(&mut slot)));
        assert!(slot.get::<OutputPort>().is_some_and(|sample| sample.is::<u64>()));

        let bare: Arc<dyn Interactor> = wrap(base(), &[&MiddlewareFn::new(|_next| None)]);
        let other = IoInteractor::new(None, None, |_ctx, _input, _output| Ok(())).into_arc();
        assert!(!probe_into(Some(&other), Some(&mut slot)));
        assert!(!slot.is_filled());
        assert!(probe_into(Some(&bare), Some(&mut slot)));
    }
}
