//! Optional behaviors an interactor may advertise.
//!
//! A capability is a marker type naming a behavior and the value an interactor
//! hands out when it has that behavior. Interactors advertise capabilities from
//! [`Interactor::provide`](crate::Interactor::provide); callers discover them with
//! [`probe`](crate::probe) without knowing any concrete layer type.

use crate::core::interactor::Interactor;
use crate::error::SharedError;
use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Sample value of an input or output port, e.g. `Arc::new(MyInput::default())`.
pub type PortSample = Arc<dyn Any + Send + Sync>;

/// A named behavior that can be discovered on an interactor chain.
///
/// ```rust
/// use usecase::Capability;
///
/// /// Declares the cache key prefix used by a caching decorator.
/// struct CachePrefix;
///
/// impl Capability for CachePrefix {
///     type Value = String;
/// }
/// ```
pub trait Capability: 'static {
    /// What a layer offering this capability hands out.
    type Value: Send + Sync + 'static;
}

/// Declares the input port.
pub struct InputPort;

impl Capability for InputPort {
    type Value = PortSample;
}

/// Declares the output port.
pub struct OutputPort;

impl Capability for OutputPort {
    type Value = PortSample;
}

/// Declares a machine-friendly name.
pub struct Name;

impl Capability for Name {
    type Value = String;
}

/// Declares a human-friendly title.
pub struct Title;

impl Capability for Title {
    type Value = String;
}

/// Declares a description.
pub struct Description;

impl Capability for Description {
    type Value = String;
}

/// Declares the tags of a group of use cases.
pub struct Tags;

impl Capability for Tags {
    type Value = Vec<String>;
}

/// Declares errors that are expected to cause failure.
pub struct ExpectedErrors;

impl Capability for ExpectedErrors {
    type Value = Vec<SharedError>;
}

/// Declares deprecation status.
pub struct Deprecated;

impl Capability for Deprecated {
    type Value = bool;
}

/// A place to store the result of probing for one capability.
///
/// Bound to its capability on construction; filled by a successful probe with the
/// matching layer and the value that layer provided.
pub struct Slot {
    capability: TypeId,
    capability_name: &'static str,
    value: Option<Box<dyn Any + Send + Sync>>,
    layer: Option<Arc<dyn Interactor>>,
}

impl Slot {
    pub fn new<C: Capability>() -> Self {
        Self {
            capability: TypeId::of::<C>(),
            capability_name: type_name::<C>(),
            value: None,
            layer: None,
        }
    }

    pub fn is_filled(&self) -> bool {
        self.layer.is_some()
    }

    /// The layer that matched.
    pub fn layer(&self) -> Option<&Arc<dyn Interactor>> {
        self.layer.as_ref()
    }

    /// The provided value, if this slot is bound to `C` and was filled.
    pub fn get<C: Capability>(&self) -> Option<&C::Value> {
        self.value.as_deref()?.downcast_ref::<C::Value>()
    }

    pub(crate) fn clear(&mut self) {
        self.value = None;
        self.layer = None;
    }

    pub(crate) fn has_value(&self) -> bool {
        self.value.is_some()
    }

    pub(crate) fn fill(&mut self, layer: Arc<dyn Interactor>) {
        self.layer = Some(layer);
    }

    pub(crate) fn take<C: Capability>(self) -> Option<(Arc<dyn Interactor>, C::Value)> {
        let layer = self.layer?;
        let value = self.value?.downcast::<C::Value>().ok()?;
        Some((layer, *value))
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("capability", &self.capability_name)
            .field("filled", &self.is_filled())
            .finish()
    }
}

/// Handed to [`Interactor::provide`] to collect a capability value.
pub struct Request<'s> {
    slot: &'s mut Slot,
}

impl<'s> Request<'s> {
    pub(crate) fn new(slot: &'s mut Slot) -> Self {
        Self { slot }
    }

    /// Whether `C` is the capability being probed for.
    pub fn wants<C: Capability>(&self) -> bool {
        self.slot.capability == TypeId::of::<C>()
    }

    /// Offers a value for `C`; ignored unless `C` is wanted and nothing was offered yet.
    pub fn provide<C: Capability>(&mut self, value: C::Value) -> &mut Self {
        self.provide_with::<C>(|| value)
    }

    /// Like [`Request::provide`], computing the value only when it is wanted.
    pub fn provide_with<C: Capability>(&mut self, value: impl FnOnce() -> C::Value) -> &mut Self {
        if self.wants::<C>() && !self.slot.has_value() {
            self.slot.value = Some(Box::new(value()));
        }
        self
    }
}
