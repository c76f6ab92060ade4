pub mod capability;
pub mod chain;
pub mod context;
pub mod info;
pub mod interactor;
pub mod middleware;
pub mod ports;
pub mod probe;

use std::any::Any;

/// A helper trait that just provides the `as_any` method.
/// Needed to tell chain nodes apart from other layers, and to downcast probed layers.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: 'static> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
