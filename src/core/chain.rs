use crate::core::context::Context;
use crate::core::interactor::Interactor;
use crate::error::BoxError;
use std::any::Any;
use std::sync::Arc;

/// Creates a decorated interactor.
pub trait Middleware: Send + Sync {
    /// Decorates `next`, or returns `None` to leave the chain as it is.
    fn wrap(&self, next: Arc<dyn Interactor>) -> Option<Arc<dyn Interactor>>;
}

/// Makes a [`Middleware`] from a function.
pub struct MiddlewareFn<F>(F);

impl<F> MiddlewareFn<F>
where
    F: Fn(Arc<dyn Interactor>) -> Option<Arc<dyn Interactor>> + Send + Sync,
{
    pub fn new(wrap: F) -> Self {
        MiddlewareFn(wrap)
    }
}

impl<F> Middleware for MiddlewareFn<F>
where
    F: Fn(Arc<dyn Interactor>) -> Option<Arc<dyn Interactor>> + Send + Sync,
{
    fn wrap(&self, next: Arc<dyn Interactor>) -> Option<Arc<dyn Interactor>> {
        (self.0)(next)
    }
}

/// One link of a decorator chain.
///
/// Invocation goes to `active` only; `wrapped` is kept so probing can reach the
/// layers underneath.
pub(crate) struct ChainNode {
    active: Arc<dyn Interactor>,
    wrapped: Arc<dyn Interactor>,
}

impl ChainNode {
    pub(crate) fn active(&self) -> &Arc<dyn Interactor> {
        &self.active
    }

    pub(crate) fn wrapped(&self) -> &Arc<dyn Interactor> {
        &self.wrapped
    }
}

impl Interactor for ChainNode {
    fn interact(
        &self,
        ctx: &Context,
        input: &dyn Any,
        output: &mut dyn Any,
    ) -> Result<(), BoxError> {
        self.active.interact(ctx, input, output)
    }
}

pub(crate) fn as_node(interactor: &dyn Interactor) -> Option<&ChainNode> {
    interactor.as_any().downcast_ref::<ChainNode>()
}

/// Decorates an interactor with middlewares.
///
/// Having arguments `i, [mw1, mw2]` the order of invocation is: mw1, mw2, i, mw2, mw1.
/// Middleware mw1 can find behaviors of mw2 with [`probe`](crate::probe), but not
/// vice versa.
pub fn wrap(
    mut interactor: Arc<dyn Interactor>,
    middleware: &[&dyn Middleware],
) -> Arc<dyn Interactor> {
    for mw in middleware.iter().rev() {
        match mw.wrap(Arc::clone(&interactor)) {
            Some(active) => {
                interactor = Arc::new(ChainNode {
                    active,
                    wrapped: interactor,
                });
            }
            None => log::trace!("middleware declined to decorate, chain left unchanged"),
        }
    }

    interactor
}
