use crate::core::capability::Name;
use crate::core::chain::Middleware;
use crate::core::context::Context;
use crate::core::interactor::Interactor;
use crate::core::probe::{probe, Probed};
use crate::error::BoxError;
use crate::status;
use std::any::Any;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// A middleware that observes every failure of the decorated interactor.
///
/// The error is forwarded unchanged.
pub struct ErrorCatcher<F> {
    catch: Arc<F>,
}

impl<F> ErrorCatcher<F>
where
    F: Fn(&Context, &dyn Any, &BoxError) + Send + Sync + 'static,
{
    pub fn new(catch: F) -> Self {
        Self {
            catch: Arc::new(catch),
        }
    }
}

impl<F> Middleware for ErrorCatcher<F>
where
    F: Fn(&Context, &dyn Any, &BoxError) + Send + Sync + 'static,
{
    fn wrap(&self, next: Arc<dyn Interactor>) -> Option<Arc<dyn Interactor>> {
        Some(Arc::new(Caught {
            next,
            catch: Arc::clone(&self.catch),
        }))
    }
}

struct Caught<F> {
    next: Arc<dyn Interactor>,
    catch: Arc<F>,
}

impl<F> Interactor for Caught<F>
where
    F: Fn(&Context, &dyn Any, &BoxError) + Send + Sync + 'static,
{
    fn interact(
        &self,
        ctx: &Context,
        input: &dyn Any,
        output: &mut dyn Any,
    ) -> Result<(), BoxError> {
        let result = self.next.interact(ctx, input, output);
        if let Err(err) = &result {
            (self.catch)(ctx, input, err);
        }
        result
    }
}

/// A middleware that logs every interaction through the `log` facade.
///
/// The interactor is named after the first [`Name`] found on the decorated chain.
/// Start is logged at `trace`, success at the configured level (`debug` by
/// default), failure at `warn` along with its canonical status.
#[derive(Debug, Clone)]
pub struct Logger {
    level: log::Level,
    target: &'static str,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            level: log::Level::Debug,
            target: "usecase",
        }
    }
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level of success records.
    pub fn with_level(mut self, level: log::Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }
}

impl Middleware for Logger {
    fn wrap(&self, next: Arc<dyn Interactor>) -> Option<Arc<dyn Interactor>> {
        let name = probe::<Name>(&next)
            .map(Probed::into_value)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "interactor".to_string());

        Some(Arc::new(Logged {
            next,
            name,
            level: self.level,
            target: self.target,
        }))
    }
}

struct Logged {
    next: Arc<dyn Interactor>,
    name: String,
    level: log::Level,
    target: &'static str,
}

impl Interactor for Logged {
    fn interact(
        &self,
        ctx: &Context,
        input: &dyn Any,
        output: &mut dyn Any,
    ) -> Result<(), BoxError> {
        let invocation = Uuid::new_v4();
        let started = Instant::now();
        log::trace!(target: self.target, "{} [{}] started", self.name, invocation);

        let result = self.next.interact(ctx, input, output);
        match &result {
            Ok(()) => log::log!(
                target: self.target,
                self.level,
                "{} [{}] finished in {:?}",
                self.name,
                invocation,
                started.elapsed()
            ),
            Err(err) => log::warn!(
                target: self.target,
                "{} [{}] failed with {} after {:?}: {}",
                self.name,
                invocation,
                status::code_of(&**err).name(),
                started.elapsed(),
                err
            ),
        }

        result
    }
}
