use crate::core::capability::{PortSample, Request};
use crate::core::context::Context;
use crate::core::info::Info;
use crate::core::ports::{WithInput, WithOutput};
use crate::core::AsAny;
use crate::error::{BoxError, PortError, SharedError};
use std::any::{type_name, Any};
use std::sync::Arc;

/// Orchestrates the flow of data to and from the entities of a use case.
///
/// The caller supplies the output holder; on success the interactor populates it,
/// on failure its content is unspecified.
pub trait Interactor: AsAny + Send + Sync + 'static {
    /// Sets output value with regards to input value or fails.
    fn interact(
        &self,
        ctx: &Context,
        input: &dyn Any,
        output: &mut dyn Any,
    ) -> Result<(), BoxError>;

    /// Optional: offers the capabilities this layer has, see [`crate::probe`].
    fn provide(&self, _request: &mut Request<'_>) {}
}

/// Makes an interactor from a function.
#[derive(Clone)]
pub struct Interact<F>(F);

impl<F> Interact<F>
where
    F: Fn(&Context, &dyn Any, &mut dyn Any) -> Result<(), BoxError> + Send + Sync + 'static,
{
    pub fn new(interact: F) -> Self {
        Interact(interact)
    }
}

impl<F> Interactor for Interact<F>
where
    F: Fn(&Context, &dyn Any, &mut dyn Any) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn interact(
        &self,
        ctx: &Context,
        input: &dyn Any,
        output: &mut dyn Any,
    ) -> Result<(), BoxError> {
        (self.0)(ctx, input, output)
    }
}

/// An interactor with declared input and output ports and descriptive info.
pub struct IoInteractor {
    interactor: Box<dyn Interactor>,
    info: Info,
    input: WithInput,
    output: WithOutput,
}

impl IoInteractor {
    /// Creates a use case interactor with input and output samples and an interact
    /// function. Absent samples declare no port.
    pub fn new<F>(input: Option<PortSample>, output: Option<PortSample>, interact: F) -> Self
    where
        F: Fn(&Context, &dyn Any, &mut dyn Any) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Self {
            interactor: Box::new(Interact::new(interact)),
            info: Info::default(),
            input: input.map(WithInput::from_sample).unwrap_or_default(),
            output: output.map(WithOutput::from_sample).unwrap_or_default(),
        }
    }

    /// Creates a use case interactor over concrete input and output types.
    ///
    /// Ports are declared with default samples of `I` and `O`; values of any other
    /// type are refused with [`PortError`].
    pub fn typed<I, O, F>(interact: F) -> Self
    where
        I: Default + Send + Sync + 'static,
        O: Default + Send + Sync + 'static,
        F: Fn(&Context, &I, &mut O) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Self::new(
            Some(Arc::new(I::default())),
            Some(Arc::new(O::default())),
            move |ctx, input, output| {
                let input = input.downcast_ref::<I>().ok_or(PortError::InvalidInput {
                    expected: type_name::<I>(),
                })?;
                let output = output.downcast_mut::<O>().ok_or(PortError::InvalidOutput {
                    expected: type_name::<O>(),
                })?;
                interact(ctx, input, output)
            },
        )
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut Info {
        &mut self.info
    }

    pub fn input_port(&self) -> Option<&PortSample> {
        self.input.input_port()
    }

    pub fn output_port(&self) -> Option<&PortSample> {
        self.output.output_port()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.info.set_name(name);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.info.set_title(title);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.info.set_description(description);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.info.set_tags(tags);
        self
    }

    pub fn with_expected_errors(mut self, errors: Vec<SharedError>) -> Self {
        self.info.set_expected_errors(errors);
        self
    }

    pub fn deprecated(mut self, is_deprecated: bool) -> Self {
        self.info.set_is_deprecated(is_deprecated);
        self
    }

    pub fn into_arc(self) -> Arc<dyn Interactor> {
        Arc::new(self)
    }
}

impl Interactor for IoInteractor {
    fn interact(
        &self,
        ctx: &Context,
        input: &dyn Any,
        output: &mut dyn Any,
    ) -> Result<(), BoxError> {
        self.interactor.interact(ctx, input, output)
    }

    fn provide(&self, request: &mut Request<'_>) {
        self.input.provide(request);
        self.output.provide(request);
        self.info.provide(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::capability::{InputPort, Slot, Title};
    use crate::status::Code;

    #[derive(Debug, Default, PartialEq)]
    struct Order {
        quantity: u32,
    }

    #[derive(Debug, Default, PartialEq)]
    struct Quote {
        total: u32,
    }

    #[test]
    fn interact_passes_values_through() {
        let i = Interact::new(|_ctx, input, output| {
            let input = input.downcast_ref::<String>().ok_or("input is not a string")?;
            let output = output.downcast_mut::<usize>().ok_or("output is not usize")?;
            *output = input.len();
            Err(Code::Aborted.into())
        });

        let mut output = 0usize;
        let err = i
            .interact(&Context::background(), &"four".to_string(), &mut output)
            .unwrap_err();
        assert_eq!(output, 4);
        assert_eq!(err.downcast_ref::<Code>(), Some(&Code::Aborted));
    }

    #[test]
    fn typed_interactor_checks_types() {
        let quote = IoInteractor::typed(|_ctx, input: &Order, output: &mut Quote| {
            output.total = input.quantity * 3;
            Ok(())
        });

        let mut output = Quote::default();
        quote
            .interact(&Context::background(), &Order { quantity: 4 }, &mut output)
            .expect("well-typed call");
        assert_eq!(output, Quote { total: 12 });

        let err = quote
            .interact(&Context::background(), &4u32, &mut output)
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid input type received"));
        assert!(err.to_string().contains("Order"));

        let err = quote
            .interact(&Context::background(), &Order::default(), &mut 0u8)
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid output type received"));
    }

    #[test]
    fn typed_interactor_declares_ports() {
        let quote = IoInteractor::typed(|_ctx, _input: &Order, _output: &mut Quote| Ok(()));
        let input = quote.input_port().expect("input port");
        assert_eq!(input.downcast_ref::<Order>(), Some(&Order::default()));
        assert!(quote.output_port().expect("output port").is::<Quote>());
    }

    #[test]
    fn plain_interactors_provide_nothing() {
        let i = Interact::new(|_ctx, _input, _output| Ok(()));

        let mut slot = Slot::new::<Title>();
        i.provide(&mut Request::new(&mut slot));
        assert!(slot.get::<Title>().is_none());
    }

    #[test]
    fn provides_ports_and_info() {
        let u = IoInteractor::new(None, None, |_ctx, _input, _output| Ok(()))
            .with_title("Doubler")
            .deprecated(true);

        let mut slot = Slot::new::<InputPort>();
        u.provide(&mut Request::new(&mut slot));
        assert!(slot.get::<InputPort>().is_none());

        let mut slot = Slot::new::<Title>();
        u.provide(&mut Request::new(&mut slot));
        assert_eq!(slot.get::<Title>().map(String::as_str), Some("Doubler"));
        assert!(u.info().is_deprecated());
    }
}
