use crate::core::capability::{InputPort, OutputPort, PortSample, Request};
use std::any::Any;
use std::sync::Arc;

/// Embeddable declaration of an input port.
#[derive(Debug, Clone, Default)]
pub struct WithInput {
    input: Option<PortSample>,
}

impl WithInput {
    pub fn new<T: Any + Send + Sync>(sample: T) -> Self {
        Self::from_sample(Arc::new(sample))
    }

    pub fn from_sample(sample: PortSample) -> Self {
        Self {
            input: Some(sample),
        }
    }

    /// Sample of input value, e.g. `MyInput::default()`.
    pub fn input_port(&self) -> Option<&PortSample> {
        self.input.as_ref()
    }

    /// Offers [`InputPort`] when a sample is declared.
    pub fn provide(&self, request: &mut Request<'_>) {
        if let Some(sample) = &self.input {
            request.provide_with::<InputPort>(|| Arc::clone(sample));
        }
    }
}

/// Embeddable declaration of an output port.
#[derive(Debug, Clone, Default)]
pub struct WithOutput {
    output: Option<PortSample>,
}

impl WithOutput {
    pub fn new<T: Any + Send + Sync>(sample: T) -> Self {
        Self::from_sample(Arc::new(sample))
    }

    pub fn from_sample(sample: PortSample) -> Self {
        Self {
            output: Some(sample),
        }
    }

    /// Sample of output value, e.g. `MyOutput::default()`.
    pub fn output_port(&self) -> Option<&PortSample> {
        self.output.as_ref()
    }

    /// Offers [`OutputPort`] when a sample is declared.
    pub fn provide(&self, request: &mut Request<'_>) {
        if let Some(sample) = &self.output {
            request.provide_with::<OutputPort>(|| Arc::clone(sample));
        }
    }
}
