use crate::core::capability::{
    Deprecated, Description, ExpectedErrors, Name, Request, Tags, Title,
};
use crate::error::SharedError;
use std::error::Error as StdError;
use std::sync::Arc;

/// Descriptive information about a use case, consumed by documentation tooling.
#[derive(Debug, Clone, Default)]
pub struct Info {
    name: String,
    title: String,
    description: String,
    tags: Vec<String>,
    expected_errors: Vec<SharedError>,
    is_deprecated: bool,
}

impl Info {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Tags of use cases group.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
    }

    /// Errors that are expected to cause use case failure.
    pub fn expected_errors(&self) -> &[SharedError] {
        &self.expected_errors
    }

    pub fn set_expected_errors(&mut self, errors: Vec<SharedError>) {
        self.expected_errors = errors;
    }

    pub fn add_expected_error(&mut self, error: impl StdError + Send + Sync + 'static) {
        self.expected_errors.push(Arc::new(error));
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    pub fn set_is_deprecated(&mut self, is_deprecated: bool) {
        self.is_deprecated = is_deprecated;
    }

    /// Offers every descriptive capability.
    pub fn provide(&self, request: &mut Request<'_>) {
        request
            .provide_with::<Name>(|| self.name.clone())
            .provide_with::<Title>(|| self.title.clone())
            .provide_with::<Description>(|| self.description.clone())
            .provide_with::<Tags>(|| self.tags.clone())
            .provide_with::<ExpectedErrors>(|| self.expected_errors.clone())
            .provide_with::<Deprecated>(|| self.is_deprecated);
    }
}
