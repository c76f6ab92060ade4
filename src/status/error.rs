use super::Code;
use crate::error::{BoxError, ContextError};
use once_cell::sync::Lazy;
use std::any::{type_name, TypeId};
use std::error::Error as StdError;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Implemented by errors that declare a canonical status.
///
/// Error types outside this crate take part in [`is`] and [`code_of`] once
/// registered with [`register`].
pub trait HasStatus {
    /// Declared status, [`Code::Ok`] when there is none.
    fn status(&self) -> Code;
}

type StatusHook = fn(&(dyn StdError + 'static)) -> Option<Code>;

static HOOKS: Lazy<RwLock<Vec<(TypeId, StatusHook)>>> = Lazy::new(|| RwLock::new(Vec::new()));

fn registered_status<E>(err: &(dyn StdError + 'static)) -> Option<Code>
where
    E: HasStatus + StdError + 'static,
{
    err.downcast_ref::<E>()
        .map(HasStatus::status)
        .filter(|code| !code.is_ok())
}

/// Lets errors of type `E` declare their status to [`is`], [`code_of`] and the
/// status-aware middleware. Registering a type again has no effect.
pub fn register<E>()
where
    E: HasStatus + StdError + 'static,
{
    let mut hooks = HOOKS.write().unwrap_or_else(PoisonError::into_inner);
    let id = TypeId::of::<E>();
    if hooks.iter().any(|(known, _)| *known == id) {
        return;
    }

    log::debug!("status hook registered for {}", type_name::<E>());
    let hook: StatusHook = registered_status::<E>;
    hooks.push((id, hook));
}

/// An error annotated with a canonical status.
///
/// Displays as `"<status message>: <cause>"` and exposes the cause as its source.
#[derive(Debug, Error)]
#[error("{}: {source}", .code.message())]
pub struct StatusError {
    code: Code,
    #[source]
    source: BoxError,
}

impl StatusError {
    pub fn status(&self) -> Code {
        self.code
    }

    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.source
    }

    pub fn into_inner(self) -> BoxError {
        self.source
    }
}

/// Adds canonical status to an error.
pub fn wrap(err: impl Into<BoxError>, code: Code) -> BoxError {
    Box::new(StatusError {
        code,
        source: err.into(),
    })
}

/// Like [`wrap`], but an absent error degenerates to the bare `code`.
pub fn wrap_option(err: Option<BoxError>, code: Code) -> BoxError {
    match err {
        Some(err) => wrap(err, code),
        None => Box::new(code),
    }
}

/// A status code with an auxiliary description.
///
/// Message and matching are those of the bare code; the description is only
/// reachable through [`Described::description`] or [`description_of`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}")]
pub struct Described {
    code: Code,
    description: String,
}

impl Described {
    pub fn status(&self) -> Code {
        self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl HasStatus for Code {
    fn status(&self) -> Code {
        *self
    }
}

impl HasStatus for StatusError {
    fn status(&self) -> Code {
        self.code
    }
}

impl HasStatus for Described {
    fn status(&self) -> Code {
        self.code
    }
}

impl HasStatus for ContextError {
    fn status(&self) -> Code {
        ContextError::status(self)
    }
}

impl PartialEq<Code> for Described {
    fn eq(&self, other: &Code) -> bool {
        self.code == *other
    }
}

impl PartialEq<Described> for Code {
    fn eq(&self, other: &Described) -> bool {
        *self == other.code
    }
}

/// Makes a status error with a description.
pub fn with_description(code: Code, description: impl Into<String>) -> Described {
    Described {
        code,
        description: description.into(),
    }
}

/// Status declared by this link of a chain, not looking at its sources.
fn own_status(err: &(dyn StdError + 'static)) -> Option<Code> {
    if let Some(code) = err.downcast_ref::<Code>() {
        return Some(*code);
    }
    if let Some(err) = err.downcast_ref::<StatusError>() {
        return Some(err.code);
    }
    if let Some(err) = err.downcast_ref::<Described>() {
        return Some(err.code);
    }
    if let Some(err) = err.downcast_ref::<ContextError>() {
        return err.status_code();
    }

    let hooks = HOOKS.read().unwrap_or_else(PoisonError::into_inner);
    hooks.iter().find_map(|(_, hook)| hook(err))
}

fn chain<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |&err| err.source())
}

/// Reports whether any link of the error chain declares `code`.
///
/// The outermost status is checked first, then each source in turn.
pub fn is(err: &(dyn StdError + 'static), code: Code) -> bool {
    chain(err).any(|link| own_status(link) == Some(code))
}

/// First status found in the error chain, [`Code::Unknown`] when there is none.
pub fn code_of(err: &(dyn StdError + 'static)) -> Code {
    chain(err).find_map(own_status).unwrap_or(Code::Unknown)
}

/// First description found in the error chain.
pub fn description_of<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a str> {
    chain(err).find_map(|link| link.downcast_ref::<Described>().map(Described::description))
}
