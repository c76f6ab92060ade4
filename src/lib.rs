//! # usecase
//!
//! Composable use case interactors: a single typed operation, decorated by
//! middleware that never needs to know concrete types, failing through a canonical,
//! transport-agnostic status taxonomy.
//!
//! ## Features
//!
//! - **Decorator Chains**: Wrap an interactor with middleware; the first middleware
//!   listed is the outermost
//! - **Capability Probing**: Ask any chain whether some layer declares a behavior
//!   (input port, title, ...) without unwrapping it
//! - **Canonical Status**: A closed set of status codes, wrapping that composes
//!   messages, and matching that sees through any depth of wrapping
//! - **Contextual Errors**: Status, application code and structured fields in one value
//!
//! ## Quick Start
//!
//! ```rust
//! use usecase::prelude::*;
//!
//! #[derive(Default)]
//! struct Input {
//!     value: i64,
//! }
//!
//! #[derive(Default)]
//! struct Output {
//!     doubled: i64,
//! }
//!
//! let doubler = IoInteractor::typed(|_ctx, input: &Input, output: &mut Output| {
//!     if input.value < 0 {
//!         return Err(status::wrap("negative value", Code::InvalidArgument));
//!     }
//!     output.doubled = input.value * 2;
//!     Ok(())
//! })
//! .with_title("Doubler")
//! .into_arc();
//!
//! let u = wrap(doubler, &[&Logger::new()]);
//!
//! let mut output = Output::default();
//! u.interact(&Context::background(), &Input { value: 21 }, &mut output).unwrap();
//! assert_eq!(output.doubled, 42);
//!
//! let err = u.interact(&Context::background(), &Input { value: -1 }, &mut output).unwrap_err();
//! assert!(status::is(&*err, Code::InvalidArgument));
//! assert_eq!(probe::<Title>(&u).as_deref().map(String::as_str), Some("Doubler"));
//! ```
//!
//! ## Module Organization
//!
//! - [`status`]: Canonical status codes and status-aware errors
//! - [`prelude`]: Commonly used types and traits (import with `use usecase::prelude::*`)

// ============================================================================
// Modules
// ============================================================================

mod core;
mod error;
pub mod status;

// ============================================================================
// Public Re-exports - Granular Imports
// ============================================================================

// Interactors
pub use crate::core::context::{Context, ContextValue};
pub use crate::core::info::Info;
pub use crate::core::interactor::{Interact, Interactor, IoInteractor};
pub use crate::core::AsAny;

// Chains and middleware
pub use crate::core::chain::{wrap, Middleware, MiddlewareFn};
pub use crate::core::middleware::{ErrorCatcher, Logger};

// Capabilities
pub use crate::core::capability::{
    Capability, Deprecated, Description, ExpectedErrors, InputPort, Name, OutputPort,
    PortSample, Request, Slot, Tags, Title,
};
pub use crate::core::ports::{WithInput, WithOutput};
pub use crate::core::probe::{probe, probe_into, Probed};

// Errors
pub use crate::error::{BoxError, ContextError, Fields, PortError, SharedError};

// ============================================================================
// Prelude Module - Convenient Bulk Imports
// ============================================================================

/// The main prelude: imports everything needed to build, decorate and probe
/// interactors.
///
/// # Example
/// ```rust
/// use usecase::prelude::*;
/// ```
pub mod prelude {
    pub use super::{
        probe,
        status::{self, Code},
        wrap,
        BoxError,
        Capability,
        Context,
        ContextError,
        ErrorCatcher,
        Interact,
        Interactor,
        IoInteractor,
        Logger,
        Middleware,
        MiddlewareFn,
        Request,
        Title,
    };
}

// ============================================================================
// Library Metadata
// ============================================================================

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate.
pub const NAME: &str = env!("CARGO_PKG_NAME");
