//! A complete example showing how to build, decorate and probe a use case interactor.
//!
//! This example demonstrates:
//! - Creating a typed interactor with descriptive info
//! - Decorating it with logging, error catching and a custom middleware
//! - Discovering capabilities through the chain
//! - Failing with canonical statuses and matching them afterwards

use std::any::Any;
use std::sync::Arc;
use usecase::prelude::*;
use usecase::{Description, InputPort, Name, OutputPort};

#[derive(Debug, Default)]
struct Input {
    value: i64,
}

#[derive(Debug, Default)]
struct Output {
    doubled: i64,
}

// ============================================================================
// Step 1: The Use Case
// ============================================================================

fn doubler() -> Arc<dyn Interactor> {
    IoInteractor::typed(|_ctx, input: &Input, output: &mut Output| {
        if input.value < 0 {
            return Err(ContextError::new("negative values are not supported")
                .with_status(Code::InvalidArgument)
                .with_field("value", input.value)
                .into());
        }
        output.doubled = input
            .value
            .checked_mul(2)
            .ok_or_else(|| status::wrap("doubled value overflows", Code::OutOfRange))?;
        Ok(())
    })
    .with_name("numbers/double")
    .with_title("Doubler")
    .with_description("Multiplies a number by two.")
    .with_tags(["numbers"])
    .into_arc()
}

// ============================================================================
// Step 2: A Custom Middleware
// ============================================================================

/// Refuses to run once the context is done.
struct Guarded {
    next: Arc<dyn Interactor>,
}

impl Interactor for Guarded {
    fn interact(
        &self,
        ctx: &Context,
        input: &dyn Any,
        output: &mut dyn Any,
    ) -> Result<(), BoxError> {
        if let Some(code) = ctx.err() {
            return Err(status::wrap("context is done", code));
        }
        self.next.interact(ctx, input, output)
    }
}

// ============================================================================
// Step 3: Wire Everything Together
// ============================================================================

fn main() {
    println!("=== usecase Doubler Example ===\n");

    let catcher = ErrorCatcher::new(|_ctx, input, err| {
        println!("[ErrorCatcher] {:?} failed: {}", input.downcast_ref::<Input>(), err);
    });
    let guard = MiddlewareFn::new(|next: Arc<dyn Interactor>| {
        // Only interactors with a declared input are guarded.
        probe::<InputPort>(&next)?;
        let guarded: Arc<dyn Interactor> = Arc::new(Guarded { next });
        Some(guarded)
    });

    let u = wrap(doubler(), &[&Logger::new(), &catcher, &guard]);

    println!("--- Capabilities ---");
    if let Some(name) = probe::<Name>(&u) {
        println!("  name: {}", *name);
    }
    if let Some(title) = probe::<Title>(&u) {
        println!("  title: {}", *title);
    }
    if let Some(description) = probe::<Description>(&u) {
        println!("  description: {}", *description);
    }
    println!("  has output port: {}", probe::<OutputPort>(&u).is_some());

    println!("\n--- Example 1: Successful interaction ---");
    let mut output = Output::default();
    match u.interact(&Context::background(), &Input { value: 21 }, &mut output) {
        Ok(()) => println!("  21 doubled is {}", output.doubled),
        Err(err) => println!("  unexpected failure: {}", err),
    }

    println!("\n--- Example 2: Invalid argument ---");
    if let Err(err) = u.interact(&Context::background(), &Input { value: -1 }, &mut output) {
        println!("  status: {}", status::code_of(&*err).name());
        println!("  invalid argument: {}", status::is(&*err, Code::InvalidArgument));
    }

    println!("\n--- Example 3: Canceled context ---");
    let ctx = Context::background();
    ctx.cancel();
    if let Err(err) = u.interact(&ctx, &Input { value: 2 }, &mut output) {
        println!("  {}", err);
        println!("  canceled: {}", status::is(&*err, Code::Canceled));
    }

    println!("\n=== Example completed successfully! ===");
}
