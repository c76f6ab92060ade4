//! Integration tests for canonical status errors as seen through interactors.

use std::sync::Arc;
use std::time::Duration;
use usecase::prelude::*;
use usecase::{probe, ExpectedErrors, Fields, PortError, SharedError};

#[derive(Default)]
struct Lookup {
    id: u32,
}

#[derive(Default)]
struct Widget {
    name: String,
}

fn find_widget() -> Arc<dyn Interactor> {
    let not_found: SharedError = Arc::new(status::with_description(
        Code::NotFound,
        "widget does not exist",
    ));

    IoInteractor::typed(|ctx, input: &Lookup, output: &mut Widget| {
        if let Some(code) = ctx.err() {
            return Err(code.into());
        }
        match input.id {
            0 => Err(status::wrap("id must be positive", Code::InvalidArgument)),
            1 => {
                output.name = "sprocket".to_string();
                Ok(())
            }
            id => Err(ContextError::from_status(Code::NotFound)
                .with_app_code(404)
                .with_field("id", id)
                .into()),
        }
    })
    .with_name("widgets/find")
    .with_expected_errors(vec![not_found])
    .into_arc()
}

#[test]
fn every_code_displays_its_message() {
    for code in Code::ALL {
        let err: BoxError = code.into();
        assert_eq!(err.to_string(), code.message());
        assert!(status::is(&*err, code));
        assert_eq!(Code::from_i32(code.as_i32()), code);
    }
}

#[test]
fn wrapping_nothing_is_the_code_itself() {
    for code in Code::ALL {
        let err = status::wrap_option(None, code);
        assert_eq!(err.downcast_ref::<Code>(), Some(&code));
    }
}

#[test]
fn wrapped_failures_keep_their_status_through_a_chain() {
    let u = wrap(find_widget(), &[&Logger::new()]);
    let mut widget = Widget::default();

    u.interact(&Context::background(), &Lookup { id: 1 }, &mut widget)
        .expect("widget 1 exists");
    assert_eq!(widget.name, "sprocket");

    let err = u
        .interact(&Context::background(), &Lookup { id: 0 }, &mut widget)
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: id must be positive");
    assert!(status::is(&*err, Code::InvalidArgument));
    assert!(!status::is(&*err, Code::NotFound));
}

#[test]
fn contextual_errors_carry_fields_and_status() {
    let u = find_widget();
    let err = u
        .interact(&Context::background(), &Lookup { id: 7 }, &mut Widget::default())
        .unwrap_err();

    assert_eq!(err.to_string(), "not found");
    assert!(status::is(&*err, Code::NotFound));

    let err = err.downcast::<ContextError>().expect("contextual error");
    assert_eq!(err.app_code(), 404);
    assert_eq!(err.fields().get("id"), Some(&serde_json::json!(7)));

    let mut fields = Fields::new();
    fields.insert("id".to_string(), serde_json::json!(7));
    assert_eq!(err.fields(), &fields);
}

#[test]
fn rewrapping_composes_messages_and_keeps_every_status() {
    let err = status::wrap(
        status::wrap(
            ContextError::new("connection reset").with_status(Code::Unavailable),
            Code::Aborted,
        ),
        Code::Internal,
    );

    assert_eq!(
        err.to_string(),
        "internal: aborted: unavailable: connection reset"
    );
    for code in [Code::Internal, Code::Aborted, Code::Unavailable] {
        assert!(status::is(&*err, code));
    }
    assert!(!status::is(&*err, Code::DataLoss));
    assert_eq!(status::code_of(&*err), Code::Internal);
}

#[test]
fn expected_errors_are_probed_with_their_descriptions() {
    let u = wrap(find_widget(), &[&Logger::new()]);
    let expected = probe::<ExpectedErrors>(&u).expect("expected errors declared");

    assert_eq!(expected.len(), 1);
    let declared = &*expected[0];
    assert_eq!(declared.to_string(), "not found");
    assert!(status::is(declared, Code::NotFound));
    assert_eq!(status::description_of(declared), Some("widget does not exist"));
}

#[test]
fn canceled_context_short_circuits() {
    let u = find_widget();
    let ctx = Context::background();
    ctx.cancel();

    let err = u
        .interact(&ctx, &Lookup { id: 1 }, &mut Widget::default())
        .unwrap_err();
    assert!(status::is(&*err, Code::Canceled));

    let expired = Context::background().with_timeout(Duration::ZERO);
    let err = u
        .interact(&expired, &Lookup { id: 1 }, &mut Widget::default())
        .unwrap_err();
    assert!(status::is(&*err, Code::DeadlineExceeded));
}

#[test]
fn mismatched_ports_fail_with_port_errors() {
    let u = find_widget();
    let err = u
        .interact(&Context::background(), &"not a lookup", &mut Widget::default())
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PortError>(),
        Some(PortError::InvalidInput { .. })
    ));
    assert_eq!(status::code_of(&*err), Code::Unknown);
}
