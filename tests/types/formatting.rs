use error_trail::prelude::*;
use std::io;

fn eof() -> Failure {
    Failure::external(io::Error::new(io::ErrorKind::UnexpectedEof, "EOF"))
}

#[test]
fn short_render_joins_messages_outermost_first() {
    let err = new_error!("not found").wrap("database error").wrap("attention");

    assert_eq!(err.to_string(), "attention: database error: not found");
    assert_eq!(err.render(Presentation::Short).to_string(), err.to_string());
    assert_eq!(err.render(Presentation::Default).to_string(), err.to_string());
}

#[test]
fn quoted_render_wraps_short_render_in_quotes() {
    let err = new_error!("not found").wrap("database error");
    assert_eq!(err.quoted().to_string(), "\"database error: not found\"");

    let err = with_status(new_error!("say \"hi\""), Status::BAD_REQUEST).unwrap();
    assert_eq!(err.quoted().to_string(), r#""say \"hi\"""#);
}

#[test]
fn fundamental_extended_render_lists_its_stack() {
    let err = new_error!("not found");
    let extended = format!("{:+}", err);

    assert!(extended.starts_with("not found\n"), "{}", extended);
    assert!(extended.contains("formatting.rs:"), "{}", extended);
    assert_eq!(err.extended().to_string(), extended);
    assert_eq!(extended, format!("not found{:+}", err.stack_trace()));
}

#[test]
fn message_extended_render_prints_innermost_first() {
    let root = new_error!("not found");
    let root_extended = format!("{:+}", root);
    let err = root.wrap("database error").wrap("attention");

    assert_eq!(format!("{:+}", err), format!("{}\ndatabase error\nattention", root_extended));
}

#[test]
fn wrap_extended_render_appends_its_own_stack() {
    let root = new_error!("x");
    let root_extended = format!("{:+}", root);
    let err = wrap(root, "y").unwrap();

    let expected = format!("{}\ny{:+}", root_extended, err.stack_trace());
    assert_eq!(format!("{:+}", err), expected);
}

#[test]
fn level_and_status_keep_the_stack_of_their_cause() {
    let err = new_error!("message").status(Status::NOT_FOUND);
    assert!(format!("{:+}", err).contains("formatting.rs"));

    let err = new_error!("message").level(Level::Alert);
    assert!(format!("{:+}", err).contains("formatting.rs"));
}

#[test]
fn chain_without_captures_has_identical_renders() {
    let plain = Failure::external(io::Error::new(io::ErrorKind::Other, "message"));
    let err = with_level(with_status(plain, Status::NOT_FOUND), Level::Info).unwrap();

    assert_eq!(format!("{:+}", err), "message");
    assert_eq!(format!("{:+}", err), err.to_string());
}

#[test]
fn message_without_cause_extended_is_its_message() {
    let err = with_message(None::<Failure>, "whoops");

    assert_eq!(format!("{:+}", err), "whoops");
}

#[test]
fn rendering_is_repeatable() {
    let err = wrap(eof(), "read error").unwrap().level(Level::Debug);

    assert_eq!(err.to_string(), err.to_string());
    assert_eq!(format!("{:+}", err), format!("{:+}", err));
    assert_eq!(err.to_string(), "read error: EOF");
}

#[test]
fn node_renders_like_its_owner() {
    let err = wrap(eof(), "read error").unwrap();

    assert_eq!(err.node().to_string(), err.to_string());
    assert_eq!(format!("{:+}", err.node()), format!("{:+}", err));
}
