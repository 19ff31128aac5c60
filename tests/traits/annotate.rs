use error_trail::prelude::*;

#[test]
fn fundamental_fluent_wrap() {
    assert_eq!(
        new_error!("not found").wrap("database error").to_string(),
        "database error: not found"
    );
}

#[test]
fn fundamental_fluent_level() {
    let err = new_error!("database error").level(Level::Debug);

    assert_eq!(find_level(&err), Some(Level::Debug));
}

#[test]
fn wrap_then_level_keeps_messages() {
    let err = new_error!("database error").wrap("system error").wrap("attention").level(Level::Debug);

    assert_eq!(find_level(&err), Some(Level::Debug));
    assert_eq!(err.to_string(), "attention: system error: database error");
}

#[test]
fn fundamental_fluent_status() {
    let err = new_error!("not found").status(Status::BAD_REQUEST);
    let wrapped = err.clone().wrap("database error");

    assert_eq!(wrapped.to_string(), "database error: not found");
    assert_eq!(find_status(&wrapped), Some(Status::BAD_REQUEST));
}

#[test]
fn wrap_result_supports_fluent_level_and_status() {
    let err = wrap(new_error!("database error"), "system error").unwrap().level(Level::Error);
    assert_eq!(find_level(&err), Some(Level::Error));
    assert_eq!(err.to_string(), "system error: database error");

    let err = wrap(new_error!("not found"), "database error").unwrap().status(Status::BAD_REQUEST);
    assert_eq!(err.to_string(), "database error: not found");
    assert_eq!(find_status(&err), Some(Status::BAD_REQUEST));
}

#[test]
fn level_fluent_wrap_preserves_level() {
    let err = with_level(new_error!("not found"), Level::Debug).unwrap();
    let wrapped = err.wrap("database error");

    assert_eq!(wrapped.to_string(), "database error: not found");
    assert_eq!(find_level(&wrapped), Some(Level::Debug));
}

#[test]
fn level_fluent_level_wraps_again() {
    let err = with_level(new_error!("database error"), Level::Debug).unwrap().level(Level::Error);

    assert_eq!(err.severity(), Level::Error);
    assert!(matches!(err.cause(), Failure::Level(inner) if inner.severity() == Level::Debug));
    assert_eq!(err.to_string(), "database error");
}

#[test]
fn level_fluent_status() {
    let err = with_level(new_error!("not found"), Level::Emergency).unwrap().status(Status::BAD_REQUEST);
    let wrapped = err.wrap("database error");

    assert_eq!(wrapped.to_string(), "database error: not found");
    assert_eq!(find_status(&wrapped), Some(Status::BAD_REQUEST));
    assert_eq!(find_level(&wrapped), Some(Level::Emergency));
}

#[test]
fn status_fluent_status_outermost_wins() {
    let err = with_status(new_error!("not found"), Status::INTERNAL_SERVER_ERROR)
        .unwrap()
        .status(Status::BAD_REQUEST);
    let wrapped = err.wrap("database error");

    assert_eq!(wrapped.to_string(), "database error: not found");
    assert_eq!(find_status(&wrapped), Some(Status::BAD_REQUEST));
}

#[test]
fn fluent_methods_work_on_failure() {
    let err: Failure = new_error!("boom").into();
    let err = err.status(503u16).level(Level::Critical).wrap("request failed");

    assert_eq!(err.to_string(), "request failed: boom");
    assert_eq!(find_status(&err), Some(Status::SERVICE_UNAVAILABLE));
    assert_eq!(find_level(&err), Some(Level::Critical));
}

#[test]
fn fluent_wrap_takes_messages_verbatim() {
    let user = "alice";

    let formatted = new_error!("timeout").wrap(format!("fetching {user}"));
    assert_eq!(formatted.to_string(), "fetching alice: timeout");

    let verbatim = new_error!("timeout").wrap("fetching {user}");
    assert_eq!(verbatim.to_string(), "fetching {user}: timeout");

    let via_macro = wrap!(new_error!("timeout").level(Level::Info), "fetching {}", user).unwrap();
    assert_eq!(via_macro.to_string(), "fetching alice: timeout");
    assert_eq!(find_level(&via_macro), Some(Level::Info));
}
