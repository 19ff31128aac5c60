use error_trail::{Level, ParseLevelError};

#[test]
fn levels_order_by_severity() {
    assert!(Level::Emergency > Level::Alert);
    assert!(Level::Error > Level::Warning);
    assert!(Level::Info > Level::Debug);

    let mut sorted = Level::ALL;
    sorted.sort();
    assert_eq!(sorted.first(), Some(&Level::Debug));
    assert_eq!(sorted.last(), Some(&Level::Emergency));
}

#[test]
fn syslog_codes_round_trip() {
    for level in Level::ALL {
        assert_eq!(Level::from_code(level.code()), Some(level));
    }
    assert_eq!(Level::Emergency.code(), 0);
    assert_eq!(Level::Debug.code(), 7);
    assert_eq!(Level::from_code(8), None);
}

#[test]
fn default_level_is_emergency() {
    assert_eq!(Level::DEFAULT, Level::Emergency);
    assert_eq!(Level::default(), Level::Emergency);
}

#[test]
fn parses_names_and_short_forms() {
    assert_eq!("Warning".parse::<Level>(), Ok(Level::Warning));
    assert_eq!("warn".parse::<Level>(), Ok(Level::Warning));
    assert_eq!("EMERG".parse::<Level>(), Ok(Level::Emergency));
    assert_eq!("crit".parse::<Level>(), Ok(Level::Critical));

    let err: ParseLevelError = "loud".parse::<Level>().unwrap_err();
    assert_eq!(err.input(), "loud");
    assert_eq!(err.to_string(), "unknown severity level: \"loud\"");
}

#[test]
fn display_uses_lowercase_names() {
    assert_eq!(Level::Notice.to_string(), "notice");
    assert_eq!(format!("{:>7}", Level::Info), "   info");
}
