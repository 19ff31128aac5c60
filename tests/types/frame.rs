use error_trail::{stack, Frame, FrameFormat};

#[inline(never)]
fn here() -> Frame {
    stack::capture(0).frames()[0]
}

struct Probe;

impl Probe {
    #[inline(never)]
    fn method(&self) -> Frame {
        stack::capture(0).frames()[0]
    }
}

#[test]
fn captured_frame_resolves_file_line_and_function() {
    let frame = here();

    assert_eq!(frame.render(FrameFormat::File), "frame.rs");
    assert_eq!(frame.render(FrameFormat::Function), "here");
    assert_eq!(frame.function(), "here");
    assert!(frame.line() > 0);
    assert_eq!(frame.render(FrameFormat::Line), frame.line().to_string());
    assert_eq!(frame.render(FrameFormat::Location), format!("frame.rs:{}", frame.line()));
    assert_eq!(frame.to_string(), format!("frame.rs:{}", frame.line()));
}

#[test]
fn full_format_spans_two_lines() {
    let frame = here();

    let full = frame.render(FrameFormat::Full);
    let (function, location) = full.split_once("\n\t").unwrap();
    assert!(function.ends_with("frame::here"), "{}", function);
    assert!(location.ends_with(&format!("frame.rs:{}", frame.line())), "{}", location);
    assert_eq!(format!("{:+}", frame), full);

    let path = frame.render(FrameFormat::Path);
    assert!(path.ends_with("frame.rs"), "{}", path);
    assert!(path.contains("frame::here\n\t"), "{}", path);
}

#[test]
fn method_frames_keep_the_type_name() {
    let frame = Probe.method();

    assert_eq!(frame.render(FrameFormat::Function), "Probe::method");
}

#[test]
fn closure_frames_keep_the_enclosing_function() {
    let capture = || stack::capture(0).frames()[0];
    let frame = capture();

    let function = frame.function();
    assert!(function.starts_with("closure_frames_keep_the_enclosing_function"), "{}", function);
    assert!(function.ends_with("{{closure}}"), "{}", function);
}

#[test]
fn unknown_frame_renders_placeholders() {
    let frame = Frame::from_ip(0);

    assert_eq!(frame.render(FrameFormat::File), "unknown");
    assert_eq!(frame.render(FrameFormat::Path), "unknown");
    assert_eq!(frame.render(FrameFormat::Line), "0");
    assert_eq!(frame.render(FrameFormat::Function), "");
    assert_eq!(frame.render(FrameFormat::Location), "unknown:0");
    assert_eq!(frame.to_string(), "unknown:0");
    assert_eq!(format!("{:+}", frame), "unknown:0");
    assert_eq!(frame.info(), Default::default());
    assert_eq!(frame.ip(), 0);
}

#[test]
fn frame_debug_matches_location() {
    let frame = here();

    assert_eq!(format!("{:?}", frame), frame.render(FrameFormat::Location));
}
