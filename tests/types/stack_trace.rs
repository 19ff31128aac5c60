use error_trail::{new_error, stack, wrap, Chain, FrameFormat, StackTrace};
use std::thread;

#[inline(never)]
fn two_deep() -> StackTrace {
    stack::capture(0)
}

#[test]
fn empty_trace_formats() {
    let trace = StackTrace::default();

    assert!(trace.is_empty());
    assert_eq!(trace.to_string(), "[]");
    assert_eq!(format!("{:+}", trace), "");
    assert_eq!(trace.render(FrameFormat::File), "[]");
    assert_eq!(format!("{:?}", trace), "[]");
}

#[test]
fn capture_starts_at_the_caller() {
    let trace = two_deep();

    assert!(trace.len() >= 2);
    assert_eq!(trace.frames()[0].function(), "two_deep");
    assert_eq!(trace.frames()[1].function(), "capture_starts_at_the_caller");
}

#[test]
fn skip_drops_leading_frames() {
    let full = two_deep();
    let skipped = stack::capture(1);

    assert_ne!(skipped.frames()[0].function(), "skip_drops_leading_frames");
    assert!(full.len() <= stack::MAX_DEPTH);
    assert!(skipped.len() <= stack::MAX_DEPTH);
}

#[test]
fn skipping_past_the_stack_is_empty() {
    assert!(stack::capture(usize::MAX).is_empty());
    assert!(stack::capture(usize::MAX - stack::MAX_DEPTH).is_empty());
    assert!(stack::capture(10_000).is_empty());
}

#[test]
fn single_line_formats_are_bracketed() {
    let trace = two_deep();
    let first_two: Vec<String> = trace.iter().take(2).map(|f| f.render(FrameFormat::File)).collect();
    assert_eq!(first_two, ["stack_trace.rs", "stack_trace.rs"]);

    let files = trace.render(FrameFormat::File);
    assert!(files.starts_with("[stack_trace.rs stack_trace.rs"), "{}", files);
    assert!(files.ends_with(']'));

    let locations = trace.to_string();
    assert!(locations.starts_with("[stack_trace.rs:"), "{}", locations);
}

#[test]
fn full_format_puts_each_frame_after_a_newline() {
    let trace = two_deep();
    let full = format!("{:+}", trace);

    assert!(full.starts_with('\n'));
    assert!(full.matches('\n').count() >= trace.len());
    assert!(full.contains("stack_trace::two_deep\n\t"), "{}", full);
}

#[test]
fn fundamental_stack_points_at_the_constructor_call() {
    let (err, line) = (new_error!("ooh"), line!());

    let top = err.stack_trace().frames()[0];
    assert_eq!(top.function(), "fundamental_stack_points_at_the_constructor_call");
    assert_eq!(top.line(), line);
}

#[test]
fn wrap_stack_points_at_the_wrap_call() {
    let root = new_error!("ooh");
    let (err, line) = (wrap(root, "ahh").unwrap(), line!());

    let top = err.stack_trace().frames()[0];
    assert_eq!(top.function(), "wrap_stack_points_at_the_wrap_call");
    assert_eq!(top.line(), line);
}

#[test]
fn root_keeps_its_own_stack_after_wrapping() {
    let (root, line) = (new_error!("ooh"), line!());
    let err = wrap(root, "ahh").unwrap();

    let root = error_trail::cause(&err).unwrap();
    let top = root.stack_trace().unwrap().frames()[0];
    assert_eq!(top.line(), line);
}

#[test]
fn nested_closures_appear_in_order() {
    let err = (|| new_error!("ooh"))();

    let frames = err.stack_trace().frames();
    assert!(frames[0].function().ends_with("{{closure}}"), "{}", frames[0].function());
    assert_eq!(frames[1].function(), "nested_closures_appear_in_order");
    assert!(err.inner().is_none());
}

#[test]
fn capture_is_independent_per_thread() {
    let handles: Vec<_> = (0..4).map(|_| thread::spawn(two_deep)).collect();

    for handle in handles {
        let trace = handle.join().unwrap();
        assert_eq!(trace.frames()[0].function(), "two_deep");
    }
}
