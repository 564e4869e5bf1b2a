// Transcript tests for the interactive shell

use std::io::Cursor;

use tally::engine::Accumulator;
use tally::shell::{Control, Session, SessionEnd, ShellConfig};

fn plain() -> ShellConfig {
    ShellConfig {
        prompt: String::new(),
        color: false,
    }
}

/// Run a whole session over `input`, returning how it ended and both outputs
fn run_session(input: &str, config: ShellConfig) -> (SessionEnd, Accumulator, String, String) {
    let mut session = Session::new(
        Accumulator::new(0.0),
        Cursor::new(input.as_bytes().to_vec()),
        Vec::<u8>::new(),
        Vec::<u8>::new(),
        config,
    );
    let end = session.run().expect("in-memory streams do not fail");
    let (acc, out, err) = session.into_parts();
    (
        end,
        acc,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_prints_value_after_each_command() {
    let (end, acc, out, err) = run_session("add 1\nmultiply 4\nrepeat 2\n", plain());

    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(out, "1.0\n4.0\n20.0\n");
    assert!(err.is_empty());
    assert_eq!(acc.value(), 20.0);
    assert_eq!(acc.history().len(), 4);
}

#[test]
fn test_one_decimal_place() {
    let (_, _, out, _) = run_session("add 2\ndivide 3\nadd 0.04\nsubtract 100\n", plain());
    assert_eq!(out, "2.0\n0.7\n0.7\n-99.3\n");
}

#[test]
fn test_exit_stops_reading() {
    let (end, acc, out, _) = run_session("add 5\nexit\nadd 100\n", plain());

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(out, "5.0\n");
    assert_eq!(acc.value(), 5.0);
}

#[test]
fn test_exit_is_not_recorded() {
    let (end, acc, _, err) = run_session("  exit  \r\n", plain());
    assert_eq!(end, SessionEnd::Exit);
    assert!(acc.history().is_empty());
    assert!(err.is_empty());
}

#[test]
fn test_errors_go_to_error_stream_and_session_continues() {
    let input = "divide 0\nadd\nfoo 3\ndivide one\nadd 2\nrepeat 5\n";
    let (end, acc, out, err) = run_session(input, plain());

    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(out, "2.0\n");
    assert_eq!(
        err,
        "Invalid input: Operation `Divide` does not accept 0 as argument\n\
         Invalid input: Operation `add` requires 1 argument.\n\
         Unknown operation: foo\n\
         Invalid input: Operation `divide` requires numeric argument.\n\
         Invalid input: Operation `repeat` cannot be executed. Current number of operation is 1, got 5\n"
    );
    assert_eq!(acc.value(), 2.0);
}

#[test]
fn test_blank_line_is_an_empty_command() {
    let (end, _, out, err) = run_session("\n   \nadd 1\n", plain());

    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(out, "1.0\n");
    assert_eq!(err, "Invalid input: empty input\nInvalid input: empty input\n");
}

#[test]
fn test_last_line_without_newline() {
    let (end, _, out, _) = run_session("add 3\nsqr", plain());
    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(out, "3.0\n9.0\n");
}

#[test]
fn test_nan_is_printed() {
    let (_, acc, out, err) = run_session("subtract 4\nsqrt\n", plain());
    assert_eq!(out, "-4.0\nNaN\n");
    assert!(err.is_empty());
    assert!(acc.value().is_nan());
}

#[test]
fn test_prompt_is_written_before_each_read() {
    let config = ShellConfig {
        prompt: "$ ".to_string(),
        color: false,
    };
    let (_, _, out, _) = run_session("add 1\nneg\n", config);

    // One prompt per line read, plus the one answered by end of input
    assert_eq!(out, "$ 1.0\n$ -1.0\n$ ");
}

#[test]
fn test_colored_errors() {
    let config = ShellConfig {
        prompt: String::new(),
        color: true,
    };
    let (_, _, out, err) = run_session("divide 0\nadd 1\n", config);

    assert_eq!(out, "1.0\n");
    assert!(err.contains("does not accept 0 as argument"));
    // crossterm honours NO_COLOR even when styling is requested
    if std::env::var_os("NO_COLOR").is_none() {
        assert!(err.contains('\u{1b}'), "expected ANSI escape in {:?}", err);
    }
}

#[test]
fn test_handle_line_directly() {
    let mut session = Session::new(
        Accumulator::new(10.0),
        Cursor::new(Vec::<u8>::new()),
        Vec::<u8>::new(),
        Vec::<u8>::new(),
        ShellConfig::default(),
    );

    assert_eq!(session.handle_line("DIVIDE 4\n").unwrap(), Control::Continue);
    assert_eq!(session.accumulator().value(), 2.5);
    assert_eq!(session.handle_line("exit\n").unwrap(), Control::Exit);
    assert_eq!(session.handle_line("exit now").unwrap(), Control::Exit);

    let (_, out, err) = session.into_parts();
    assert_eq!(String::from_utf8(out).unwrap(), "2.5\n");
    assert!(err.is_empty());
}
