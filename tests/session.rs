use std::{
    io::{self, Cursor},
    sync::{Arc, Mutex},
};

use shunt::{Session, SessionOptions, Value};

fn run(session: &mut Session, input: &str, prompt: Option<&str>) -> (usize, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let failures = session.run(Cursor::new(input), &mut out, &mut err, prompt)
                          .unwrap();

    (failures,
     String::from_utf8(out).unwrap(),
     String::from_utf8(err).unwrap())
}

#[test]
fn prints_one_value_per_line() {
    let (failures, out, err) = run(&mut Session::new(), "1 + 2.0\n3 / 2\ntrue && false\n", None);

    assert_eq!(failures, 0);
    assert_eq!(out, "3.0\n1\nfalse\n");
    assert!(err.is_empty());
}

#[test]
fn errors_do_not_stop_the_loop() {
    let mut session = Session::new();
    let (failures, out, err) = run(&mut session, "x = 5\ny = x / 0\nx\n", None);

    assert_eq!(failures, 1);
    assert_eq!(out, "5\n5\n");
    assert_eq!(err, "error: evaluation error: arithmetic error: division by zero in 5 / 0\n");
    assert_eq!(session.environment().get("y"), None);
}

#[test]
fn strips_crlf_and_skips_blank_lines() {
    let (failures, out, _) = run(&mut Session::new(), "x = 2\r\n\r\n   \nx ** 3\r\n", None);

    assert_eq!(failures, 0);
    assert_eq!(out, "2\n8\n");
}

#[test]
fn last_line_without_terminator() {
    let (_, out, _) = run(&mut Session::new(), "7", None);

    assert_eq!(out, "7\n");
}

#[test]
fn environment_survives_between_runs() {
    let mut session = Session::new();

    run(&mut session, "a = 4\n", None);
    let (_, out, _) = run(&mut session, "a * a\n", None);

    assert_eq!(out, "16\n");
    assert_eq!(session.environment().len(), 1);
}

#[test]
fn prompt_is_written_before_each_read() {
    let (_, out, _) = run(&mut Session::new(), "1\n2\n", Some("> "));

    assert_eq!(out, "> 1\n> 2\n> \n");
}

#[test]
fn echoes_tokens_and_postfix() {
    let options = SessionOptions { show_tokens:  true,
                                   show_postfix: true, };
    let (_, out, _) = run(&mut Session::with_options(options), "2 + 3 * 4\n", None);

    assert_eq!(out, "tokens: 2 + 3 * 4\npostfix: 2 3 4 * +\n14\n");
}

#[test]
fn echo_stops_at_the_failing_stage() {
    let options = SessionOptions { show_tokens:  true,
                                   show_postfix: true, };
    let (failures, out, err) = run(&mut Session::with_options(options), "(1 + 2\n", None);

    assert_eq!(failures, 1);
    assert_eq!(out, "tokens: ( 1 + 2\n");
    assert!(err.starts_with("error: evaluation error: malformed expression"));
}

#[test]
fn unary_operators_are_echoed_in_parentheses() {
    let options = SessionOptions { show_postfix: true,
                                   ..SessionOptions::default() };
    let (_, out, _) = run(&mut Session::with_options(options), "-x + 1\n", None);

    assert!(out.starts_with("postfix: x (-) 1 +"), "{out}");
}

#[test]
fn eval_line_is_independent_of_options() {
    let options = SessionOptions { show_tokens: true,
                                   ..SessionOptions::default() };
    let mut session = Session::with_options(options);

    assert_eq!(session.eval_line("x = 3").unwrap(), Value::Integer(3));
    assert_eq!(session.options(), options);
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn logs_of(options: SessionOptions, input: &str) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG)
                                              .with_ansi(false)
                                              .with_writer(move || writer.clone())
                                              .finish();

    tracing::subscriber::with_default(subscriber, || {
        run(&mut Session::with_options(options), input, None);
    });

    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn echo_mode_keeps_debug_logging() {
    let plain = logs_of(SessionOptions::default(), "2 + 3\n");
    let echoed = logs_of(SessionOptions { show_tokens:  true,
                                          show_postfix: true, },
                         "2 + 3\n");

    for logs in [&plain, &echoed] {
        assert!(logs.contains("eval_line"), "{logs}");
        assert!(logs.contains("lexed"), "{logs}");
        assert!(logs.contains("reordered"), "{logs}");
    }
}
