use statement_pretty_printer::{pretty_string, CancelToken, Doc, Width};

fn compare_lines(message: &str, actual: &[String], expected: &[&str]) {
    if actual != expected {
        eprintln!(
            "{}\nEXPECTED:\n{}\nACTUAL:\n{}\n=========",
            message,
            expected.join("\n"),
            actual.join("\n"),
        );
        assert_eq!(actual, expected);
    }
}

#[track_caller]
pub fn assert_pp(doc: &Doc, width: Width, expected_lines: &[&str]) {
    let lines = pretty_string(&CancelToken::never(), doc, width)
        .expect("pretty printing failed")
        .split('\n')
        .map(|s| s.to_owned())
        .collect::<Vec<_>>();
    compare_lines(
        &format!("IN PRETTY PRINTING WITH WIDTH {}", width),
        &lines,
        expected_lines,
    );
}

#[allow(unused)]
pub fn lit(s: &str) -> Doc {
    Doc::text(s)
}

#[allow(unused)]
pub fn nl() -> Doc {
    Doc::line()
}
