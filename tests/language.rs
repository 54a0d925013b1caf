use std::fs::{self};

use rpnsolve::{
    error::{Error, ParseError, RuntimeError},
    evaluate, solve,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, example) in extract_examples(&content).into_iter().enumerate() {
            count += 1;
            match solve(example.expression.as_str(), example.x) {
                Ok(value) => assert_eq!(value,
                                        example.expected,
                                        "Example {} in {:?} produced the wrong value:\n{}",
                                        i + 1,
                                        path,
                                        example.expression),
                Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                                 i + 1,
                                 path,
                                 example.expression,
                                 e),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

struct Example {
    x:          f64,
    expression: String,
    expected:   f64,
}

fn extract_examples(content: &str) -> Vec<Example> {
    let mut examples = Vec::new();
    let mut inside = false;
    let mut buf = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```rpnsolve") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            examples.push(parse_example(&buf));
            continue;
        }
        if inside {
            buf.push(line.to_string());
        }
    }

    examples
}

fn parse_example(lines: &[String]) -> Example {
    let [binding, expression, expected] = lines else {
        panic!("Examples have three lines, found {lines:?}");
    };
    let x = binding.trim()
                   .strip_prefix("x =")
                   .and_then(|v| v.trim().parse().ok())
                   .unwrap_or_else(|| panic!("Bad binding line: {binding}"));
    let expected = expected.trim()
                           .strip_prefix("=>")
                           .and_then(|v| v.trim().parse().ok())
                           .unwrap_or_else(|| panic!("Bad result line: {expected}"));
    Example { x,
              expression: expression.clone(),
              expected }
}

fn assert_solves(src: &str, x: f64, expected: f64) {
    match solve(src, x) {
        Ok(value) => assert_eq!(value, expected, "'{src}' with x = {x}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if solve(src, 1.0).is_ok() {
        panic!("'{src}' succeeded but was expected to fail")
    }
}

#[test]
fn solves_single_variable_expressions() {
    assert_solves("x + 1", 1.0, 2.0);
    assert_solves("2 + x - 1", 5.0, 6.0);
    assert_solves("2 * x - 1", 5.0, 9.0);
    assert_solves("2 * ( x - 1 )", 5.0, 8.0);
    assert_solves("(5 - x) * (x + 5)", 3.0, 16.0);
    assert_solves("((5 - x) * (x + 5)) * x * x", 3.0, 144.0);
}

#[test]
fn same_precedence_is_left_associative() {
    assert_solves("2 - 3 - 1", 0.0, -2.0);
    assert_solves("8 / 4 / 2", 0.0, 1.0);
    assert_solves("10 - 4 + 3", 0.0, 9.0);
    assert_solves("12 / 3 * 2", 0.0, 8.0);
    assert_solves("x - x - x", 4.0, -4.0);
}

#[test]
fn multiplication_binds_tighter() {
    assert_solves("2 + 3 * 4", 0.0, 14.0);
    assert_solves("(2 + 3) * 4", 0.0, 20.0);
    assert_solves("2 * 3 + 4 * 5", 0.0, 26.0);
    assert_solves("20 - 6 / 3", 0.0, 18.0);
}

#[test]
fn zero_and_negative_values_for_x() {
    assert_solves("1", 0.0, 1.0);
    assert_solves("x * 7", 0.0, 0.0);
    assert_solves("x + 1", -3.0, -2.0);
    assert_solves("x / 2", 0.5, 0.25);
}

#[test]
fn whitespace_is_ignored() {
    assert_solves("  1  ", 0.0, 1.0);
    assert_solves("(x+1)*2", 2.0, 6.0);
    assert_solves("\tx\n*\r\n3 ", 2.0, 6.0);
}

#[test]
fn division_is_real_division() {
    assert_solves("7 / 2", 0.0, 3.5);
    assert_solves("1 / x", 4.0, 0.25);
    assert_eq!(solve("1 / x", 0.0).unwrap(), f64::INFINITY);
}

#[test]
fn same_input_gives_same_result() {
    let first = solve("((5 - x) * (x + 5)) * x * x", 3.0);
    for _ in 0..10 {
        assert_eq!(solve("((5 - x) * (x + 5)) * x * x", 3.0), first);
    }
    let first = solve("1x", 3.0);
    for _ in 0..10 {
        assert_eq!(solve("1x", 3.0), first);
    }
}

#[test]
fn missing_arguments_are_rejected() {
    assert!(matches!(solve("1", None::<f64>),
                     Err(Error::Runtime(RuntimeError::InvalidArgument { .. }))));
    assert!(matches!(solve(None::<&str>, 1.0),
                     Err(Error::Runtime(RuntimeError::InvalidArgument { .. }))));
    assert!(matches!(solve("", 1.0),
                     Err(Error::Runtime(RuntimeError::InvalidArgument { .. }))));
}

#[test]
fn malformed_expressions_fail() {
    assert_failure("-1");
    assert_failure("()");
    assert_failure("1x");
    assert_failure("( +");
    assert_failure("(1 + 2");
    assert_failure("1 + 2)");
    assert_failure("1 +");
    assert_failure("1 2");
    assert_failure("x y");
    assert_failure("2 ^ 3");
    assert_failure("X + 1");
}

#[test]
fn other_variables_stay_unresolved() {
    assert_eq!(solve("y + 1", 2.0),
               Err(Error::Runtime(RuntimeError::UnresolvedVariable { name: 'y' })));
}

#[test]
fn evaluate_binds_several_variables() {
    let bindings = [('a', 3.0), ('b', 5.0)];
    assert_eq!(evaluate("(1 * a) + b", &bindings).unwrap(), 8.0);
    assert_eq!(evaluate("a - b - a", &bindings).unwrap(), -5.0);
    assert_eq!(evaluate("a", &[('a', 1.0), ('a', 2.0)]).unwrap(), 1.0);
    assert_eq!(evaluate("", &bindings), Err(Error::Parse(ParseError::EmptyExpression)));
}
