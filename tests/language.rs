use std::fs;

use monkey::{Context, Value, error::RuntimeError, interpreter::value::core::ValueType};
use pretty_assertions::assert_eq;
use rstest::rstest;
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

        for (i, code) in extract_monkey_blocks(&content).into_iter().enumerate() {
            count += 1;
            match monkey::run(&code, &Context::new()) {
                Ok(Some(value)) if value.is_error() => {
                    panic!("Example {} in {:?} failed:\n{}\n{}", i + 1, path, code, value)
                },
                Ok(_) => {},
                Err(e) => {
                    panic!("Example {} in {:?} does not parse:\n{}\nErrors:\n{}",
                           i + 1,
                           path,
                           code,
                           e)
                },
            }
        }
    }

    assert!(count > 0, "No monkey examples found in book/src");
}

fn extract_monkey_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```monkey") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Runs `source` in a fresh context and returns the inspected result, or an
/// empty string when the program yields no value.
fn eval(source: &str) -> String {
    match monkey::run(source, &Context::new()) {
        Ok(Some(value)) => value.inspect(),
        Ok(None) => String::new(),
        Err(e) => panic!("Script {source:?} does not parse:\n{e}"),
    }
}

#[rstest]
#[case("5", "5")]
#[case("-10", "-10")]
#[case("5 + 5 + 5 + 5 - 10", "10")]
#[case("2 * 2 * 2 * 2 * 2", "32")]
#[case("-50 + 100 + -50", "0")]
#[case("5 + 2 * 10", "25")]
#[case("50 / 2 * 2 + 10", "60")]
#[case("20 + 2 * -10", "0")]
#[case("3 * (3 * 3) + 10", "37")]
#[case("(5 + 10 * 2 + 15 / 3) * 2 + -10", "50")]
#[case("-7 / 2", "-3")]
#[case("7 / -2", "-3")]
#[case("9223372036854775807 + 1", "-9223372036854775808")]
fn integer_arithmetic(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(eval(source), expected);
}

#[rstest]
#[case("true", "true")]
#[case("1 < 2", "true")]
#[case("1 > 2", "false")]
#[case("1 == 1", "true")]
#[case("1 != 1", "false")]
#[case("true == true", "true")]
#[case("true != false", "true")]
#[case("(1 < 2) == true", "true")]
#[case("(1 > 2) == true", "false")]
#[case("1 == true", "false")]
#[case("1 != true", "true")]
#[case("[1] == [1]", "false")]
#[case("let a = [1]; a == a", "true")]
#[case("let f = fn() { 1 }; f == f", "true")]
#[case("len == len", "true")]
fn equality(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(eval(source), expected);
}

#[rstest]
#[case("!true", "false")]
#[case("!false", "true")]
#[case("!5", "false")]
#[case("!0", "false")]
#[case("!!true", "true")]
#[case("!!5", "true")]
#[case("!\"\"", "false")]
fn bang_operator(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(eval(source), expected);
}

#[rstest]
#[case("if (true) { 10 }", "10")]
#[case("if (false) { 10 }", "null")]
#[case("if (0) { 10 }", "10")]
#[case("if (1 < 2) { 10 }", "10")]
#[case("if (1 > 2) { 10 }", "null")]
#[case("if (1 > 2) { 10 } else { 20 }", "20")]
#[case("if (1 < 2) { 10 } else { 20 }", "10")]
#[case("if (true) { }", "null")]
#[case("if (first([])) { 1 } else { 2 }", "2")]
fn conditionals(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(eval(source), expected);
}

#[rstest]
#[case("return 10;", "10")]
#[case("return 10; 9;", "10")]
#[case("return 2 * 5; 9;", "10")]
#[case("9; return 2 * 5; 9;", "10")]
#[case("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10")]
#[case("let f = fn(x) { return x; x + 10; }; f(10);", "10")]
#[case("let f = fn(x) { let result = x + 10; return result; return 10; }; f(10);", "20")]
#[case("let f = fn() { let x = if (true) { return 7; }; 99 }; f()", "7")]
#[case("let f = fn() { return 1; }; f() + f()", "2")]
fn return_statements(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(eval(source), expected);
}

#[rstest]
#[case("5 + true;", "type mismatch: INTEGER + BOOLEAN")]
#[case("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN")]
#[case("1 < true", "type mismatch: INTEGER < BOOLEAN")]
#[case("-true", "unknown operator: -BOOLEAN")]
#[case("-\"a\"", "unknown operator: -STRING")]
#[case("true + false;", "unknown operator: BOOLEAN + BOOLEAN")]
#[case("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN")]
#[case("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN")]
#[case("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
       "unknown operator: BOOLEAN + BOOLEAN")]
#[case("\"Hello\" - \"World\"", "unknown operator: STRING - STRING")]
#[case("\"ab\" < \"b\"", "unknown operator: STRING < STRING")]
#[case("\"a\" == \"a\"", "unknown operator: STRING == STRING")]
#[case("\"a\" != \"b\"", "unknown operator: STRING != STRING")]
#[case("[1] + [2]", "unknown operator: ARRAY + ARRAY")]
#[case("foobar", "identifier not found: foobar")]
#[case("1 / 0", "division by zero")]
#[case("5()", "not a function: INTEGER")]
#[case("5(undefined)", "not a function: INTEGER")]
#[case("let f = fn(a, b) { a }; f(1, missing)", "identifier not found: missing")]
#[case("1[0]", "index operator not supported: INTEGER")]
#[case("[1][\"a\"]", "index operator not supported: ARRAY")]
#[case("{\"name\": \"Monkey\"}[fn(x) { x }];", "unusable as hash key: FUNCTION")]
#[case("{[1]: 2}", "unusable as hash key: ARRAY")]
#[case("let f = fn() { let inner = 1; inner }; f(); inner", "identifier not found: inner")]
#[case("[1, 2, unknown, 3]", "identifier not found: unknown")]
#[case("let x = -true; 5", "unknown operator: -BOOLEAN")]
fn runtime_errors(#[case] source: &str, #[case] message: &str) {
    assert_eq!(eval(source), format!("ERROR: {message}"));
}

#[test]
fn runtime_errors_are_values_not_failures() {
    let result = monkey::run("foobar", &Context::new()).unwrap();

    assert_eq!(result,
               Some(Value::Error(RuntimeError::IdentifierNotFound { name: "foobar".into() })));
}

#[test]
fn parse_errors_are_reported_before_evaluation() {
    let context = Context::new();
    let errors = monkey::run("let x = 1; let = 2;", &context).unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(eval_in(&context, "x"), "ERROR: identifier not found: x");
}

#[rstest]
#[case("let a = 5; a;", "5")]
#[case("let a = 5 * 5; a;", "25")]
#[case("let a = 5; let b = a; b;", "5")]
#[case("let a = 5; let b = a; let c = a + b + 5; c;", "15")]
#[case("let a = 1;", "")]
#[case("", "")]
#[case("let x = 1; let x = x + 1; x", "2")]
#[case("if (true) { let y = 5; }; y", "5")]
fn let_statements(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(eval(source), expected);
}

#[test]
fn function_values_print_their_source() {
    assert_eq!(eval("fn(x) { x + 2; };"), "fn(x) {\n\t(x + 2);\n}");
    assert_eq!(eval("fn() { }"), "fn() {\n}");
}

#[rstest]
#[case("let identity = fn(x) { x; }; identity(5);", "5")]
#[case("let identity = fn(x) { return x; }; identity(5);", "5")]
#[case("let double = fn(x) { x * 2; }; double(5);", "10")]
#[case("let add = fn(x, y) { x + y; }; add(5, 5);", "10")]
#[case("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", "20")]
#[case("fn(x) { x; }(5)", "5")]
#[case("let f = fn() { }; f()", "null")]
#[case("let f = fn(a, b) { b }; f(1)", "null")]
#[case("let f = fn(a) { a }; f(1, 2)", "1")]
#[case("let x = 1; let f = fn(x) { x }; f(2) + x", "3")]
#[case("let apply = fn(f, x) { f(x) }; apply(fn(n) { n * n }, 7)", "49")]
fn function_application(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(eval(source), expected);
}

#[test]
fn closures_outlive_their_call_frame() {
    let source = "let newAdder = fn(x) { fn(y) { x + y } };
                  let addTwo = newAdder(2);
                  addTwo(2);";

    assert_eq!(eval(source), "4");
}

#[test]
fn closures_see_later_bindings_of_their_scope() {
    let source = "let f = fn() { later };
                  let later = 10;
                  f()";

    assert_eq!(eval(source), "10");
}

#[test]
fn recursion() {
    let source = "let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
                  fib(15)";

    assert_eq!(eval(source), "610");
}

#[test]
fn higher_order_functions() {
    let source = "
        let map = fn(arr, f) {
            let iter = fn(arr, accumulated) {
                if (len(arr) == 0) {
                    accumulated
                } else {
                    iter(rest(arr), push(accumulated, f(first(arr))));
                }
            };
            iter(arr, []);
        };
        let reduce = fn(arr, initial, f) {
            let iter = fn(arr, result) {
                if (len(arr) == 0) { result } else { iter(rest(arr), f(result, first(arr))) }
            };
            iter(arr, initial);
        };
        let doubled = map([1, 2, 3, 4], fn(x) { x * 2 });
        [doubled, reduce(doubled, 0, fn(acc, x) { acc + x })]
    ";

    assert_eq!(eval(source), "[[2, 4, 6, 8], 20]");
}

#[rstest]
#[case("\"Hello World!\"", "Hello World!")]
#[case("\"Hello\" + \" \" + \"World!\"", "Hello World!")]
#[case("\"\"", "")]
fn strings(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(eval(source), expected);
}

#[rstest]
#[case("len(\"\")", "0")]
#[case("len(\"four\")", "4")]
#[case("len(\"hello world\")", "11")]
#[case("len(\"héllo\")", "5")]
#[case("len([1, 2, 3])", "3")]
#[case("len([])", "0")]
#[case("len(1)", "ERROR: argument to `len` not supported, got INTEGER")]
#[case("len(\"one\", \"two\")", "ERROR: wrong number of arguments. got=2, want=1")]
#[case("len()", "ERROR: wrong number of arguments. got=0, want=1")]
#[case("first([1, 2, 3])", "1")]
#[case("first([])", "null")]
#[case("first(1)", "ERROR: argument to `first` must be ARRAY, got INTEGER")]
#[case("last([1, 2, 3])", "3")]
#[case("last([])", "null")]
#[case("last(\"abc\")", "ERROR: argument to `last` must be ARRAY, got STRING")]
#[case("rest([1, 2, 3])", "[2, 3]")]
#[case("rest([1])", "[]")]
#[case("rest([])", "null")]
#[case("rest(true)", "ERROR: argument to `rest` must be ARRAY, got BOOLEAN")]
#[case("push([], 1)", "[1]")]
#[case("push([1, 2], [3])", "[1, 2, [3]]")]
#[case("push(1, 1)", "ERROR: argument to `push` must be ARRAY, got INTEGER")]
#[case("push([1])", "ERROR: wrong number of arguments. got=1, want=2")]
#[case("puts(\"hello\", 1, [2])", "null")]
#[case("puts()", "null")]
#[case("len", "builtin function")]
#[case("let len = fn(x) { 42 }; len(\"abc\")", "42")]
fn builtins(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(eval(source), expected);
}

#[test]
fn reprinted_programs_keep_multiline_strings() {
    let source = "let f = fn() { if (true) { \"a\nb\" } }; f()";
    let once = monkey::parse(source).map(|p| p.to_string())
                                    .unwrap_or_else(|e| panic!("parser errors:\n{e}"));
    let twice = monkey::parse(&once).map(|p| p.to_string())
                                    .unwrap_or_else(|e| panic!("parser errors:\n{e}"));

    assert_eq!(eval(&twice), "a\nb");
}

#[test]
fn builtins_called_directly_check_their_argument_count() {
    use monkey::interpreter::evaluator::function::builtin::{first, last, len, push, rest};

    let count = |got, want| -> Result<Value, RuntimeError> {
        Err(RuntimeError::ArgumentCountMismatch { got, want })
    };

    assert_eq!(len(&[]), count(0, 1));
    assert_eq!(first(&[]), count(0, 1));
    assert_eq!(last(&[Value::Integer(1), Value::Integer(2)]), count(2, 1));
    assert_eq!(rest(&[]), count(0, 1));
    assert_eq!(push(&[Value::from(Vec::<Value>::new())]), count(1, 2));
}

#[test]
fn push_does_not_mutate_its_argument() {
    assert_eq!(eval("let a = []; let b = push(a, 1); [len(a), len(b)]"), "[0, 1]");
}

#[rstest]
#[case("[1, 2 * 2, 3 + 3]", "[1, 4, 6]")]
#[case("[]", "[]")]
#[case("[\"a\", true, [1]]", "[a, true, [1]]")]
#[case("[1, 2, 3][0]", "1")]
#[case("[1, 2, 3][1]", "2")]
#[case("[1, 2, 3][2]", "3")]
#[case("let i = 0; [1][i];", "1")]
#[case("[1, 2, 3][1 + 1];", "3")]
#[case("let myArray = [1, 2, 3]; myArray[2];", "3")]
#[case("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", "6")]
#[case("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", "2")]
#[case("[1, 2, 3][3]", "null")]
#[case("[1, 2, 3][-1]", "null")]
#[case("[[1, 2], [3, 4]][1][0]", "3")]
fn arrays(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(eval(source), expected);
}

#[test]
fn hash_literals() {
    let source = r#"let two = "two";
        {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }"#;

    assert_eq!(eval(source), "{one: 1, two: 2, three: 3, 4: 4, true: 5, false: 6}");
}

#[rstest]
#[case("{\"foo\": 5}[\"foo\"]", "5")]
#[case("{\"foo\": 5}[\"bar\"]", "null")]
#[case("let key = \"foo\"; {\"foo\": 5}[key]", "5")]
#[case("{}[\"foo\"]", "null")]
#[case("{5: 5}[5]", "5")]
#[case("{true: 5}[true]", "5")]
#[case("{false: 5}[false]", "5")]
#[case("{1: \"int\", true: \"bool\"}[1]", "int")]
#[case("{1: \"int\", true: \"bool\"}[true]", "bool")]
#[case("{\"a\": 1, \"a\": 2}", "{a: 2}")]
#[case("{\"a\": 1, \"b\": 2, \"a\": 3}", "{a: 3, b: 2}")]
#[case("{\"f\": fn(x) { x * 10 }}[\"f\"](4)", "40")]
fn hash_indexing(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(eval(source), expected);
}

#[test]
fn hash_keys_follow_content() {
    let hello1 = Value::from("Hello World").hash_key();
    let hello2 = Value::from("Hello World").hash_key();
    let diff = Value::from("My name is johnny").hash_key();

    assert_eq!(hello1, hello2);
    assert_ne!(hello1, diff);
    assert_ne!(Value::Integer(1).hash_key(), Value::Boolean(true).hash_key());
    assert_eq!(Value::from(Vec::<Value>::new()).hash_key(), None);
}

#[test]
fn value_types_name_themselves_in_uppercase() {
    assert_eq!(Value::Integer(1).value_type(), ValueType::Integer);
    assert_eq!(ValueType::Hash.to_string(), "HASH");
    assert_eq!(ValueType::Builtin.to_string(), "BUILTIN");
}

fn eval_in(context: &Context, source: &str) -> String {
    match monkey::run(source, context) {
        Ok(Some(value)) => value.inspect(),
        Ok(None) => String::new(),
        Err(e) => panic!("Script {source:?} does not parse:\n{e}"),
    }
}

#[test]
fn context_keeps_bindings_between_runs() {
    let context = Context::new();

    assert_eq!(eval_in(&context, "let counter = fn(n) { n + 1 };"), "");
    assert_eq!(eval_in(&context, "let n = counter(41);"), "");
    assert_eq!(eval_in(&context, "n"), "42");
    assert_eq!(eval_in(&context, "undefinedName"), "ERROR: identifier not found: undefinedName");
    assert_eq!(eval_in(&context, "n * 2"), "84");
}

#[test]
fn repl_formats_parser_errors() {
    let context = Context::new();

    assert_eq!(monkey::repl::eval_line(&context, "let x 1; let = 2;").as_deref(),
               Some("parser errors:\n\texpected next token to be =, got INT instead\n\texpected \
                     next token to be IDENT, got = instead\n\tno prefix parse function for ="));
    assert_eq!(monkey::repl::eval_line(&context, "1 + 1").as_deref(), Some("2"));
}

#[test]
fn every_listed_builtin_resolves() {
    use monkey::interpreter::evaluator::function::builtin::{BUILTIN_FUNCTIONS, lookup};

    assert_eq!(BUILTIN_FUNCTIONS, ["len", "first", "last", "rest", "push", "puts"]);
    for name in BUILTIN_FUNCTIONS {
        assert!(lookup(name).is_some(), "{name} is listed but not callable");
        assert_eq!(eval(name), "builtin function");
    }
}

#[test]
fn context_can_start_from_a_prepared_environment() {
    use monkey::interpreter::environment::Environment;

    let mut root = Environment::new();
    root.set("answer", Value::Integer(42));
    let context = Context::with_env(root.shared());

    assert_eq!(eval_in(&context, "answer / 2"), "21");
    assert_eq!(eval_in(&context, "let extra = 1;"), "");
    assert_eq!(context.env().borrow().get("extra"), Some(Value::Integer(1)));
}
