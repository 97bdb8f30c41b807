use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{Context, error::ParseErrors};

/// The prompt printed before each line.
pub const PROMPT: &str = ">> ";

/// Runs the interactive loop until end of input or an interrupt.
///
/// Every line is evaluated against the same context, so bindings persist from
/// one line to the next.
///
/// # Errors
/// Fails if the terminal cannot be set up or read from.
pub fn start() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let context = Context::new();

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                if let Some(output) = eval_line(&context, &line) {
                    println!("{output}");
                }
            },
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(error) => return Err(error),
        }
    }
}

/// Evaluates one line and returns the text to show for it.
///
/// Parse failures render the whole diagnostic list; otherwise the inspected
/// result is returned. A line that yields no value prints nothing.
///
/// # Example
/// ```
/// use monkey::{Context, repl::eval_line};
///
/// let context = Context::new();
///
/// assert_eq!(eval_line(&context, "let a = 5;"), None);
/// assert_eq!(eval_line(&context, "a * 2").as_deref(), Some("10"));
/// assert_eq!(eval_line(&context, "let 1").as_deref(),
///            Some("parser errors:\n\texpected next token to be IDENT, got INT instead"));
/// ```
#[must_use]
pub fn eval_line(context: &Context, line: &str) -> Option<String> {
    match crate::run(line, context) {
        Ok(value) => value.map(|value| value.inspect()),
        Err(errors) => Some(format_parse_errors(&errors)),
    }
}

/// Renders diagnostics under a `parser errors:` header, one tab-indented
/// message per line.
#[must_use]
pub fn format_parse_errors(errors: &ParseErrors) -> String {
    let mut out = String::from("parser errors:");
    for error in errors {
        out.push_str("\n\t");
        out.push_str(&error.to_string());
    }
    out
}
