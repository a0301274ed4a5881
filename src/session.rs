use std::io::{self, BufRead, Write};

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Environment, lexer::lex, parser::shunting_yard::to_postfix,
        token::core::join, value::core::Value,
    },
};

/// Display settings for a [`Session`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Print `tokens: ...` with the lexed tokens of each line.
    pub show_tokens:  bool,
    /// Print `postfix: ...` with the postfix order of each line.
    pub show_postfix: bool,
}

/// A sequence of lines evaluated against one shared environment.
///
/// ## Usage
///
/// Call [`Session::eval_line`] for each line, or hand a reader to
/// [`Session::run`] to drive a read-eval-print loop. Variables assigned on
/// one line are visible on every later line of the same session.
///
/// # Example
/// ```
/// use shunt::{Session, Value};
///
/// let mut session = Session::new();
/// session.eval_line("x = 5").unwrap();
///
/// assert!(session.eval_line("y = x / 0").is_err());
/// assert_eq!(session.eval_line("x").unwrap(), Value::Integer(5));
/// ```
#[derive(Debug, Default)]
pub struct Session {
    environment: Environment,
    options:     SessionOptions,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: SessionOptions) -> Self {
        Self { environment: Environment::new(),
               options }
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    #[must_use]
    pub const fn options(&self) -> SessionOptions {
        self.options
    }

    /// Evaluates one line and returns its value.
    ///
    /// The line must not contain its terminator; see [`Session::run`] for
    /// reading framed input.
    ///
    /// # Errors
    /// Returns the first lexing or evaluation error. The session stays
    /// usable afterwards.
    pub fn eval_line(&mut self, line: &str) -> Result<Value, Error> {
        self.eval_staged(line, None)
    }

    /// Runs a read-eval-print loop until `input` is exhausted.
    ///
    /// Each line has its terminator (`\n` or `\r\n`) removed. Blank lines are
    /// skipped. Values are written to `out`, one per line, preceded by the
    /// token and postfix echoes enabled in the [`SessionOptions`]. Errors are
    /// written to `err` as `error: <message>` and the loop moves on to the
    /// next line.
    ///
    /// When `prompt` is given it is written to `out` before every read.
    ///
    /// Returns the number of lines that failed.
    ///
    /// # Errors
    /// Only I/O errors from `input`, `out` or `err` end the loop early.
    ///
    /// # Example
    /// ```
    /// use shunt::Session;
    ///
    /// let input = "x = 2\r\n\nx ** 3\n1 / 0\n";
    /// let mut out = Vec::new();
    /// let mut err = Vec::new();
    ///
    /// let failures = Session::new().run(input.as_bytes(), &mut out, &mut err, None).unwrap();
    ///
    /// assert_eq!(failures, 1);
    /// assert_eq!(String::from_utf8(out).unwrap(), "2\n8\n");
    /// assert!(String::from_utf8(err).unwrap().starts_with("error: "));
    /// ```
    pub fn run<R, W, E>(&mut self,
                        input: R,
                        out: &mut W,
                        err: &mut E,
                        prompt: Option<&str>)
                        -> io::Result<usize>
        where R: BufRead,
              W: Write,
              E: Write
    {
        let mut failures = 0;
        let mut lines = input.lines();

        loop {
            if let Some(prompt) = prompt {
                write!(out, "{prompt}")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            let mut echo = Vec::new();
            let result = self.eval_staged(&line, Some(&mut echo));

            for stage in &echo {
                writeln!(out, "{stage}")?;
            }

            match result {
                Ok(value) => writeln!(out, "{value}")?,
                Err(e) => {
                    failures += 1;
                    writeln!(err, "error: {e}")?;
                },
            }
        }

        if prompt.is_some() {
            writeln!(out)?;
        }

        Ok(failures)
    }

    /// Lexes, reorders and evaluates `line`.
    ///
    /// When `echo` is given, the token and postfix sequences enabled in the
    /// options are pushed to it as each stage succeeds.
    #[tracing::instrument(name = "eval_line", level = "debug", skip(self, echo))]
    fn eval_staged(&mut self,
                   line: &str,
                   mut echo: Option<&mut Vec<String>>)
                   -> Result<Value, Error> {
        let tokens = lex(line)?;
        tracing::debug!(tokens = %join(&tokens), "lexed");
        if self.options.show_tokens
           && let Some(echo) = echo.as_mut()
        {
            echo.push(format!("tokens: {}", join(&tokens)));
        }

        let postfix = to_postfix(&tokens)?;
        tracing::debug!(postfix = %join(&postfix), "reordered");
        if self.options.show_postfix
           && let Some(echo) = echo.as_mut()
        {
            echo.push(format!("postfix: {}", join(&postfix)));
        }

        Ok(self.environment.eval_postfix(&postfix)?)
    }
}
