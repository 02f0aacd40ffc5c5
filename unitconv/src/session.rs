//! Line-oriented conversion session
//!
//! Reads one request per line, writes one response per line, and keeps going
//! after every per-request error. Stops on `exit` or end of input.

use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use unitconv_core::ConvertError;

use crate::{parse, render, render_json, Conversion, Converter};

/// Prompt written before each read
pub const PROMPT: &str = "Enter what you want to convert (or exit): ";

/// Input that ends the session (case-insensitive)
pub const EXIT_COMMAND: &str = "exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// "1.0 kilometer is 3280.839895013123 feet"
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Written (without newline) before every read; `None` disables it
    pub prompt: Option<String>,
    pub format: OutputFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            prompt: Some(PROMPT.to_string()),
            format: OutputFormat::Text,
        }
    }
}

impl SessionConfig {
    /// Builder: drop the prompt
    pub fn without_prompt(mut self) -> Self {
        self.prompt = None;
        self
    }

    /// Builder: set output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Counts reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub processed: usize,
    pub failed: usize,
}

pub struct Session<'r> {
    converter: Converter<'r>,
    config: SessionConfig,
}

impl Session<'static> {
    /// Session over the process-wide registry
    pub fn new(config: SessionConfig) -> Self {
        Session::with_converter(Converter::global(), config)
    }
}

impl<'r> Session<'r> {
    pub fn with_converter(converter: Converter<'r>, config: SessionConfig) -> Self {
        Session { converter, config }
    }

    /// Parse and convert one line
    pub fn process(&self, line: &str) -> Result<Conversion<'r>, ConvertError> {
        let request = parse(line)?;
        self.converter.convert(&request)
    }

    /// Parse, convert and render one line in the configured format
    pub fn evaluate(&self, line: &str) -> String {
        let outcome = self.process(line);
        self.render(&outcome)
    }

    fn render(&self, outcome: &Result<Conversion<'r>, ConvertError>) -> String {
        match self.config.format {
            OutputFormat::Text => render(outcome),
            OutputFormat::Json => render_json(outcome),
        }
    }

    /// Run until `exit` or end of input. Only I/O errors abort the loop.
    pub fn run<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        loop {
            if let Some(prompt) = &self.config.prompt {
                write!(writer, "{}", prompt)?;
                writer.flush()?;
            }

            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                break;
            }

            // Malformed UTF-8 is a bad request, not a broken stream
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);

            if line.trim().to_lowercase() == EXIT_COMMAND {
                debug!("exit requested");
                break;
            }

            let outcome = self.process(line);
            summary.processed += 1;
            if let Err(err) = &outcome {
                summary.failed += 1;
                debug!(code = err.code(), "request failed");
            }

            writeln!(writer, "{}", self.render(&outcome))?;
            writer.flush()?;
        }

        info!(processed = summary.processed, failed = summary.failed, "session finished");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_quiet(input: &str) -> (String, SessionSummary) {
        let session = Session::new(SessionConfig::default().without_prompt());
        let mut out = Vec::new();
        let summary = session.run(Cursor::new(input), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_scenarios() {
        let cases = [
            ("1 degree Celsius to kelvins", "1.0 degree Celsius is 274.15 kelvins"),
            ("5 km to km", "5.0 kilometers is 5.0 kilometers"),
            ("1 Pound to degrees Celsius", "Conversion from pounds to degrees Celsius is impossible"),
            ("-100.1 cm to M", "Length shouldn't be negative"),
            ("100 AAA convertTo BBB", "Conversion from ??? to ??? is impossible"),
            ("Random string without numbers", "Parse error"),
        ];

        let session = Session::new(SessionConfig::default());
        for (input, expected) in cases {
            assert_eq!(session.evaluate(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_more_scenarios() {
        let session = Session::new(SessionConfig::default());
        assert_eq!(session.evaluate("1 km to feet"), "1.0 kilometer is 3280.839895013123 feet");
        assert_eq!(session.evaluate("3 pount to ounces"), "Conversion from ??? to ounces is impossible");
        assert_eq!(session.evaluate("3 kelvins to grams"), "Conversion from kelvins to grams is impossible");
        assert_eq!(session.evaluate("-100.0 kelvin to Y"), "Conversion from kelvins to ??? is impossible");
        assert_eq!(session.evaluate("1 degree XX to degrees YY"), "Conversion from ??? to ??? is impossible");
        assert_eq!(session.evaluate("-100.1 Gram to kg"), "Weight shouldn't be negative");
        assert_eq!(session.evaluate("1 C in F"), "1.0 degree Celsius is 33.8 degrees Fahrenheit");
    }

    #[test]
    fn test_run_stops_at_exit() {
        let (out, summary) = run_quiet("5 km to km\nEXIT\n1 km to m\n");
        assert_eq!(out, "5.0 kilometers is 5.0 kilometers\n");
        assert_eq!(summary, SessionSummary { processed: 1, failed: 0 });
    }

    #[test]
    fn test_run_stops_at_padded_exit() {
        let (out, summary) = run_quiet("exit \n1 km to m\n");
        assert_eq!(out, "");
        assert_eq!(summary, SessionSummary::default());

        let (out, _) = run_quiet("1 km to m\n  Exit\r\n1 km to m\n");
        assert_eq!(out, "1.0 kilometer is 1000.0 meters\n");
    }

    #[test]
    fn test_run_survives_invalid_utf8() {
        let session = Session::new(SessionConfig::default().without_prompt());
        let mut out = Vec::new();
        let input: &[u8] = b"\xff\xfe km\n1 km to m\nexit\n";
        let summary = session.run(Cursor::new(input), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Parse error\n1.0 kilometer is 1000.0 meters\n"
        );
        assert_eq!(summary, SessionSummary { processed: 2, failed: 1 });
    }

    #[test]
    fn test_run_until_eof() {
        let (out, summary) = run_quiet("1 kn to feet\n3 grams to meters\n2 m to cm");
        assert_eq!(
            out,
            "Conversion from ??? to feet is impossible\n\
             Conversion from grams to meters is impossible\n\
             2.0 meters is 200.0 centimeters\n"
        );
        assert_eq!(summary, SessionSummary { processed: 3, failed: 2 });
    }

    #[test]
    fn test_run_continues_after_errors() {
        let (out, summary) = run_quiet("\nhello\n-1 mi to km\n1 m to km\nexit\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec![
            "Parse error",
            "Parse error",
            "Length shouldn't be negative",
            "1.0 meter is 0.001 kilometers",
        ]);
        assert_eq!(summary.failed, 3);
    }

    #[test]
    fn test_prompt_before_each_read() {
        let session = Session::new(SessionConfig::default());
        let mut out = Vec::new();
        session.run(Cursor::new("5 km to km\nexit\n"), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, format!("{}5.0 kilometers is 5.0 kilometers\n{}", PROMPT, PROMPT));
    }

    #[test]
    fn test_json_output() {
        let session = Session::new(
            SessionConfig::default().without_prompt().with_format(OutputFormat::Json),
        );
        let mut out = Vec::new();
        session.run(Cursor::new("1 lb to oz\nnope\n"), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["ok"], true);
        assert_eq!(lines[0]["result"]["from_name"], "pound");
        assert_eq!(lines[1]["ok"], false);
        assert_eq!(lines[1]["code"], "PARSE_ERROR");
        assert_eq!(lines[1]["error"]["input"], "nope");
    }
}
