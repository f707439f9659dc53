use crate::config::{resolve_delimiter, RunConfig, DEFAULT_OUTPUT_PATH};
use crate::utils::error::{ReportError, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Asks questions on `output` and reads trimmed answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// End of input counts as an empty answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim().to_string())
    }

    pub fn ask_input_path(&mut self) -> Result<PathBuf> {
        let answer = self.ask("Enter the input file path: ")?;
        if answer.is_empty() {
            return Err(ReportError::MissingConfigError {
                field: "input".to_string(),
            });
        }
        Ok(PathBuf::from(answer))
    }

    pub fn ask_output_path(&mut self) -> Result<PathBuf> {
        let answer = self.ask(&format!(
            "Enter the output file path (Enter for '{}'): ",
            DEFAULT_OUTPUT_PATH
        ))?;
        if answer.is_empty() {
            return Ok(PathBuf::from(DEFAULT_OUTPUT_PATH));
        }
        Ok(PathBuf::from(answer))
    }

    /// The answer is trimmed, so a TAB has to be typed as `\t`.
    pub fn ask_delimiter(&mut self) -> Result<String> {
        let answer = self.ask("Enter the delimiter (Enter for ','; \\t for tab): ")?;
        Ok(resolve_delimiter(&answer))
    }

    /// Runs the full interactive session: input, output, delimiter.
    pub fn ask_run_config(&mut self) -> Result<RunConfig> {
        writeln!(self.output, "=== Record Report ===")?;
        let input_path = self.ask_input_path()?;
        let output_path = self.ask_output_path()?;
        let delimiter = self.ask_delimiter()?;

        let mut config = RunConfig::new(input_path).with_output_path(output_path);
        config.delimiter = delimiter;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(answers: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_defaults_when_answers_are_blank() {
        let mut prompter = prompter("data.csv\n\n\n");
        let config = prompter.ask_run_config().unwrap();

        assert_eq!(config.input_path, PathBuf::from("data.csv"));
        assert_eq!(config.output_path, PathBuf::from("report.txt"));
        assert_eq!(config.delimiter, ",");
    }

    #[test]
    fn test_tab_escape_and_custom_output() {
        let mut prompter = prompter("  data.tsv  \nout/summary.txt\n\\t\n");
        let config = prompter.ask_run_config().unwrap();

        assert_eq!(config.input_path, PathBuf::from("data.tsv"));
        assert_eq!(config.output_path, PathBuf::from("out/summary.txt"));
        assert_eq!(config.delimiter, "\t");
    }

    #[test]
    fn test_empty_input_path_is_an_error() {
        let mut prompter = prompter("\n");
        assert!(matches!(
            prompter.ask_run_config(),
            Err(ReportError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_end_of_input_uses_defaults() {
        let mut prompter = prompter("data.csv");
        let config = prompter.ask_run_config().unwrap();
        assert_eq!(config.delimiter, ",");
    }

    #[test]
    fn test_questions_are_written() {
        let mut prompter = prompter("data.csv\n\n;\n");
        prompter.ask_run_config().unwrap();
        let shown = String::from_utf8(prompter.output).unwrap();
        assert!(shown.contains("input file path"));
        assert!(shown.contains("report.txt"));
    }
}
