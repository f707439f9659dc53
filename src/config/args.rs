use crate::config::prompt::Prompter;
use crate::config::{RunConfig, DEFAULT_OUTPUT_PATH};
use crate::utils::error::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "record-report")]
#[command(about = "Validate id,name,value records and write a summary report")]
pub struct CliConfig {
    /// Input file; when omitted the tool asks interactively
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Report file, overwritten if it exists [default: report.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Field delimiter, any literal string; `\t` means TAB [default: ,]
    #[arg(short, long, allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// Also write the rejected lines as CSV
    #[arg(long)]
    pub errors_csv: Option<PathBuf>,

    /// Also write the statistics as JSON
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Log CPU and memory usage after each stage")]
    pub monitor: bool,
}

impl CliConfig {
    /// Resolves the run settings, prompting only when no input path was given.
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<RunConfig> {
        let config = match &self.input {
            Some(input) => RunConfig::new(input.clone())
                .with_output_path(
                    self.output
                        .clone()
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
                )
                .with_delimiter(self.delimiter.as_deref().unwrap_or_default()),
            None => {
                let mut config = prompter.ask_run_config()?;
                if let Some(output) = &self.output {
                    config.output_path = output.clone();
                }
                if let Some(delimiter) = &self.delimiter {
                    config = config.with_delimiter(delimiter);
                }
                config
            }
        };

        Ok(config
            .with_errors_csv(self.errors_csv.clone())
            .with_summary_json(self.summary_json.clone()))
    }
}
