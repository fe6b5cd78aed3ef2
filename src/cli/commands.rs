//! CLI command implementations.

use crate::cli::output::{
    OutputFormat, format_demo_description, format_demo_list, format_report, format_reports,
};
use crate::cli::parser::{Cli, Commands};
use crate::demo::{available_demos, find_demo, run_all, run_demo};
use crate::error::Result;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::List => Ok(format_demo_list(available_demos(), format)),
        Commands::Describe { name } => {
            let entry = find_demo(name)?;
            Ok(format_demo_description(entry, format))
        }
        Commands::Run { name, seed } => {
            let report = run_demo(name, *seed)?;
            Ok(format_report(&report, format))
        }
        Commands::RunAll { seed } => {
            let reports = run_all(*seed)?;
            Ok(format_reports(&reports, format))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DemoError, Error};

    fn cli(command: Commands) -> Cli {
        Cli {
            verbose: false,
            format: "text".to_string(),
            command,
        }
    }

    #[test]
    fn test_list() {
        let output = execute(&cli(Commands::List)).unwrap();
        assert!(output.contains("ema"));
        assert!(output.contains("business-forecast"));
    }

    #[test]
    fn test_describe() {
        let output = execute(&cli(Commands::Describe {
            name: "dtw".to_string(),
        }))
        .unwrap();
        assert!(output.contains("dtw"));
    }

    #[test]
    fn test_run_known_demo() {
        let output = execute(&cli(Commands::Run {
            name: "ema".to_string(),
            seed: 42,
        }))
        .unwrap();
        assert!(output.contains("moving average") || output.contains("EMA"));
    }

    #[test]
    fn test_run_unknown_demo() {
        let err = execute(&cli(Commands::Run {
            name: "nope".to_string(),
            seed: 42,
        }))
        .unwrap_err();
        assert!(matches!(err, Error::Demo(DemoError::UnknownDemo { .. })));
    }

    #[test]
    fn test_run_all_json() {
        let mut c = cli(Commands::RunAll { seed: 1 });
        c.format = "json".to_string();
        let output = execute(&c).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(16));
    }
}
