mod cli;

use clap::Parser;
use cli::Args;
use std::path::Path;
use std::process;
use vendor_risk::adapters::outbound::console::StderrProgressReporter;
use vendor_risk::adapters::outbound::filesystem::CsvVendorSource;
use vendor_risk::adapters::outbound::synthetic::{RandomOwaspAssigner, SyntheticVendorSource};
use vendor_risk::application::dto::{AssessmentRequest, AssessmentResponse, OutputFormat};
use vendor_risk::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use vendor_risk::application::use_cases::AssessVendorsUseCase;
use vendor_risk::config::{discover_config, load_config_from_path, ConfigFile};
use vendor_risk::ports::outbound::{OutputPresenter, ProgressReporter, ReportFormatter, VendorSource};
use vendor_risk::risk_assessment::policies::HIGH_RISK_HEADLINE_THRESHOLD;
use vendor_risk::shared::error::ExitCode;
use vendor_risk::shared::Result;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_logging(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Effective settings: CLI flag, then config file, then built-in default
#[derive(Debug)]
struct Settings {
    format: OutputFormat,
    request: AssessmentRequest,
    fail_on_high_risk: bool,
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(Path::new(".")),
    }
}

fn merge_settings(args: &Args, config: Option<ConfigFile>) -> Result<Settings> {
    let config = config.unwrap_or_default();

    let format = args
        .format
        .or(config.output_format()?)
        .unwrap_or_default();
    let threshold = args
        .high_risk_threshold
        .or(config.high_risk_threshold()?)
        .unwrap_or(HIGH_RISK_HEADLINE_THRESHOLD);
    let fail_on_high_risk = args.fail_on_high_risk || config.fail_on_high_risk.unwrap_or(false);
    let filters = args
        .filter_criteria()
        .or(config.filters.unwrap_or_default());

    Ok(Settings {
        format,
        request: AssessmentRequest::new(filters, threshold),
        fail_on_high_risk,
    })
}

fn assess<VS: VendorSource>(
    vendor_source: VS,
    owasp_assigner: RandomOwaspAssigner,
    request: AssessmentRequest,
) -> Result<AssessmentResponse> {
    let use_case =
        AssessVendorsUseCase::new(vendor_source, owasp_assigner, StderrProgressReporter::new());
    use_case.execute(request)
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = merge_settings(&args, config)?;

    let owasp_assigner = match args.seed {
        Some(seed) => RandomOwaspAssigner::seeded(seed),
        None => RandomOwaspAssigner::new(),
    };

    let response = match (args.synthetic, &args.input) {
        (Some(count), _) => assess(
            SyntheticVendorSource::new(count as usize, args.seed),
            owasp_assigner,
            settings.request,
        )?,
        (None, Some(path)) => assess(
            CsvVendorSource::new(path.clone()),
            owasp_assigner,
            settings.request,
        )?,
        (None, None) => anyhow::bail!(
            "No vendor roster given\n\n💡 Hint: Pass --input ROSTER.csv or --synthetic N"
        ),
    };

    let progress_reporter = StderrProgressReporter::new();
    progress_reporter.report(FormatterFactory::progress_message(settings.format));

    let formatter: Box<dyn ReportFormatter> = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.report)?;

    let presenter: Box<dyn OutputPresenter> =
        PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    let indicators = &response.report.key_indicators;
    progress_reporter.report_completion(&format!(
        "✅ Risk report complete: {} of {} vendor(s) selected, {} high risk",
        indicators.total_vendors, indicators.loaded_vendors, indicators.high_risk_vendors
    ));

    if settings.fail_on_high_risk && response.has_high_risk_vendors {
        progress_reporter.report_error(&format!(
            "❌ {} vendor(s) score above the high-risk threshold of {}",
            indicators.high_risk_vendors, indicators.high_risk_threshold
        ));
        return Ok(ExitCode::HighRiskDetected);
    }

    Ok(ExitCode::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use vendor_risk::risk_assessment::domain::RiskLevel;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(
            ["vendor-risk", "--synthetic", "10"]
                .into_iter()
                .chain(extra.iter().copied()),
        )
        .unwrap()
    }

    fn config(content: &str) -> ConfigFile {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, content).unwrap();
        load_config_from_path(&path).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = merge_settings(&args(&[]), None).unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.request, AssessmentRequest::default());
        assert!(!settings.fail_on_high_risk);
    }

    #[test]
    fn test_config_fills_unspecified_settings() {
        let config = config(
            "format: markdown\nhigh_risk_threshold: 10\nfail_on_high_risk: true\nfilters:\n  risk_levels: [High]\n",
        );
        let settings = merge_settings(&args(&[]), Some(config)).unwrap();

        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.request.high_risk_threshold, 10);
        assert_eq!(
            settings.request.filters.risk_levels,
            Some(vec![RiskLevel::High])
        );
        assert!(settings.fail_on_high_risk);
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = config(
            "format: markdown\nhigh_risk_threshold: 10\nfilters:\n  risk_levels: [High]\n  countries: [UK]\n",
        );
        let settings = merge_settings(
            &args(&[
                "-f",
                "csv",
                "--high-risk-threshold",
                "20",
                "--risk-level",
                "Low",
            ]),
            Some(config),
        )
        .unwrap();

        assert_eq!(settings.format, OutputFormat::Csv);
        assert_eq!(settings.request.high_risk_threshold, 20);
        assert_eq!(
            settings.request.filters.risk_levels,
            Some(vec![RiskLevel::Low])
        );
        // Axis not given on the command line still comes from the config
        assert_eq!(
            settings.request.filters.countries,
            Some(vec!["UK".to_string()])
        );
    }
}
