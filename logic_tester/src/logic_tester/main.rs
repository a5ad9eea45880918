//!
//! The logic tester executable.
//!

pub(crate) mod arguments;

use std::time::Duration;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => logic_tester::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            logic_tester::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;
    logic_tester::logging::initialize(arguments.verbose);
    let reporter = logic_tester::Reporter::new(arguments.verbose, arguments.quiet);

    let registry = logic_tester::Registry::try_from(arguments.adapters_config.as_path())?;
    let adapters = registry.select(arguments.adapter.as_slice())?;

    let directory = logic_tester::FixtureDirectory::load(arguments.fixtures.as_path())?;
    for error in directory.rejected.iter() {
        reporter.rejected(error);
    }
    let fixtures = directory.into_fixture_set();

    let runtime_version = match arguments.runtime_version.as_deref() {
        Some(version) => logic_tester::adapters::runtime::parse_version(version),
        None => registry
            .runtime
            .as_ref()
            .and_then(|runtime| match runtime.detect_version() {
                Ok(version) => Some(version),
                Err(error) => {
                    tracing::warn!(%error, "Runtime version detection failed");
                    None
                }
            }),
    };
    let language = registry
        .runtime
        .as_ref()
        .map(|runtime| runtime.name.clone())
        .unwrap_or_else(|| benchmark_analyzer::UNKNOWN_VERSION.to_owned());

    let worker = match arguments.worker {
        Some(worker) => worker,
        None => logic_tester::harness::default_worker_path()?,
    };
    let harness = logic_tester::Harness::new(
        worker,
        language.clone(),
        runtime_version.clone(),
        Duration::from_secs(arguments.timeout),
    )?;
    let config = logic_tester::BenchmarkConfig::new(
        arguments.warmup_iterations,
        arguments.benchmark_iterations,
        arguments.report_passed_indices,
    )?;

    let runtime_version = runtime_version.map(|version| version.to_string());
    reporter.start(
        language.as_str(),
        runtime_version.as_deref(),
        fixtures.len(),
        adapters.len(),
    );
    let mut summary = benchmark_analyzer::Summary::new(
        benchmark_analyzer::Environment::host(language, runtime_version),
        fixtures.len(),
    );

    let run_time_start = Instant::now();
    for descriptor in adapters.into_iter() {
        reporter.started(descriptor.name.as_str());
        let result = harness.benchmark(descriptor, &fixtures, &config);
        reporter.finished(&result);
        summary.insert(descriptor.name.clone(), result);
    }
    summary.timestamp = chrono::Utc::now();

    reporter.table(&summary);
    if !arguments.quiet {
        println!(
            "    {} benchmarking in {}m{:02}s",
            "Finished".bright_green().bold(),
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
        );
    }

    if let Some(path) = arguments.output {
        let output = benchmark_analyzer::Output::from((&summary, arguments.output_format));
        output.write_to_file(path)?;
    }

    Ok(())
}
