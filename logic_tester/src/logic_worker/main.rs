//!
//! The logic worker executable.
//!
//! Prints exactly one `BENCHMARK_RESULT:` line, even if the implementation cannot be loaded.
//!

pub(crate) mod arguments;

use clap::Parser;

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
    logic_tester::logging::initialize(arguments.verbose);

    let payload = logic_tester::Payload::try_from(arguments.config.as_path())?;
    tracing::debug!(
        implementation = payload.implementation_id.as_str(),
        tests = payload.tests.len(),
        "Payload loaded"
    );

    let result = logic_tester::measurement::run(
        &payload,
        logic_tester::measurement::memory::host(),
    );
    println!("{}", logic_tester::harness::protocol::encode(&result)?);
    Ok(())
}
