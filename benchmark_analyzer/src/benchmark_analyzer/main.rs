//!
//! The benchmark analyzer binary.
//!

pub(crate) mod arguments;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let reference = benchmark_analyzer::Summary::try_from(arguments.reference)?;
    let candidate = benchmark_analyzer::Summary::try_from(arguments.candidate)?;

    let comparison = benchmark_analyzer::Comparison::new(&reference, &candidate);

    match arguments.output_file {
        Some(output_path) => {
            colored::control::set_override(false);
            let mut file = std::fs::File::create(output_path.as_path()).map_err(|error| {
                benchmark_analyzer::Error::Writing {
                    error,
                    path: output_path.clone(),
                }
            })?;
            comparison.write_all(&mut file)?;
        }
        None => {
            let mut stdout = std::io::stdout();
            comparison.write_all(&mut stdout)?;
        }
    }

    if arguments.fail_on_regression && comparison.has_regressions() {
        anyhow::bail!("Pass rate regressions detected");
    }

    Ok(())
}
