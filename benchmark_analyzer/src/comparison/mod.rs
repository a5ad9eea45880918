//!
//! The comparison of two benchmark runs.
//!

pub mod element;

use colored::Colorize;

use crate::model::summary::Summary;

use self::element::Element;

///
/// The comparison of two benchmark runs.
///
#[derive(Debug)]
pub struct Comparison<'a> {
    /// The implementations measured successfully in both runs.
    pub elements: Vec<Element<'a>>,
    /// The implementations which cannot be compared, with the reason.
    pub skipped: Vec<(&'a str, String)>,
}

impl<'a> Comparison<'a> {
    ///
    /// Compares the candidate run against the reference one.
    ///
    pub fn new(reference: &'a Summary, candidate: &'a Summary) -> Self {
        let mut elements = Vec::with_capacity(reference.results.len());
        let mut skipped = Vec::new();

        for (name, reference) in reference.results.iter() {
            let candidate = match candidate.results.get(name) {
                Some(candidate) => candidate,
                None => {
                    skipped.push((name.as_str(), "missing in the candidate run".to_owned()));
                    continue;
                }
            };
            if !reference.is_success() || !candidate.is_success() {
                skipped.push((
                    name.as_str(),
                    format!("{} -> {}", reference.status, candidate.status),
                ));
                continue;
            }
            elements.push(Element::new(name.as_str(), reference, candidate));
        }
        for name in candidate.results.keys() {
            if !reference.results.contains_key(name) {
                skipped.push((name.as_str(), "missing in the reference run".to_owned()));
            }
        }

        Self { elements, skipped }
    }

    ///
    /// Whether any implementation lost passing test cases.
    ///
    pub fn has_regressions(&self) -> bool {
        self.elements
            .iter()
            .any(|element| element.pass_rate_delta() < 0.0)
    }

    ///
    /// Writes the comparison.
    ///
    pub fn write_all<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        for element in self.elements.iter() {
            writeln!(writer, "{}", element.print())?;
        }
        for (name, reason) in self.skipped.iter() {
            writeln!(writer, "{:24} {} ({reason})", name, "SKIPPED".bright_black())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Comparison;
    use crate::model::environment::Environment;
    use crate::model::result::BenchmarkResult;
    use crate::model::summary::Summary;

    fn measured(pass_rate: f64, ops_per_second: f64, peak_memory_mb: f64) -> BenchmarkResult {
        BenchmarkResult {
            pass_rate,
            ops_per_second,
            peak_memory_mb,
            ..BenchmarkResult::success("1.0.0".to_owned())
        }
    }

    fn summary(results: Vec<(&str, BenchmarkResult)>) -> Summary {
        let mut summary = Summary::new(Environment::host("ruby".to_owned(), None), 100);
        for (name, result) in results.into_iter() {
            summary.insert(name.to_owned(), result);
        }
        summary
    }

    #[test]
    fn factors_and_deltas() {
        let reference = summary(vec![("a", measured(90.0, 1000.0, 20.0))]);
        let candidate = summary(vec![("a", measured(95.5, 1500.0, 10.0))]);

        let comparison = Comparison::new(&reference, &candidate);
        assert_eq!(comparison.elements.len(), 1);
        let element = &comparison.elements[0];
        assert_eq!(element.pass_rate_delta(), 5.5);
        assert_eq!(element.throughput_factor(), Some(1.5));
        assert_eq!(element.peak_memory_factor(), Some(0.5));
        assert!(!comparison.has_regressions());
    }

    #[test]
    fn non_comparable_are_skipped() {
        let reference = summary(vec![
            ("broken", BenchmarkResult::error("crash")),
            ("gone", measured(100.0, 1.0, 1.0)),
            ("worse", measured(100.0, 1.0, 1.0)),
        ]);
        let candidate = summary(vec![
            ("broken", measured(100.0, 1.0, 1.0)),
            ("new", measured(100.0, 1.0, 1.0)),
            ("worse", measured(99.0, 0.0, 1.0)),
        ]);

        let comparison = Comparison::new(&reference, &candidate);
        let skipped: Vec<&str> = comparison.skipped.iter().map(|(name, _)| *name).collect();
        assert_eq!(skipped, vec!["broken", "gone", "new"]);
        assert!(comparison.has_regressions());
        assert_eq!(comparison.elements[0].throughput_factor(), Some(0.0));
    }
}
