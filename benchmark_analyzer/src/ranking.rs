//!
//! The ranking of benchmark results.
//!

use std::cmp::Ordering;

use crate::model::result::BenchmarkResult;

///
/// Orders the results: successful ones by pass rate, then by throughput, both descending.
///
/// Non-successful results follow all successful ones in their original order.
///
pub fn rank<'a, I, S>(results: I) -> Vec<(&'a str, &'a BenchmarkResult)>
where
    I: IntoIterator<Item = (&'a S, &'a BenchmarkResult)>,
    S: AsRef<str> + ?Sized + 'a,
{
    let mut ranked: Vec<(&'a str, &'a BenchmarkResult)> = results
        .into_iter()
        .map(|(name, result)| (name.as_ref(), result))
        .collect();
    ranked.sort_by(|(_, left), (_, right)| compare(left, right));
    ranked
}

///
/// The ranking order of two results.
///
fn compare(left: &BenchmarkResult, right: &BenchmarkResult) -> Ordering {
    match (left.is_success(), right.is_success()) {
        (true, true) => right
            .pass_rate
            .total_cmp(&left.pass_rate)
            .then_with(|| right.ops_per_second.total_cmp(&left.ops_per_second)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}
