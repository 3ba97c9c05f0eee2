use std::collections::VecDeque;
use std::fs;

use super::Resource;
use super::error::PsiError;

/// A provider of raw cumulative stall counters, in microseconds since boot.
///
/// Counters are monotonically non-decreasing in principle; each call reads
/// a fresh value. Implementations never retry, that is the caller's call.
pub trait CounterSource: Send + 'static {
    fn read_total(&mut self) -> Result<u64, PsiError>;
}

/// Counter source backed by one of the /proc/pressure files.
pub struct PressureFile {
    path: &'static str,
}

impl PressureFile {
    pub fn new(resource: Resource) -> Self {
        Self {
            path: resource.path(),
        }
    }
}

impl CounterSource for PressureFile {
    fn read_total(&mut self) -> Result<u64, PsiError> {
        let path = self.path;
        let text = fs::read_to_string(path).map_err(|source| PsiError::Read { path, source })?;
        parse_some_total(&text, path)
    }
}

/// Extracts the value of the first `total=` field, which in /proc/pressure
/// files belongs to the `some` line. The `full` line is ignored.
fn parse_some_total(text: &str, path: &'static str) -> Result<u64, PsiError> {
    let (_, rest) = text
        .split_once("total=")
        .ok_or(PsiError::Parse { path })?;
    let field = rest.lines().next().unwrap_or("");
    field.trim().parse().map_err(|_| PsiError::Parse { path })
}

/// A scripted counter source for tests: pops one pre-seeded result per read.
pub struct ScriptedSource {
    results: VecDeque<Result<u64, PsiError>>,
}

impl ScriptedSource {
    pub fn new(results: impl IntoIterator<Item = Result<u64, PsiError>>) -> Self {
        Self {
            results: results.into_iter().collect(),
        }
    }
}

impl CounterSource for ScriptedSource {
    fn read_total(&mut self) -> Result<u64, PsiError> {
        self.results
            .pop_front()
            .expect("scripted source should not be exhausted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "some avg10=0.00 avg60=1.23 avg300=0.50 total=417963\n\
                          full avg10=0.00 avg60=0.00 avg300=0.00 total=205933\n";

    #[test]
    fn parses_some_line_total() {
        let total = parse_some_total(SAMPLE, "/proc/pressure/cpu").unwrap();
        assert_eq!(total, 417963);
    }

    #[test]
    fn missing_total_field_is_a_parse_error() {
        let err = parse_some_total("some avg10=0.00 avg60=0.00\n", "/proc/pressure/io").unwrap_err();
        assert!(matches!(err, PsiError::Parse { path: "/proc/pressure/io" }));
    }

    #[test]
    fn non_numeric_total_is_a_parse_error() {
        let err = parse_some_total("some total=banana\n", "/proc/pressure/memory").unwrap_err();
        assert!(matches!(err, PsiError::Parse { .. }));
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        let err = parse_some_total("", "/proc/pressure/cpu").unwrap_err();
        assert!(matches!(err, PsiError::Parse { .. }));
    }

    #[test]
    fn scripted_source_replays_in_order() {
        let mut source = ScriptedSource::new([Ok(1), Ok(2)]);
        assert_eq!(source.read_total().unwrap(), 1);
        assert_eq!(source.read_total().unwrap(), 2);
    }
}
