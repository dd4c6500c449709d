//! Generic driver that executes a `TestSuite` using a pluggable engine.

use crate::suites::kat::model::{TestCase, TestGroup, TestSuite};

/// Trait every KDF back-end must implement.
pub trait KatEngine {
    /// Execute one test case and return `Ok(())` on success.
    fn run(&self, group: &TestGroup, case: &TestCase) -> Result<(), String>;
}

/// Outcome counts of one suite run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

/// Thin wrapper that walks suites and tallies results.
pub struct Runner<'e, E: KatEngine> {
    engine: &'e E,
}

impl<'e, E: KatEngine> Runner<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    /// Run every case, returning the tally when nothing failed
    pub fn run_suite(&self, suite: &TestSuite) -> Result<Tally, String> {
        let mut tally = Tally::default();

        for group in &suite.groups {
            println!(
                "Running group {}: {} ({})",
                group.group_id, group.hash_alg, group.test_type
            );

            for case in &group.tests {
                match check(self.engine.run(group, case), case) {
                    Ok(()) => tally.passed += 1,
                    Err(e) => {
                        tally.failed += 1;
                        eprintln!("Case {} failed: {}", case.test_id, e);
                    }
                }
            }
        }

        println!("Test results: {} passed, {} failed", tally.passed, tally.failed);

        if tally.failed > 0 {
            Err(format!("{} tests failed", tally.failed))
        } else {
            Ok(tally)
        }
    }
}

/// Match an engine result against the case's expectation
fn check(res: Result<(), String>, case: &TestCase) -> Result<(), String> {
    match (res, case.expected_result.as_str()) {
        (Ok(()), "valid") => Ok(()),
        (Err(e), "invalid") => match &case.error_contains {
            Some(needle) if !e.contains(needle.as_str()) => {
                Err(format!("error {e:?} does not mention {needle:?}"))
            }
            _ => Ok(()),
        },
        (Ok(()), expected) => Err(format!("succeeded but expected {expected}")),
        (Err(e), _) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(expected_result: &str, error_contains: Option<&str>) -> TestCase {
        TestCase {
            test_id: 1,
            z: String::new(),
            fixed_info: String::new(),
            out_len_bits: 0,
            dkm: None,
            expected_result: expected_result.into(),
            error_contains: error_contains.map(Into::into),
        }
    }

    #[test]
    fn test_check() {
        assert!(check(Ok(()), &case("valid", None)).is_ok());
        assert!(check(Ok(()), &case("invalid", None)).is_err());
        assert!(check(Err("boom".into()), &case("valid", None)).is_err());
        assert!(check(Err("boom".into()), &case("invalid", None)).is_ok());
        assert!(check(Err("boom".into()), &case("invalid", Some("oom"))).is_ok());
        assert!(check(Err("boom".into()), &case("invalid", Some("bang"))).is_err());
    }
}
