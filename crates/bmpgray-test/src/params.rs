//! Regression test parameters and operations

use std::fs;
use std::path::Path;

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the index of the
/// current check, and every failure seen so far. Checks never panic;
/// call [`RegParams::cleanup`] at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "bmpio")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "bmpio")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two byte sequences for exact equality
    ///
    /// On mismatch the first differing offset is reported.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 == data2 {
            return true;
        }

        let first_diff = data1
            .iter()
            .zip(data2)
            .position(|(a, b)| a != b)
            .unwrap_or(data1.len().min(data2.len()));
        let msg = format!(
            "Failure in {}_reg: string comparison for index {}\n\
             sizes: {} vs {}, first difference at offset {}",
            self.test_name,
            self.index,
            data1.len(),
            data2.len(),
            first_diff
        );
        self.fail(msg)
    }

    /// Compare the contents of two files
    ///
    /// A file that cannot be read counts as a failure.
    pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(&mut self, path1: P, path2: Q) -> bool {
        let (path1, path2) = (path1.as_ref(), path2.as_ref());
        match (fs::read(path1), fs::read(path2)) {
            (Ok(data1), Ok(data2)) => self.compare_strings(&data1, &data2),
            (r1, r2) => {
                self.index += 1;
                let msg = format!(
                    "Failure in {}_reg: file comparison for index {}\n\
                     {}: {}, {}: {}",
                    self.test_name,
                    self.index,
                    path1.display(),
                    r1.err().map_or("ok".to_string(), |e| e.to_string()),
                    path2.display(),
                    r2.err().map_or("ok".to_string(), |e| e.to_string()),
                );
                self.fail(msg)
            }
        }
    }

    /// Record a boolean check
    pub fn check(&mut self, ok: bool, what: &str) -> bool {
        self.index += 1;
        if ok {
            true
        } else {
            let msg = format!(
                "Failure in {}_reg: check {} failed: {}",
                self.test_name, self.index, what
            );
            self.fail(msg)
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
