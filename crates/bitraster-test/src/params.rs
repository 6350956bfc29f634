//! Regression test parameters and comparisons

use bitraster_core::BitImage;

/// Regression test state
///
/// Tracks the test name, the index of the current comparison, and the
/// overall success status. Every comparison increments the index so a
/// failure message identifies which step diverged.
pub struct RegParams {
    /// Name of the test (e.g., "binreduce")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
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

    /// Get the current comparison index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values.
    ///
    /// Returns `true` if `actual` is within `delta` of `expected`.
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
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two images for exact pixel equality.
    pub fn compare_images(&mut self, img1: &BitImage, img2: &BitImage) -> bool {
        self.index += 1;
        if !img1.sizes_equal(img2) {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - \
                 size mismatch: {}x{} vs {}x{}",
                self.test_name,
                self.index,
                img1.width(),
                img1.height(),
                img2.width(),
                img2.height()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }
        if !img1.equals(img2) {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - pixel mismatch",
                self.test_name, self.index
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }
        true
    }

    /// Report the final status and return overall success.
    pub fn cleanup(&self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg: {} comparisons", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg: {} of {} comparisons failed",
                self.test_name,
                self.failures.len(),
                self.index
            );
        }
        self.success
    }
}
