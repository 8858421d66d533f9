//! Test case definition.

/// One input/expected-output pair.
///
/// `I` is usually a struct with named fields, the counterpart of a keyword
/// argument mapping.
///
/// # Examples
/// ```
/// use dual_validor::TestCase;
///
/// #[derive(Debug)]
/// struct Point {
///     x: f64,
/// }
///
/// let case = TestCase::new(Point { x: 2.0 }, 12.0).with_description("d/dx x³ at 2");
/// assert_eq!(case.description(), "d/dx x³ at 2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase<I, O> {
    /// Arguments passed to the callable
    pub input: I,
    /// Value the callable must produce
    pub expected: O,
    /// Optional human-readable label
    pub description: Option<String>,
}

impl<I, O> TestCase<I, O> {
    /// Create a case without a description.
    pub fn new(input: I, expected: O) -> Self {
        Self {
            input,
            expected,
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description, or `"None"` when absent.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("None")
    }
}
