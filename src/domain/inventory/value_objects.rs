use std::fmt;

/// Upc value object representing a usable product code
///
/// # Invariants
/// - Non-empty after trimming surrounding whitespace
/// - Stored in trimmed form
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upc(String);

impl Upc {
    /// Creates a new Upc value object
    ///
    /// # Example
    /// ```
    /// use inventory_api::domain::inventory::value_objects::Upc;
    ///
    /// let upc = Upc::new(" 11223344 ").expect("valid upc");
    /// assert_eq!(upc.as_str(), "11223344");
    /// ```
    pub fn new(upc: impl Into<String>) -> Result<Self, String> {
        let upc = upc.into();
        let trimmed = upc.trim();
        if trimmed.is_empty() {
            Err("upc must not be empty".to_string())
        } else {
            Ok(Upc(trimmed.to_string()))
        }
    }

    /// Returns the upc as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value object, yielding the trimmed string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Upc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
