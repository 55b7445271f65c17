use crate::ports::InputReader;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: InputReader> {
    inputs: R,
}

impl<R: InputReader> AppContext<R> {
    /// Create a new application context.
    pub fn new(inputs: R) -> Self {
        Self { inputs }
    }

    /// Get a reference to the input reader.
    pub fn inputs(&self) -> &R {
        &self.inputs
    }
}
