use axum::Router;

use crate::context::TestContext;

/// Builder for creating test contexts around an application router.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_origin("http://localhost:1234")
///     .build(app);
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// `Origin` header attached to every request sent through the context.
    origin: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder that sends requests without an `Origin` header.
    pub fn new() -> Self {
        Self { origin: None }
    }

    /// Attaches `origin` as the `Origin` header on every request.
    ///
    /// # Arguments
    /// - `origin` - Origin to present, e.g. `http://localhost:1234` or `null`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Builds the test context around a fully assembled router.
    ///
    /// # Arguments
    /// - `router` - Router with its state already applied
    pub fn build(self, router: Router) -> TestContext {
        TestContext::new(router, self.origin)
    }
}
