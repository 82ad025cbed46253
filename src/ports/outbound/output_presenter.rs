use crate::shared::Result;

/// OutputPresenter port delivering a finished report (stdout, a file, ...)
pub trait OutputPresenter {
    /// # Errors
    /// Returns an error if the destination cannot be written.
    fn present(&self, content: &str) -> Result<()>;
}
