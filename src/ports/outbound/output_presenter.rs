use crate::shared::Result;

/// OutputPresenter port for the final destination of a formatted report
/// (stdout or a file)
pub trait OutputPresenter {
    /// Writes `content` to the destination
    ///
    /// # Errors
    /// Returns an error if writing fails or the destination is rejected
    fn present(&self, content: &str) -> Result<()>;
}
