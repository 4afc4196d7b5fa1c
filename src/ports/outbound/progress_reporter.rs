/// ProgressReporter port for user-facing progress during long fetches
///
/// Messages go to the user, not to the log; diagnostics use `tracing`.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports position within a batch
    ///
    /// # Arguments
    /// * `current` - Items finished so far
    /// * `total` - Items in the batch
    /// * `message` - Optional detail, e.g. the item just finished
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not abort the operation
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
