/// ProgressReporter port for operator feedback
///
/// Index loading and batch traversal can take a while on a full archive;
/// this port carries progress lines and non-fatal warnings (unknown
/// packages, skipped stanzas, failed targets) to the operator without
/// mixing them into the graph output.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through a batch
    ///
    /// # Arguments
    /// * `current` - Number of finished items
    /// * `total` - Total number of items
    /// * `message` - Optional message, usually the item just finished
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal problem, naming the offending package
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
