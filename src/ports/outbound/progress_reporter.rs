/// ProgressReporter port for user-facing status messages
///
/// Messages go to a side channel (stderr for the CLI) so that stdout stays
/// reserved for the report itself.
pub trait ProgressReporter {
    fn report(&self, message: &str);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    fn report_completion(&self, message: &str);
}
