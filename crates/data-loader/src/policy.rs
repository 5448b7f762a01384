use crate::error::LoadError;
use log::warn;

/// What a loader does with a row that fails to parse or validate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Log a warning and continue with the remaining rows
    #[default]
    SkipAndLog,
    /// Abort the load with the row's error
    Strict,
}

impl RowPolicy {
    /// Applies this policy to a failed row
    pub(crate) fn admit(self, table: &str, record: usize, err: LoadError) -> Result<(), LoadError> {
        match self {
            Self::SkipAndLog => {
                warn!("{table} record {record}: {err} (row skipped)");
                Ok(())
            }
            Self::Strict => Err(err),
        }
    }
}
