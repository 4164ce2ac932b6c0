//! Runtime settings handed to every day.

use crate::parallel::{CancelToken, DEFAULT_PARALLELISM};

/// What a day may consult while solving.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Ceiling for [`crate::parallel::parallel_map`] calls made by a day.
    pub parallelism: usize,

    /// Fired on Ctrl-C; pass it to [`crate::parallel::parallel_map`].
    pub cancel: CancelToken,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            parallelism: DEFAULT_PARALLELISM,
            cancel: CancelToken::new(),
        }
    }
}

impl RunConfig {
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism.max(1);
        self
    }
}
