//! The parse / solve / format pipeline every day goes through.

use std::fmt::Display;
use std::future::Future;
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::error::DayError;

pub trait Day: Send + Sync {
    type Input: Send;
    type Output: Display + Send;

    /// Subcommand name, e.g. `day0`.
    const NAME: &'static str;

    fn parse(&self, input: &str) -> Result<Self::Input, DayError>;

    fn solve(
        &self,
        input: Self::Input,
        config: &RunConfig,
    ) -> impl Future<Output = Result<Self::Output, DayError>> + Send;

    fn format(&self, output: &Self::Output) -> String {
        output.to_string()
    }

    /// Runs the whole pipeline on already-read text.
    fn run(
        &self,
        input: &str,
        config: &RunConfig,
    ) -> impl Future<Output = Result<String, DayError>> + Send {
        async move {
            let parsed = self.parse(input)?;
            let output = self.solve(parsed, config).await?;
            Ok(self.format(&output))
        }
    }
}

/// Reads all of `reader`, runs `day` and writes the answer to `writer`.
pub async fn run_io<D, R, W>(
    day: &D,
    config: &RunConfig,
    mut reader: R,
    mut writer: W,
) -> Result<(), DayError>
where
    D: Day,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw).await?;
    let input = String::from_utf8(raw)?;
    debug!(day = D::NAME, bytes = input.len(), "read input");

    let started = Instant::now();
    let answer = day.run(&input, config).await?;
    info!(day = D::NAME, elapsed = ?started.elapsed(), "solved");

    writer.write_all(answer.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
