//! One subcommand per day.

use clap::Subcommand;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::config::RunConfig;
use crate::day::{run_io, Day};
use crate::error::DayError;

mod day0;

pub use day0::Day0;

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCommand {
    /// Echo stdin back to stdout
    Day0,
}

impl DayCommand {
    pub const ALL: &'static [DayCommand] = &[DayCommand::Day0];

    pub fn name(self) -> &'static str {
        match self {
            DayCommand::Day0 => Day0::NAME,
        }
    }

    pub async fn run<R, W>(self, config: &RunConfig, reader: R, writer: W) -> Result<(), DayError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        match self {
            DayCommand::Day0 => run_io(&Day0, config, reader, writer).await,
        }
    }
}
