use crate::config::RunConfig;
use crate::day::Day;
use crate::error::DayError;

/// Echoes its input. Smoke test for the stdin/stdout plumbing.
pub struct Day0;

impl Day for Day0 {
    type Input = String;
    type Output = String;

    const NAME: &'static str = "day0";

    fn parse(&self, input: &str) -> Result<String, DayError> {
        Ok(input.to_owned())
    }

    async fn solve(&self, input: String, _: &RunConfig) -> Result<String, DayError> {
        Ok(input)
    }

    fn format(&self, output: &String) -> String {
        output.clone()
    }
}
