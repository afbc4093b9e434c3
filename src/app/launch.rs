//! The search and `--add` given on the command line.
//!
//! One-shot runs stop at the first failure. Interactive runs report it and
//! carry on into the prompt with whatever state the earlier steps left.

use crate::app::shell::{self, execute, Command};
use crate::core::session::CompareSession;
use crate::core::PricingService;
use crate::domain::model::OutputFormat;
use crate::utils::error::{CompareError, Result};
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Launch {
    pub part_number: Option<String>,
    pub volume: Option<String>,
    /// 1-based result row to add after the search.
    pub add: Option<usize>,
}

impl Launch {
    pub fn has_search(&self) -> bool {
        self.part_number.is_some() || self.volume.is_some()
    }

    fn commands(&self) -> Vec<Result<Command>> {
        let mut commands = Vec::new();

        if self.has_search() {
            commands.push(Ok(Command::Search {
                part_number: self.part_number.clone().unwrap_or_default(),
                volume: self.volume.clone().unwrap_or_default(),
            }));
        }

        if let Some(row) = self.add {
            commands.push(match row.checked_sub(1) {
                Some(index) => Ok(Command::Add(index)),
                None => Err(CompareError::InvalidInput {
                    input: row.to_string(),
                    reason: "result rows start at 1".to_string(),
                }),
            });
        }

        commands
    }
}

/// Runs the launch steps in order and writes their output. The first error
/// is returned; output already written stays written.
pub async fn run_once<P, W>(
    session: &mut CompareSession<P>,
    launch: &Launch,
    output: &mut W,
    format: OutputFormat,
) -> Result<()>
where
    P: PricingService,
    W: AsyncWrite + Unpin,
{
    for command in launch.commands() {
        let (text, _) = execute(session, command?, format).await?;
        output.write_all(text.as_bytes()).await?;
        output.flush().await?;
    }

    Ok(())
}

/// Runs the launch steps, reporting failures inline, then hands over to the
/// command loop.
pub async fn run_interactive<P, R, W>(
    session: &mut CompareSession<P>,
    launch: &Launch,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<()>
where
    P: PricingService,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    for command in launch.commands() {
        let result = match command {
            Ok(command) => execute(session, command, format).await,
            Err(e) => Err(e),
        };

        match result {
            Ok((text, _)) => output.write_all(text.as_bytes()).await?,
            Err(e) => shell::report(&mut output, &e).await?,
        }
    }

    output.write_all(shell::HELP.as_bytes()).await?;
    shell::run(session, input, output, format).await
}
