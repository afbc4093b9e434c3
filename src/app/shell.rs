//! Line-oriented command loop driving a [`CompareSession`].
//!
//! Positions typed by the user are 1-based; the session API is 0-based.

use crate::adapters::render::{render_cart, render_results};
use crate::core::cart::CartChange;
use crate::core::session::CompareSession;
use crate::domain::model::OutputFormat;
use crate::core::PricingService;
use crate::utils::error::{CompareError, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const HELP: &str = "\
Commands:
  search <part> <volume>   look up offers for a part
  results                  show the last search results
  add <row>                add a result row to the cart
  qty <item> <volume>      change the quantity of a cart item
  rm <item>                remove a cart item
  clear                    empty the cart
  cart                     show the cart
  help                     show this help
  quit                     leave
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search { part_number: String, volume: String },
    Results,
    Add(usize),
    Quantity { index: usize, raw: String },
    Remove(usize),
    Clear,
    Cart,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

fn position(word: Option<&str>) -> Result<usize> {
    let raw = word.unwrap_or("");
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CompareError::InvalidInput {
            input: raw.to_string(),
            reason: "expected a position starting at 1".to_string(),
        }),
    }
}

pub fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Empty);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "s" => Command::Search {
            part_number: words.next().unwrap_or("").to_string(),
            volume: words.next().unwrap_or("").to_string(),
        },
        "results" | "r" => Command::Results,
        "add" | "a" => Command::Add(position(words.next())?),
        "qty" | "q" => Command::Quantity {
            index: position(words.next())?,
            raw: words.next().unwrap_or("").to_string(),
        },
        "rm" | "remove" => Command::Remove(position(words.next())?),
        "clear" => Command::Clear,
        "cart" | "c" => Command::Cart,
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(CompareError::InvalidInput {
                input: other.to_string(),
                reason: "type 'help' for the list of commands".to_string(),
            })
        }
    };

    Ok(command)
}

/// Runs one command and returns the text to show.
pub async fn execute<P: PricingService>(
    session: &mut CompareSession<P>,
    command: Command,
    format: OutputFormat,
) -> Result<(String, Flow)> {
    let output = match command {
        Command::Search {
            part_number,
            volume,
        } => {
            let results = session.submit_search(&part_number, &volume).await?;
            if results.is_empty() {
                "No offers found.\n".to_string()
            } else {
                render_results(results, format)?
            }
        }
        Command::Results => render_results(session.results(), format)?,
        Command::Add(row) => {
            session.select_offer(row)?;
            render_cart(session.cart(), format)?
        }
        Command::Quantity { index, raw } => match session.edit_cart_quantity(index, &raw)? {
            CartChange::Ignored => format!("Ignored quantity '{}'.\n", raw),
            _ => render_cart(session.cart(), format)?,
        },
        Command::Remove(index) => {
            session.remove_cart_item(index)?;
            render_cart(session.cart(), format)?
        }
        Command::Clear => {
            session.clear_cart();
            "Cart is empty.\n".to_string()
        }
        Command::Cart => {
            if session.cart().is_empty() {
                "Cart is empty.\n".to_string()
            } else {
                render_cart(session.cart(), format)?
            }
        }
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok((String::new(), Flow::Stop)),
        Command::Empty => String::new(),
    };

    Ok((output, Flow::Continue))
}

/// Writes a failed command's message where the command's output would go.
pub(crate) async fn report<W: AsyncWrite + Unpin>(output: &mut W, e: &CompareError) -> Result<()> {
    tracing::debug!(error = %e, "Command failed");
    output
        .write_all(format!("❌ {}\n", e.user_friendly_message()).as_bytes())
        .await?;
    Ok(())
}

/// Reads commands until EOF or `quit`. A failing command is reported and the
/// loop carries on with the state from before it.
pub async fn run<P, R, W>(
    session: &mut CompareSession<P>,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<()>
where
    P: PricingService,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    output.write_all(b"> ").await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let result = match parse_command(&line) {
            Ok(command) => execute(session, command, format).await,
            Err(e) => Err(e),
        };

        match result {
            Ok((_, Flow::Stop)) => break,
            Ok((text, Flow::Continue)) => output.write_all(text.as_bytes()).await?,
            Err(e) => report(&mut output, &e).await?,
        }

        output.write_all(b"> ").await?;
        output.flush().await?;
    }

    output.flush().await?;
    Ok(())
}
