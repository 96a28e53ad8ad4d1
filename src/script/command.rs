//! Script commands and their textual form.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};

/// One step of a script.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Move to the next item (`next`)
    Next,
    /// Move to the previous item (`previous` or `prev`)
    Previous,
    /// Jump to the first item (`first`)
    First,
    /// Jump to the last loaded item (`last`)
    Last,
    /// Re-validate the current item (`current`)
    Current,
    /// Reveal the current item again (`show`)
    Show,
    /// Put the markers back on the current item (`shine`)
    Shine,
    /// Take the markers off the current item (`dull`)
    Dull,
    /// Destroy the scroller (`destroy`)
    Destroy,

    /// Append an item (`push <id> <extent>`)
    Push { id: String, extent: f64 },
    /// Remove an item (`remove <id>`)
    Remove { id: String },
    /// Change an item's extent (`extent <id> <value>`)
    Extent { id: String, extent: f64 },
    /// Replace every item with a new object under a new id (`rebuild`)
    Rebuild,
    /// Remove every item (`clear`)
    Clear,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().ok_or_else(|| anyhow!("empty command"))?;
        let args: Vec<&str> = words.collect();

        let expect_args = |count: usize| -> anyhow::Result<()> {
            if args.len() != count {
                bail!(
                    "'{}' takes {} argument(s), got {}",
                    name,
                    count,
                    args.len()
                );
            }
            Ok(())
        };
        let parse_extent = |text: &str| -> anyhow::Result<f64> {
            let extent: f64 = text
                .parse()
                .with_context(|| format!("invalid extent '{}'", text))?;
            if !extent.is_finite() || extent < 0.0 {
                bail!("extent must be a non-negative number, got '{}'", text);
            }
            Ok(extent)
        };

        let command = match name {
            "next" => Command::Next,
            "previous" | "prev" => Command::Previous,
            "first" => Command::First,
            "last" => Command::Last,
            "current" => Command::Current,
            "show" => Command::Show,
            "shine" => Command::Shine,
            "dull" => Command::Dull,
            "destroy" => Command::Destroy,
            "rebuild" => Command::Rebuild,
            "clear" => Command::Clear,
            "push" => {
                expect_args(2)?;
                Command::Push {
                    id: args[0].to_string(),
                    extent: parse_extent(args[1])?,
                }
            }
            "remove" => {
                expect_args(1)?;
                Command::Remove {
                    id: args[0].to_string(),
                }
            }
            "extent" => {
                expect_args(2)?;
                Command::Extent {
                    id: args[0].to_string(),
                    extent: parse_extent(args[1])?,
                }
            }
            other => bail!("unknown command '{}'", other),
        };

        if !matches!(
            command,
            Command::Push { .. } | Command::Remove { .. } | Command::Extent { .. }
        ) {
            expect_args(0)?;
        }
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Next => write!(f, "next"),
            Command::Previous => write!(f, "previous"),
            Command::First => write!(f, "first"),
            Command::Last => write!(f, "last"),
            Command::Current => write!(f, "current"),
            Command::Show => write!(f, "show"),
            Command::Shine => write!(f, "shine"),
            Command::Dull => write!(f, "dull"),
            Command::Destroy => write!(f, "destroy"),
            Command::Push { id, extent } => write!(f, "push {} {}", id, extent),
            Command::Remove { id } => write!(f, "remove {}", id),
            Command::Extent { id, extent } => write!(f, "extent {} {}", id, extent),
            Command::Rebuild => write!(f, "rebuild"),
            Command::Clear => write!(f, "clear"),
        }
    }
}
