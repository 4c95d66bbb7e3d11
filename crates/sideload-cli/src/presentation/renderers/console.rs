use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::CommandResultViewModel;

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    /// Colors are only used when stdout is a terminal
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: std::io::stdout().is_terminal(),
        }
    }

    fn write<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
        W: Write,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.color && !result.is_complete() {
                writeln!(out, "{} {}", badge.icon(), badge.label.yellow().bold())?;
            } else if self.color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content)?;

        if !result.suggestions.is_empty() {
            if self.color {
                writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\n💡 Tips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{Guidance, StatusBadge};
    use serde::Serialize;
    use std::fmt;

    #[derive(Serialize)]
    struct Greeting {
        name: String,
    }

    impl fmt::Display for Greeting {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            writeln!(f, "Hello, {}", self.name)
        }
    }

    fn result() -> CommandResultViewModel<Greeting> {
        CommandResultViewModel::new(Greeting {
            name: "Ada".to_string(),
        })
        .with_badge(StatusBadge::success("Done"))
        .with_suggestion(Guidance::new("Try again").with_command("sideload list -"))
    }

    fn render(json_mode: bool) -> String {
        let renderer = ConsoleRenderer {
            json_mode,
            color: false,
        };
        let mut out = Vec::new();
        renderer.write(&mut out, &result()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_output() {
        insta::assert_snapshot!(render(false), @r"
        ✅ Done

        Hello, Ada

        💡 Tips:
          • Try again: sideload list -
        ");
    }

    #[test]
    fn test_json_output() {
        let value: serde_json::Value = serde_json::from_str(&render(true)).unwrap();
        assert_eq!(value["content"]["name"], "Ada");
        assert_eq!(value["badge"]["level"], "success");
        assert_eq!(value["suggestions"][0]["command"], "sideload list -");
    }
}
