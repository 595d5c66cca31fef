use std::io::{self, Write};
use std::time::Duration;

use crate::{Tone, Writer};

const RULE: &str = "=================================================";

/// Renders results and the cosmetic parts of a session. Decoration (emoji,
/// screen clearing) only appears on the colored palette.
#[derive(Debug, Default, Clone, Copy)]
pub struct OutputHandler;

impl OutputHandler {
    pub fn display_result<W: Write>(&self, missing: i64, out: &mut Writer<W>) -> io::Result<()> {
        let marker = if out.palette().is_colored() { "🎯 " } else { "" };
        out.paintln(
            Tone::Success,
            format_args!("{}The missing number is: {}", marker, missing),
        )
    }

    pub fn welcome<W: Write>(&self, out: &mut Writer<W>) -> io::Result<()> {
        let colored = out.palette().is_colored();
        out.clear_screen()?;
        out.println(format_args!("\n{}", RULE))?;
        if colored {
            out.paintln(Tone::Banner, " ˚.🎀༘⋆ Welcome to the Missing Number Game! ⋆🎀༘.˚")?;
        } else {
            out.println(" Welcome to the Missing Number Game!")?;
        }
        out.println(format_args!("{}\n", RULE))?;

        let bullet = if colored { "🌱" } else { "-" };
        out.println("Instructions:")?;
        out.println(format_args!(
            "{} Enter a sequence of numbers separated by commas.",
            bullet
        ))?;
        out.println(format_args!(
            "{} The numbers should be unique and within the range 0 to n.",
            bullet
        ))?;
        out.println(format_args!("{} One number will be missing, and I'll find it!\n", bullet))
    }

    pub fn farewell<W: Write>(
        &self,
        progress: Option<&ProgressBar>,
        out: &mut Writer<W>,
        sleep: impl FnMut(Duration),
    ) -> io::Result<()> {
        out.println("\nThank you for using the program. Exiting...")?;
        if let Some(progress) = progress {
            progress.render(out, sleep)?;
        }
        let wave = if out.palette().is_colored() { "👋" } else { "" };
        out.println(format_args!("\nGoodBye! See you again!{}", wave))
    }
}

/// Closing animation: `blocks` steps from 0% to 100%, `frame_delay` apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBar {
    pub blocks: usize,
    pub frame_delay: Duration,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            blocks: 20,
            frame_delay: Duration::from_millis(100),
        }
    }
}

impl ProgressBar {
    fn frame(&self, filled: usize) -> String {
        let percent = filled * 100 / self.blocks;
        format!(
            "\r[{}{}] {}% ",
            "#".repeat(filled),
            " ".repeat(self.blocks - filled),
            percent
        )
    }

    pub fn render<W: Write>(
        &self,
        out: &mut Writer<W>,
        mut sleep: impl FnMut(Duration),
    ) -> io::Result<()> {
        if self.blocks == 0 {
            return Ok(());
        }
        for filled in 0..=self.blocks {
            if filled > 0 {
                sleep(self.frame_delay);
            }
            out.paint(Tone::Success, self.frame(filled))?;
        }
        Ok(())
    }
}
