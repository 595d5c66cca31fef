use std::io::{self, Write};

use log::{debug, warn};

use crate::{Scanner, Tone, Writer};

pub const INVALID_ANSWER: &str = "Invalid input. Write y or n.";

/// One reading of a yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    Continue,
    Stop,
    Invalid,
}

impl RetryDecision {
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" => RetryDecision::Continue,
            "n" => RetryDecision::Stop,
            _ => RetryDecision::Invalid,
        }
    }
}

/// The settled outcome of a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Yes,
    No,
    /// Input ended before a valid answer arrived.
    Closed,
}

/// Asks `question` until the answer is `y` or `n`.
pub fn confirm<W: Write>(
    question: &str,
    input: &mut Scanner,
    out: &mut Writer<W>,
) -> io::Result<Reply> {
    loop {
        out.paint(Tone::Prompt, question)?;
        let Some(answer) = input.next_line()? else {
            warn!("input closed while waiting for an answer to {:?}", question.trim());
            out.println("")?;
            return Ok(Reply::Closed);
        };

        match RetryDecision::parse(&answer) {
            RetryDecision::Continue => return Ok(Reply::Yes),
            RetryDecision::Stop => return Ok(Reply::No),
            RetryDecision::Invalid => {
                debug!("rejected answer {:?}", answer);
                out.paintln(Tone::Error, INVALID_ANSWER)?;
            }
        }
    }
}
