use std::io::{self, Write};

use log::{debug, warn};

use crate::numbers::NumberList;
use crate::prompt::{Reply, confirm};
use crate::{Scanner, Tone, Writer};

pub const NUMBERS_PROMPT: &str = "Enter numbers separated by commas (example 3,0,1): ";
pub const RETRY_PROMPT: &str = "Try again? (y/n): ";

/// Reads number lists from the player, reprompting on bad input until the
/// list validates or the player gives up.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputHandler;

impl InputHandler {
    /// `None` means the player declined to retry (or input ended) and the
    /// round should not compute anything.
    pub fn read_numbers<W: Write>(
        &self,
        input: &mut Scanner,
        out: &mut Writer<W>,
    ) -> io::Result<Option<NumberList>> {
        loop {
            out.print(NUMBERS_PROMPT)?;
            let Some(line) = input.next_line()? else {
                warn!("input closed while waiting for numbers");
                out.println("")?;
                return Ok(None);
            };

            let err = match NumberList::parse(&line) {
                Ok(numbers) => {
                    debug!("accepted {} numbers", numbers.as_slice().len());
                    return Ok(Some(numbers));
                }
                Err(err) => err,
            };

            debug!("rejected {:?}: {:?}", line, err);
            out.paintln(Tone::Error, &err)?;
            match confirm(RETRY_PROMPT, input, out)? {
                Reply::Yes => continue,
                Reply::No | Reply::Closed => return Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    fn run(lines: &[&str]) -> (Option<NumberList>, String) {
        let mut input = scripted(lines);
        let mut out = buffer();
        let numbers = InputHandler.read_numbers(&mut input, &mut out).unwrap();
        (numbers, output(out))
    }

    #[test]
    fn test_valid_first_try() {
        let (numbers, text) = run(&["3,0,1"]);
        assert_eq!(Some(NumberList::parse("3,0,1").unwrap()), numbers);
        assert_eq!(NUMBERS_PROMPT, text);
    }

    #[test]
    fn test_each_error_kind_then_abort() {
        let cases = [
            ("a,b,c", "Error! Invalid input format. Write in the example format: 3,0,1"),
            ("1,1,2", "Error! Input contains duplicate values."),
            ("1,2,5", "Error! Numbers must be between 0 and 3"),
        ];
        for (line, message) in cases {
            let (numbers, text) = run(&[line, "n"]);
            assert_eq!(None, numbers, "{} should abort", line);
            assert!(text.contains(message), "{} should report {:?}", line, message);
            assert!(text.contains(RETRY_PROMPT));
        }
    }

    #[test]
    fn test_retry_until_valid() {
        let (numbers, text) = run(&["a,b,c", "y", "1,1,2", "Y", "1,2,5", "y", "0"]);
        assert_eq!(Some(NumberList::parse("0").unwrap()), numbers);
        assert_eq!(4, text.matches(NUMBERS_PROMPT).count());
        assert_eq!(3, text.matches(RETRY_PROMPT).count());
    }

    #[test]
    fn test_invalid_retry_answer_is_reprompted() {
        let (numbers, text) = run(&["x", "sure", "y", "1,0"]);
        assert_eq!(Some(NumberList::parse("1,0").unwrap()), numbers);
        assert_eq!(2, text.matches(RETRY_PROMPT).count());
        assert!(text.contains(crate::prompt::INVALID_ANSWER));
    }

    #[test]
    fn test_input_closed() {
        assert_eq!(None, run(&[]).0);
        assert_eq!(None, run(&["x"]).0);
    }
}
