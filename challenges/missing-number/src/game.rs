use std::io::{self, Write};

use log::{debug, info};

use crate::finder::MissingNumberFinder;
use crate::input::InputHandler;
use crate::output::OutputHandler;
use crate::{Scanner, Writer};

/// One round: read a list, find the gap, show it.
pub struct Game<'a, F: MissingNumberFinder> {
    finder: &'a F,
    input: &'a InputHandler,
    output: &'a OutputHandler,
}

impl<'a, F: MissingNumberFinder> Game<'a, F> {
    pub fn new(finder: &'a F, input: &'a InputHandler, output: &'a OutputHandler) -> Self {
        Self { finder, input, output }
    }

    /// Returns the missing number, or `None` if the player abandoned the round.
    pub fn run<W: Write>(
        &self,
        scanner: &mut Scanner,
        out: &mut Writer<W>,
    ) -> io::Result<Option<i64>> {
        self.output.welcome(out)?;

        let Some(numbers) = self.input.read_numbers(scanner, out)? else {
            info!("round abandoned");
            return Ok(None);
        };

        let missing = self.finder.find_missing(numbers.as_slice());
        debug!("missing number in {:?} is {}", numbers.as_slice(), missing);
        self.output.display_result(missing, out)?;
        Ok(Some(missing))
    }
}
