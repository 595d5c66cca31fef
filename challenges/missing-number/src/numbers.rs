use std::collections::HashSet;

use thiserror::Error;

/// Why a line of user input was rejected. The display text is what the player sees.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Error! Invalid input format. Write in the example format: 3,0,1")]
    Parse { token: String },
    #[error("Error! Input contains duplicate values.")]
    Duplicate { value: i64 },
    #[error("Error! Numbers must be between 0 and {max}")]
    Range { value: i64, max: i64 },
}

/// A validated list: unique values, each within `[0, n]` where `n` is the list length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberList(Vec<i64>);

impl NumberList {
    /// Parses a comma separated line. Tokens are parsed first, then checked
    /// for duplicates, then for range, so the reported error is the first
    /// stage that fails.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let values = line
            .split(',')
            .map(|token| {
                let token = token.trim();
                token.parse::<i64>().map_err(|_| InputError::Parse {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<i64>, InputError>>()?;

        let mut seen = HashSet::with_capacity(values.len());
        if let Some(&value) = values.iter().find(|&&v| !seen.insert(v)) {
            return Err(InputError::Duplicate { value });
        }

        // inclusive: the full set 0..=n has n + 1 members, one of them missing
        let max = values.len() as i64;
        if let Some(&value) = values.iter().find(|&&v| !(0..=max).contains(&v)) {
            return Err(InputError::Range { value, max });
        }

        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}
