use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::str::FromStr;

/// Whitespace-delimited token reader over line-oriented input.
/// A field is always exactly one token; tokens may share a line.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next token parsed as `T`. The token is consumed even when it fails to parse.
    pub fn next_parsed<T: FromStr>(&mut self) -> io::Result<Option<Result<T, String>>> {
        Ok(self
            .next_token()?
            .map(|token| token.parse::<T>().map_err(|_| token)))
    }
}
