//! Left-to-right scanner for `?`/`&`-delimited `key=value` pairs.
//!
//! Grammar of one pair: one or more `?`/`&`, a key of one or more bytes that
//! are neither `=` nor `&`, a `=`, then a value of zero or more bytes up to the
//! next `&` or end of input. Matching is leftmost-first and greedy, and a
//! failed match never rescans bytes it already consumed, so a whole scan is
//! linear in the input length.

use std::ops::Range;

fn is_delimiter(b: u8) -> bool {
    b == b'?' || b == b'&'
}

/// Iterator over the raw `(key, value)` pairs of a URL, in input order.
///
/// Nothing is decoded: `%20` and `+` come back exactly as written. Keys may
/// repeat; callers that want overwrite semantics should keep the last one.
#[derive(Debug, Clone)]
pub struct QueryPairs<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> QueryPairs<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for QueryPairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() {
            if !is_delimiter(bytes[self.pos]) {
                self.pos += 1;
                continue;
            }
            match match_at(bytes, self.pos) {
                Ok((key, value)) => {
                    self.pos = value.end;
                    // All boundaries sit next to ASCII delimiters, so slicing is char-safe.
                    return Some((&self.input[key], &self.input[value]));
                }
                Err(resume) => self.pos = resume,
            }
        }
        None
    }
}

/// Tries to match one pair starting at the delimiter at `start`.
///
/// On failure returns the position to resume from; every start between
/// `start` and that position would fail the same way.
fn match_at(bytes: &[u8], start: usize) -> Result<(Range<usize>, Range<usize>), usize> {
    let mut run_end = start;
    while run_end < bytes.len() && is_delimiter(bytes[run_end]) {
        run_end += 1;
    }

    let mut key_end = run_end;
    while key_end < bytes.len() && bytes[key_end] != b'=' && bytes[key_end] != b'&' {
        key_end += 1;
    }

    if key_end > run_end {
        if key_end < bytes.len() && bytes[key_end] == b'=' {
            return Ok((run_end..key_end, value_range(bytes, key_end + 1)));
        }
        return Err(key_end);
    }

    // Empty key with `=` right after the delimiter run: a trailing `?` in a
    // run of two or more can act as a one-byte key (`??=1` binds `?`).
    if key_end < bytes.len() && run_end - start >= 2 && bytes[run_end - 1] == b'?' {
        return Ok((run_end - 1..run_end, value_range(bytes, run_end + 1)));
    }
    Err(run_end)
}

fn value_range(bytes: &[u8], from: usize) -> Range<usize> {
    let end = bytes[from..]
        .iter()
        .position(|&b| b == b'&')
        .map_or(bytes.len(), |i| from + i);
    from..end
}
