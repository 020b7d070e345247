//! Clash rule-list parser.

use std::io::{BufRead, BufReader, Read};

use crate::{Result, RuleLine};

/// Parser for the Clash `.list` rule dialect.
pub struct ListParser;

impl ListParser {
    /// Parse rule lines from a reader.
    ///
    /// Blank lines and full-line `#` comments are skipped. Each remaining
    /// line is split on `,` into at most three fields; missing trailing
    /// fields become empty strings. Malformed rows and unrecognized tags
    /// are not errors here.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<RuleLine>> {
        let mut rules = Vec::new();
        let buf_reader = BufReader::new(reader);

        for line in buf_reader.lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Fixed-width split: exactly three fields, padded with empties.
            let mut parts = line.splitn(3, ',');
            let style = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default();
            let option = parts.next().unwrap_or_default();

            rules.push(RuleLine::new(style, value, option));
        }

        Ok(rules)
    }
}
