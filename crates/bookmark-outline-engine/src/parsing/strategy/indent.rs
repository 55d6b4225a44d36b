use std::sync::OnceLock;

use regex::Regex;

use super::{format_error, page_number};
use crate::error::FormatError;
use crate::models::LinearEntry;
use crate::parsing::preprocess::CleanLine;

/// Derives levels from leading whitespace.
///
/// The first indented line of a document fixes the indent unit; every later
/// line is one level deeper per leading repetition of that unit.
#[derive(Debug, Default)]
pub struct IndentParser {
    unit: Option<String>,
}

impl IndentParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// The learned indent unit, if an indented line has been seen.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn parse_line(
        &mut self,
        line: &CleanLine<'_>,
        offset: i32,
    ) -> Result<LinearEntry, FormatError> {
        static INDENT_LINE: OnceLock<Regex> = OnceLock::new();
        let pattern = INDENT_LINE.get_or_init(|| {
            Regex::new(r"^(?P<indent>\s*)(?P<title>.*?)[\s.]*(?P<page>-?[0-9]+)?\s*$")
                .expect("Invalid indent line regex")
        });

        let caps = pattern
            .captures(&line.text)
            .ok_or_else(|| format_error(line))?;
        let indent = caps.name("indent").map_or("", |m| m.as_str());
        self.learn(indent);

        Ok(LinearEntry {
            title: caps["title"].trim().to_string(),
            page: page_number(&caps, offset, line)?,
            level: self.level(indent),
            line_number: line.line_number,
        })
    }

    fn learn(&mut self, indent: &str) {
        if self.unit.is_none() && !indent.is_empty() {
            log::debug!("learned indent unit of {} characters", indent.chars().count());
            self.unit = Some(indent.to_string());
        }
    }

    /// 1 plus the number of indent units at the front of `indent`.
    pub fn level(&self, indent: &str) -> usize {
        let Some(unit) = self.unit.as_deref().filter(|u| !u.is_empty()) else {
            return 1;
        };
        let mut rest = indent;
        let mut level = 1;
        while let Some(stripped) = rest.strip_prefix(unit) {
            rest = stripped;
            level += 1;
        }
        level
    }
}
