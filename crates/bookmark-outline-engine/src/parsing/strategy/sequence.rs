use std::sync::OnceLock;

use regex::Regex;

use super::{format_error, page_number};
use crate::error::FormatError;
use crate::models::LinearEntry;
use crate::parsing::preprocess::CleanLine;

/// Separator between a sequence marker and the rest of the title.
pub const SEQ_SEPARATOR: &str = "  ";

/// Level of a dotted sequence: `""` and `"3"` are level 1, `"1.2.5"` is level 3.
pub fn level_of_seq(seq: &str) -> usize {
    1 + seq.matches('.').count()
}

fn compose_title(marker: &str, title: &str) -> String {
    format!("{marker}{SEQ_SEPARATOR}{title}").trim().to_string()
}

/// `1.2.5  Title  67` style lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSequenceParser;

impl StandardSequenceParser {
    pub fn parse_line(
        &self,
        line: &CleanLine<'_>,
        offset: i32,
    ) -> Result<LinearEntry, FormatError> {
        static STANDARD_LINE: OnceLock<Regex> = OnceLock::new();
        let pattern = STANDARD_LINE.get_or_init(|| {
            Regex::new(
                r"^\s*(?P<seq>[0-9]+(?:\.[0-9]+)*\.?)?\s*(?P<title>.*?)[\s.]*(?P<page>-?[0-9]+)?\s*$",
            )
            .expect("Invalid standard sequence regex")
        });

        let caps = pattern
            .captures(&line.text)
            .ok_or_else(|| format_error(line))?;
        let marker = caps.name("seq").map_or("", |m| m.as_str());
        let seq = marker.strip_suffix('.').unwrap_or(marker);

        Ok(LinearEntry {
            title: compose_title(seq, &caps["title"]),
            page: page_number(&caps, offset, line)?,
            level: level_of_seq(seq),
            line_number: line.line_number,
        })
    }
}

/// Lines numbered with Chinese units (`第一章`, `第2节`, `第三部分`) or with
/// plain dotted sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseSequenceParser;

impl ChineseSequenceParser {
    pub fn parse_line(
        &self,
        line: &CleanLine<'_>,
        offset: i32,
    ) -> Result<LinearEntry, FormatError> {
        static CHINESE_LINE: OnceLock<Regex> = OnceLock::new();
        let pattern = CHINESE_LINE.get_or_init(|| {
            Regex::new(
                r"^\s*(?P<seq>\S?\s?[零一二三四五六七八九十百千0-9]+\s?(?:篇|章|节|部分)|[0-9.]+)?\s*(?P<title>.*?)[\s.]*(?P<page>-?[0-9]+)?\s*$",
            )
            .expect("Invalid chinese sequence regex")
        });

        let caps = pattern
            .captures(&line.text)
            .ok_or_else(|| format_error(line))?;
        let marker: String = caps
            .name("seq")
            .map_or("", |m| m.as_str())
            .chars()
            .filter(|c| *c != ' ')
            .collect();
        let seq = standardize_seq(&marker);

        Ok(LinearEntry {
            title: compose_title(&marker, &caps["title"]),
            page: page_number(&caps, offset, line)?,
            level: level_of_seq(seq),
            line_number: line.line_number,
        })
    }
}

/// The first run of digits and dots inside a raw marker, without a trailing
/// dot: `第1章` gives `1`, `第一章` gives `""`.
pub fn standardize_seq(marker: &str) -> &str {
    static DOTTED_RUN: OnceLock<Regex> = OnceLock::new();
    let pattern =
        DOTTED_RUN.get_or_init(|| Regex::new(r"[0-9.]+").expect("Invalid dotted run regex"));

    let seq = pattern.find(marker).map_or("", |m| m.as_str());
    seq.strip_suffix('.').unwrap_or(seq)
}
