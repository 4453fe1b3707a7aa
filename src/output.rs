//! Result formatting: match listings, highlighted text, report files

use crate::search::ResultMap;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::ops::Range;
use std::path::Path;

#[cfg(feature = "color")]
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// When to colour terminal output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

#[cfg(feature = "color")]
impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

/// Background colours assigned to matched substrings, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Red,
    Yellow,
    Green,
    Blue,
    Cyan,
    Magenta,
}

pub const PALETTE: [Highlight; 6] = [
    Highlight::Red,
    Highlight::Yellow,
    Highlight::Green,
    Highlight::Blue,
    Highlight::Cyan,
    Highlight::Magenta,
];

#[cfg(feature = "color")]
impl From<Highlight> for Color {
    fn from(highlight: Highlight) -> Self {
        match highlight {
            Highlight::Red => Color::Red,
            Highlight::Yellow => Color::Yellow,
            Highlight::Green => Color::Green,
            Highlight::Blue => Color::Blue,
            Highlight::Cyan => Color::Cyan,
            Highlight::Magenta => Color::Magenta,
        }
    }
}

/// A run of characters sharing one highlight (or none)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Character range in the text
    pub chars: Range<usize>,
    pub highlight: Option<Highlight>,
}

/// Split `text` into highlighted and plain runs.
///
/// Substrings are painted longest first, each with the next palette colour,
/// so shorter matches nested inside longer ones stay visible. Offsets past
/// the end of the text are ignored.
pub fn highlight_spans(text: &str, results: &ResultMap) -> Vec<Span> {
    let char_count = text.chars().count();
    let mut colors: Vec<Option<Highlight>> = vec![None; char_count];

    let mut by_length: Vec<(&String, &Vec<usize>)> = results.iter().collect();
    by_length.sort_by_key(|(sub, _)| std::cmp::Reverse(sub.chars().count()));

    for (i, (sub, offsets)) in by_length.into_iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let len = sub.chars().count();
        for &start in offsets {
            let end = (start + len).min(char_count);
            for slot in colors.iter_mut().take(end).skip(start) {
                *slot = Some(color);
            }
        }
    }

    let mut spans: Vec<Span> = Vec::new();
    for (idx, color) in colors.into_iter().enumerate() {
        match spans.last_mut() {
            Some(last) if last.highlight == color => last.chars.end = idx + 1,
            _ => spans.push(Span {
                chars: idx..idx + 1,
                highlight: color,
            }),
        }
    }
    spans
}

/// One `substring: [offsets]` line per match, in map order
pub fn format_matches(results: &ResultMap) -> String {
    let mut out = String::new();
    for (sub, offsets) in results {
        let _ = writeln!(out, "{}: {:?}", sub, offsets);
    }
    out
}

/// Write the text with highlighted spans
#[cfg(feature = "color")]
pub fn write_highlighted<W: WriteColor>(out: &mut W, text: &str, spans: &[Span]) -> io::Result<()> {
    let chars: Vec<char> = text.chars().collect();

    for span in spans {
        let piece: String = chars[span.chars.clone()].iter().collect();
        match span.highlight {
            Some(highlight) => {
                out.set_color(
                    ColorSpec::new()
                        .set_bg(Some(highlight.into()))
                        .set_fg(Some(Color::Black)),
                )?;
                write!(out, "{}", piece)?;
                out.reset()?;
            }
            None => write!(out, "{}", piece)?,
        }
    }

    writeln!(out)
}

/// Print the match listing and the highlighted text to stdout
#[cfg(feature = "color")]
pub fn print_report(text: &str, results: &ResultMap, color: ColorMode) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color.into());

    if results.is_empty() {
        writeln!(stdout, "No matches")?;
        return Ok(());
    }

    writeln!(stdout, "Matches:")?;
    write!(stdout, "{}", format_matches(results))?;
    writeln!(stdout)?;

    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(stdout, "Highlighted text:")?;
    stdout.reset()?;

    let spans = highlight_spans(text, results);
    write_highlighted(&mut stdout, text, &spans)
}

/// Print the match listing and the raw text when built without colour support
#[cfg(not(feature = "color"))]
pub fn print_report(text: &str, results: &ResultMap, _color: ColorMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    if results.is_empty() {
        writeln!(stdout, "No matches")?;
        return Ok(());
    }

    writeln!(stdout, "Matches:")?;
    write!(stdout, "{}", format_matches(results))?;
    writeln!(stdout)?;
    writeln!(stdout, "Text:")?;
    writeln!(stdout, "{}", text)
}

/// Plain-text report for `--out-file`
pub fn report(query: &str, results: &ResultMap) -> String {
    let mut out = format!("Found by word '{}'\n", query);
    out.push_str(&format_matches(results));
    out
}

/// Write the plain-text report to `path`
pub fn write_report_file(path: &Path, query: &str, results: &ResultMap) -> Result<()> {
    fs::write(path, report(query, results))
        .with_context(|| format!("Failed to write report to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(pairs: &[(&str, &[usize])]) -> ResultMap {
        pairs
            .iter()
            .map(|(word, offsets)| (word.to_string(), offsets.to_vec()))
            .collect()
    }

    #[test]
    fn test_highlight_spans_single_match() {
        let spans = highlight_spans("say hello", &results(&[("hello", &[4])]));
        assert_eq!(
            spans,
            vec![
                Span { chars: 0..4, highlight: None },
                Span { chars: 4..9, highlight: Some(Highlight::Red) },
            ]
        );
    }

    #[test]
    fn test_highlight_spans_shorter_paints_over_longer() {
        // "hello" is longest and gets red; "ell" is painted yellow on top
        let spans = highlight_spans("hello", &results(&[("ell", &[1]), ("hello", &[0])]));
        assert_eq!(
            spans,
            vec![
                Span { chars: 0..1, highlight: Some(Highlight::Red) },
                Span { chars: 1..4, highlight: Some(Highlight::Yellow) },
                Span { chars: 4..5, highlight: Some(Highlight::Red) },
            ]
        );
    }

    #[test]
    fn test_highlight_spans_unicode_and_bounds() {
        let spans = highlight_spans("ёж", &results(&[("жук", &[1]), ("x", &[10])]));
        assert_eq!(
            spans,
            vec![
                Span { chars: 0..1, highlight: None },
                Span { chars: 1..2, highlight: Some(Highlight::Red) },
            ]
        );
    }

    #[test]
    fn test_highlight_spans_no_results() {
        let spans = highlight_spans("abc", &ResultMap::new());
        assert_eq!(spans, vec![Span { chars: 0..3, highlight: None }]);
        assert!(highlight_spans("", &ResultMap::new()).is_empty());
    }

    #[test]
    fn test_palette_cycles() {
        let words = ["aaaaaaa", "bbbbbb", "ccccc", "dddd", "eee", "ff", "g"];
        let text = words.join(" ");
        let mut map = ResultMap::new();
        let mut offset = 0;
        for word in words {
            map.insert(word.to_string(), vec![offset]);
            offset += word.len() + 1;
        }

        let colored: Vec<_> = highlight_spans(&text, &map)
            .into_iter()
            .filter_map(|span| span.highlight)
            .collect();
        assert_eq!(colored.len(), 7);
        assert_eq!(colored[0], Highlight::Red);
        assert_eq!(colored[5], Highlight::Magenta);
        assert_eq!(colored[6], Highlight::Red);
    }

    #[test]
    fn test_format_matches() {
        let out = format_matches(&results(&[("cat", &[4]), ("CAT", &[0])]));
        assert_eq!(out, "CAT: [0]\ncat: [4]\n");
    }

    #[test]
    fn test_report() {
        let out = report("cat", &results(&[("cat", &[0, 4])]));
        assert_eq!(out, "Found by word 'cat'\ncat: [0, 4]\n");
    }

    #[test]
    fn test_write_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        write_report_file(&path, "cat", &results(&[("cat", &[0])])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Found by word 'cat'\ncat: [0]\n");
    }

    #[cfg(feature = "color")]
    #[test]
    fn test_write_highlighted_plain_buffer() {
        let mut buffer = termcolor::Buffer::no_color();
        let spans = highlight_spans("say hello", &results(&[("hello", &[4])]));
        write_highlighted(&mut buffer, "say hello", &spans).unwrap();
        assert_eq!(String::from_utf8(buffer.into_inner()).unwrap(), "say hello\n");
    }

    #[cfg(feature = "color")]
    #[test]
    fn test_write_highlighted_ansi_buffer() {
        let mut buffer = termcolor::Buffer::ansi();
        let spans = highlight_spans("hi", &results(&[("hi", &[0])]));
        write_highlighted(&mut buffer, "hi", &spans).unwrap();
        let out = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(out.contains("\x1b["));
        assert!(out.contains("hi"));
    }
}
