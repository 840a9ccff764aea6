//! Console rendering of passages and search results.
//!
//! Output is plain text with optional ANSI styling. Styling is switched off for pipes and tests
//! so the text itself can be asserted on.

use crate::lookup::Passage;
use crate::search::Page;
use ratatui::crossterm::style::{StyledContent, Stylize};

const DIVIDER_WIDTH: usize = 40;

/// Footer printed under every passage.
pub const FOOTER: &str = "← back  ·  next →";

#[derive(Clone, Copy, Debug, Default)]
/// How passages are drawn.
pub struct RenderOptions {
    /// Emit ANSI colours and weights.
    pub color: bool,
    /// Number lines with superscript verse numbers instead of a sequential `01` column.
    pub superscript: bool,
}

/// Rewrite the decimal digits of `number` as superscript numerals.
#[must_use]
pub fn superscript(number: u32) -> String {
    number
        .to_string()
        .chars()
        .map(|digit| match digit {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            _ => '⁹',
        })
        .collect()
}

/// A verse prefixed with its superscript number, e.g. `"¹⁶ For God so loved"`.
#[must_use]
pub fn format_verse(number: u32, text: &str) -> String {
    format!("{} {text}", superscript(number))
}

fn paint<'a>(
    text: &'a str,
    color: bool,
    style: impl FnOnce(&'a str) -> StyledContent<&'a str>,
) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Render a passage: label, divider, numbered lines, navigation footer.
#[must_use]
pub fn render_passage(passage: &Passage, options: RenderOptions) -> String {
    let color = options.color;
    let divider = "─".repeat(DIVIDER_WIDTH);
    let mut lines = vec![
        paint(&passage.reference, color, |s| s.bold().blue()),
        paint(&divider, color, Stylize::dim),
    ];
    for (index, verse) in (1u32..).zip(&passage.verses) {
        if options.superscript {
            lines.push(format_verse(verse.number, &verse.text));
        } else {
            let number = format!("{index:02}");
            lines.push(format!("{} {}", paint(&number, color, Stylize::dim), verse.text));
        }
    }
    lines.push(String::new());
    lines.push(paint(FOOTER, color, Stylize::dim));
    lines.join("\n")
}

/// Render one page of keyword results grouped by section.
#[must_use]
pub fn render_page(page: &Page, color: bool) -> String {
    if page.total == 0 {
        return format!("No results found for '{}'.", page.query);
    }

    let mut lines = Vec::new();
    for group in &page.results {
        let heading = format!("{} ({})", group.book, group.count);
        lines.push(paint(&heading, color, |s| s.bold().yellow()));
        for hit in &group.verses {
            lines.push(format!("  {}  {}", paint(&hit.reference, color, Stylize::dim), hit.text));
        }
    }
    let mut summary = format!(
        "Page {} of {} · {} results",
        page.page, page.total_pages, page.total
    );
    if page.truncated {
        summary.push_str(" (truncated)");
    }
    lines.push(paint(&summary, color, Stylize::dim));
    lines.join("\n")
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
