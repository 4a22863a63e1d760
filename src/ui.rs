pub mod screen;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::kana::{KanaTable, Script};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        screen::current_screen(self.state()).render(self, area, buf);
    }
}

pub(crate) fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub(crate) fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

pub(crate) fn italic() -> Style {
    Style::default().add_modifier(Modifier::ITALIC)
}

pub(crate) fn green_bold() -> Style {
    bold().fg(Color::Green)
}

pub(crate) fn red_bold() -> Style {
    bold().fg(Color::Red)
}

pub(crate) fn magenta() -> Style {
    Style::default().fg(Color::Magenta)
}

/// Pads `text` with spaces up to `width` terminal columns. Kana are two
/// columns wide, so `str::len` and `format!` widths do not line up.
pub fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Plain-text chart of the table: one line per row, hiragana on the left and
/// katakana on the right, each glyph followed by its first spelling.
pub fn format_table(table: &KanaTable) -> String {
    let cell = |glyph: &str| {
        let romaji = table
            .romaji(glyph)
            .and_then(|spellings| spellings.first().copied())
            .unwrap_or_default();
        format!("{glyph} {romaji}")
    };

    let cell_width = table
        .rows()
        .iter()
        .flat_map(|row| row.hiragana.iter().chain(row.katakana.iter()).copied())
        .map(|glyph| cell(glyph).width())
        .max()
        .unwrap_or(0)
        + 2;
    let columns = table.rows().iter().map(|row| row.hiragana.len()).max().unwrap_or(0);
    let label_width = table.rows().iter().map(|row| row.romaji.len()).max().unwrap_or(0) + "-row  ".len();

    table
        .rows()
        .iter()
        .map(|row| {
            let cells = |script: Script| {
                row.glyphs(script)
                    .iter()
                    .copied()
                    .map(|glyph| pad(&cell(glyph), cell_width))
                    .join("")
            };
            let line = format!(
                "{}{}| {}",
                pad(&format!("{}-row", row.romaji), label_width),
                pad(&cells(Script::Hiragana), columns * cell_width),
                cells(Script::Katakana)
            );
            line.trim_end().to_string()
        })
        .join("\n")
}
