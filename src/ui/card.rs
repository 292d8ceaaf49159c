use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{self, borders, borders_ascii};

/// A bordered block of lines with an optional title row.
#[derive(Debug, Default, Clone)]
pub struct Card {
    title: Option<String>,
    content: Vec<String>,
}

impl Card {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut lines: Vec<Cow<'_, str>> = Vec::new();
        if let Some(title) = &self.title {
            if supports_color {
                lines.push(Cow::Owned(format!("{}", title.as_str().bold())));
            } else {
                lines.push(Cow::Borrowed(title.as_str()));
            }
        }
        lines.extend(self.content.iter().map(|l| Cow::Borrowed(l.as_str())));

        // one space of padding on each side
        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            + 2;

        let (tl, tr, bl, br, h, v) = if supports_unicode {
            (
                borders::TOP_LEFT,
                borders::TOP_RIGHT,
                borders::BOTTOM_LEFT,
                borders::BOTTOM_RIGHT,
                borders::HORIZONTAL,
                borders::VERTICAL,
            )
        } else {
            (
                borders_ascii::TOP_LEFT,
                borders_ascii::TOP_RIGHT,
                borders_ascii::BOTTOM_LEFT,
                borders_ascii::BOTTOM_RIGHT,
                borders_ascii::HORIZONTAL,
                borders_ascii::VERTICAL,
            )
        };

        let mut out = String::new();
        let top = format!("{}{}{}", tl, h.repeat(inner_width), tr);
        out.push_str(&color_border(&top, supports_color));
        out.push('\n');

        for line in &lines {
            let pad = inner_width - 1 - visible_width(line);
            out.push_str(&color_border(v, supports_color));
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(pad));
            out.push_str(&color_border(v, supports_color));
            out.push('\n');
        }

        let bottom = format!("{}{}{}", bl, h.repeat(inner_width), br);
        out.push_str(&color_border(&bottom, supports_color));
        out.push('\n');
        out
    }
}

fn color_border(s: &str, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }
    format!("{}", s.with(theme::colors::INFO))
}

pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip ANSI escape sequence: ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}
