//! Printable document model
//!
//! A [`PrintDocument`] is a list of fixed-width lines that can be rendered
//! three ways: ESC/POS bytes for thermal printers, a standalone HTML page for
//! the spool printer, and plain text for previews and tests. Business code
//! builds the document; print services decide how to deliver it.

use crate::encoding::{text_width, truncate_width, wrap_width};
use crate::escpos::EscPosBuilder;

/// Horizontal alignment of a text line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One line of a print document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintLine {
    Text {
        text: String,
        align: Align,
        bold: bool,
        large: bool,
    },
    /// Label on the left, value flush right
    Pair {
        left: String,
        right: String,
        bold: bool,
    },
    Separator(char),
    Blank,
}

/// Receipt-style document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
    title: String,
    width: usize,
    lines: Vec<PrintLine>,
}

impl PrintDocument {
    pub fn new(title: impl Into<String>, width: usize) -> Self {
        Self {
            title: title.into(),
            width,
            lines: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn lines(&self) -> &[PrintLine] {
        &self.lines
    }

    // === Building ===

    /// Centered, bold, double-size line
    pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.push_text(text, Align::Center, true, true)
    }

    pub fn centered(&mut self, text: impl Into<String>) -> &mut Self {
        self.push_text(text, Align::Center, false, false)
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.push_text(text, Align::Left, false, false)
    }

    pub fn bold_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.push_text(text, Align::Left, true, false)
    }

    pub fn push_text(
        &mut self,
        text: impl Into<String>,
        align: Align,
        bold: bool,
        large: bool,
    ) -> &mut Self {
        self.lines.push(PrintLine::Text {
            text: text.into(),
            align,
            bold,
            large,
        });
        self
    }

    pub fn pair(&mut self, left: impl Into<String>, right: impl Into<String>) -> &mut Self {
        self.lines.push(PrintLine::Pair {
            left: left.into(),
            right: right.into(),
            bold: false,
        });
        self
    }

    pub fn pair_bold(&mut self, left: impl Into<String>, right: impl Into<String>) -> &mut Self {
        self.lines.push(PrintLine::Pair {
            left: left.into(),
            right: right.into(),
            bold: true,
        });
        self
    }

    pub fn sep(&mut self, c: char) -> &mut Self {
        self.lines.push(PrintLine::Separator(c));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(PrintLine::Blank);
        self
    }

    // === Rendering ===

    /// ESC/POS bytes, code page converted, ending with a feed and cut
    pub fn to_escpos(&self) -> Vec<u8> {
        let mut b = EscPosBuilder::new(self.width);
        for line in &self.lines {
            match line {
                PrintLine::Text {
                    text,
                    align,
                    bold,
                    large,
                } => {
                    b.align(*align).bold(*bold).large(*large);
                    b.line(text);
                    if *large {
                        b.large(false);
                    }
                    if *bold {
                        b.bold(false);
                    }
                    b.align(Align::Left);
                }
                PrintLine::Pair { left, right, bold } => {
                    b.bold(*bold).pair(left, right);
                    if *bold {
                        b.bold(false);
                    }
                }
                PrintLine::Separator(c) => {
                    b.sep(*c);
                }
                PrintLine::Blank => {
                    b.newline();
                }
            }
        }
        b.cut(4);
        b.build()
    }

    /// Plain fixed-width text, one output line per printed row
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                PrintLine::Text { text, align, .. } => {
                    for row in wrap_width(text, self.width) {
                        out.push_str(align_row(&row, *align, self.width).trim_end());
                        out.push('\n');
                    }
                }
                PrintLine::Pair { left, right, .. } => {
                    out.push_str(&layout_pair(left, right, self.width));
                    out.push('\n');
                }
                PrintLine::Separator(c) => {
                    out.push_str(&c.to_string().repeat(self.width));
                    out.push('\n');
                }
                PrintLine::Blank => out.push('\n'),
            }
        }
        out
    }

    /// Standalone HTML page sized for a receipt printer
    pub fn to_html(&self) -> String {
        let mut body = String::new();
        for line in &self.lines {
            match line {
                PrintLine::Text {
                    text,
                    align,
                    bold,
                    large,
                } => {
                    let mut class = match align {
                        Align::Left => "l".to_string(),
                        Align::Center => "c".to_string(),
                        Align::Right => "r".to_string(),
                    };
                    if *bold {
                        class.push_str(" b");
                    }
                    if *large {
                        class.push_str(" xl");
                    }
                    body.push_str(&format!(
                        "<div class=\"{}\">{}</div>\n",
                        class,
                        escape_html(text)
                    ));
                }
                PrintLine::Pair { left, right, bold } => {
                    body.push_str(&format!(
                        "<div class=\"row{}\"><span>{}</span><span>{}</span></div>\n",
                        if *bold { " b" } else { "" },
                        escape_html(left),
                        escape_html(right)
                    ));
                }
                PrintLine::Separator(c) => {
                    body.push_str(&format!(
                        "<div class=\"sep\">{}</div>\n",
                        escape_html(&c.to_string().repeat(self.width))
                    ));
                }
                PrintLine::Blank => body.push_str("<div>&nbsp;</div>\n"),
            }
        }

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{css}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
            title = escape_html(&self.title),
            css = HTML_STYLE,
            body = body
        )
    }
}

const HTML_STYLE: &str = "@page { size: 80mm auto; margin: 4mm; }
body { width: 72mm; margin: 0; font-family: 'Courier New', monospace; font-size: 12px; }
.l { text-align: left; }
.c { text-align: center; }
.r { text-align: right; }
.b { font-weight: bold; }
.xl { font-size: 18px; }
.row { display: flex; justify-content: space-between; }
.sep { overflow: hidden; white-space: nowrap; }
";

/// Lay out a label/value pair on one row, like [`EscPosBuilder::pair`]
pub fn layout_pair(left: &str, right: &str, width: usize) -> String {
    let lw = text_width(left);
    let rw = text_width(right);
    if lw + rw >= width {
        format!("{} {}", left, right)
    } else {
        format!("{}{}{}", left, " ".repeat(width - lw - rw), right)
    }
}

fn align_row(row: &str, align: Align, width: usize) -> String {
    let row = truncate_width(row, width);
    let free = width.saturating_sub(text_width(&row));
    match align {
        Align::Left => row,
        Align::Center => format!("{}{}", " ".repeat(free / 2), row),
        Align::Right => format!("{}{}", " ".repeat(free), row),
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
