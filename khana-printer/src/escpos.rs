//! ESC/POS byte stream for the daily summary receipt
//!
//! Only the handful of commands a text receipt needs: alignment, bold,
//! double size and the final feed-and-cut.

use crate::document::{Align, layout_pair};
use crate::encoding::convert_to_codepage;

const ESC: u8 = 0x1B;
const GS: u8 = 0x1D;

/// ESC @
const INIT: [u8; 2] = [ESC, b'@'];
/// GS V 66 n: feed n lines then full cut
const CUT_AFTER_FEED: [u8; 3] = [GS, b'V', 66];

/// Accumulates commands and UTF-8 text; text is mapped to Windows-1252 in
/// [`build`](Self::build).
pub struct EscPosBuilder {
    buf: Vec<u8>,
    width: usize,
}

impl EscPosBuilder {
    /// `width` is the paper width in columns (48 on 80mm paper, 32 on 58mm)
    pub fn new(width: usize) -> Self {
        let mut buf = Vec::with_capacity(2048);
        buf.extend_from_slice(&INIT);
        Self { buf, width }
    }

    fn cmd(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn line(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(s.as_bytes());
        self.newline()
    }

    pub fn newline(&mut self) -> &mut Self {
        self.cmd(b"\n")
    }

    // ESC a n
    pub fn align(&mut self, align: Align) -> &mut Self {
        let n = match align {
            Align::Left => 0,
            Align::Center => 1,
            Align::Right => 2,
        };
        self.cmd(&[ESC, b'a', n])
    }

    // ESC E n
    pub fn bold(&mut self, on: bool) -> &mut Self {
        self.cmd(&[ESC, b'E', on as u8])
    }

    // GS ! n, 0x11 = double width and height
    pub fn large(&mut self, on: bool) -> &mut Self {
        self.cmd(&[GS, b'!', if on { 0x11 } else { 0x00 }])
    }

    /// Full-width rule made of `c`
    pub fn sep(&mut self, c: char) -> &mut Self {
        let rule: String = std::iter::repeat_n(c, self.width).collect();
        self.line(&rule)
    }

    /// Label flush left, value flush right
    pub fn pair(&mut self, left: &str, right: &str) -> &mut Self {
        let row = layout_pair(left, right, self.width);
        self.line(&row)
    }

    pub fn cut(&mut self, feed_lines: u8) -> &mut Self {
        self.cmd(&CUT_AFTER_FEED);
        self.cmd(&[feed_lines])
    }

    /// Final bytes in the printer code page
    pub fn build(self) -> Vec<u8> {
        convert_to_codepage(&self.buf)
    }

    #[cfg(test)]
    fn raw(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }
}
