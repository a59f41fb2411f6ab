//! Command builders for the label format.
//!
//! The header defines the label layout once (three barcode fields, six text
//! fields, three human-readable fields). Each block then fills those fields
//! for one item and prints a number of copies.

use crate::layout::LabelLines;
use crate::markers::{Marker, MarkerStyle};
use std::fmt;

/// Line terminator the device's parser expects after every command.
pub const CRLF: &str = "\r\n";

/// One header command: an optional marker after `STX`, then the literal body.
struct HeaderCommand {
    prefix: Option<Marker>,
    body: &'static str,
}

macro_rules! hdr {
    ($prefix:ident, $body:expr) => {
        HeaderCommand {
            prefix: Some(Marker::$prefix),
            body: $body,
        }
    };
    ($body:expr) => {
        HeaderCommand {
            prefix: None,
            body: $body,
        }
    };
}

/// Device setup and field definitions. Positions and sizes are the physical
/// layout of the label stock and must stay verbatim.
static HEADER: &[HeaderCommand] = &[
    hdr!(Si, "g1,420"),
    hdr!(Si, "d5"),
    hdr!(Si, "s50"),
    hdr!(Esc, "P;"),
    hdr!("E1,1;A1,ETIQ2J;"),
    hdr!("L39;D0;"),
    hdr!("B0,BR0;o60,210;f1;c6,0;h50;w1;r0;i1;d0,12"),
    hdr!("B1,BR1;o60,480;f1;c6,0;h50;w1;r0;i1;d0,12"),
    hdr!("B2,BR2;o60,730;f1;c6,0;h50;w1;r0;i1;d0,12"),
    hdr!("H3,TX3;o10,260;f1;c25;h8;w7;d0,25;"),
    hdr!("H4,TX4;o30,260;f1;c25;h8;w7;d0,25;"),
    hdr!("H5,TX5;o10,530;f1;c25;h8;w7;d0,25;"),
    hdr!("H6,TX6;o30,530;f1;c25;h8;w7;d0,25;"),
    hdr!("H7,TX7;o10,790;f1;c25;h8;w7;d0,25;"),
    hdr!("H8,TX8;o30,790;f1;c25;h8;w7;d0,25;"),
    hdr!("I0;o110,220;f1;c25;h12;w12;"),
    hdr!("I1;o110,490;f1;c25;h12;w12;"),
    hdr!("I2;o110,740;f1;c25;h12;w12;"),
    hdr!("R"),
];

/// Barcode fields written by a main block.
const MAIN_BARCODES: [&str; 3] = ["BR0", "BR1", "BR2"];
/// Text field pairs (first line, second line) written by a main block.
const MAIN_TEXT_PAIRS: [(&str, &str); 3] = [("TX3", "TX4"), ("TX5", "TX6"), ("TX7", "TX8")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Three label positions, prints `qty` copies.
    Main,
    /// One label position, prints exactly one copy.
    Residual,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Main => write!(f, "main"),
            BlockKind::Residual => write!(f, "residual"),
        }
    }
}

/// Ordered command lines for one print job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBlock {
    pub kind: BlockKind,
    pub quantity: u64,
    pub lines: Vec<String>,
}

impl CommandBlock {
    /// Every command followed by CRLF, ready to be placed in the document.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push_str(CRLF);
        }
        out
    }
}

/// Builds header and blocks with a given marker mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelFormat {
    pub markers: MarkerStyle,
}

impl LabelFormat {
    pub fn new(markers: MarkerStyle) -> Self {
        Self { markers }
    }

    /// The 19 setup commands followed by one empty separator line.
    pub fn header(&self) -> Vec<String> {
        let mut lines: Vec<String> = HEADER
            .iter()
            .map(|cmd| {
                let prefix = cmd.prefix.map(|m| self.markers.emit(m)).unwrap_or("");
                self.command(&format!("{}{}", prefix, cmd.body))
            })
            .collect();
        lines.push(String::new());
        lines
    }

    /// Fill all three label positions with `code` and both text lines, then
    /// print `qty` copies.
    pub fn main_block(&self, code: &str, text: &LabelLines, qty: u64) -> CommandBlock {
        let mut lines = vec![self.record_start()];
        for field in MAIN_BARCODES {
            lines.push(self.assign(field, code));
        }
        for (first, second) in MAIN_TEXT_PAIRS {
            lines.push(self.assign(first, &text.line1));
            lines.push(self.assign(second, &text.line2));
        }
        lines.push(self.quantity(qty));
        lines.push(self.record_end());
        CommandBlock {
            kind: BlockKind::Main,
            quantity: qty,
            lines,
        }
    }

    /// Fill only the first label position and print a single copy.
    pub fn residual_block(&self, code: &str, text: &LabelLines) -> CommandBlock {
        let lines = vec![
            self.record_start(),
            self.assign("BR0", code),
            self.assign("TX3", &text.line1),
            self.assign("TX4", &text.line2),
            self.quantity(1),
            self.record_end(),
        ];
        CommandBlock {
            kind: BlockKind::Residual,
            quantity: 1,
            lines,
        }
    }

    fn m(&self, marker: Marker) -> &'static str {
        self.markers.emit(marker)
    }

    /// `STX body ETX`
    fn command(&self, body: &str) -> String {
        format!("{}{}{}", self.m(Marker::Stx), body, self.m(Marker::Etx))
    }

    fn record_start(&self) -> String {
        self.command(&format!("{}E1{}", self.m(Marker::Esc), self.m(Marker::Can)))
    }

    /// `STX ESC F"field" LF value ETX`
    fn assign(&self, field: &str, value: &str) -> String {
        self.command(&format!(
            "{}F\"{}\"{}{}",
            self.m(Marker::Esc),
            field,
            self.m(Marker::Lf),
            value
        ))
    }

    fn quantity(&self, qty: u64) -> String {
        self.command(&format!("{}{}", self.m(Marker::Us), qty))
    }

    fn record_end(&self) -> String {
        self.command(self.m(Marker::Etb))
    }
}
