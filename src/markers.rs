use std::fmt;

/// Protocol delimiters used by the printer's line-oriented command language.
///
/// Each command line is framed by `STX ... ETX`; the others select the
/// command family (`ESC`, `SI`, `US`, `ETB`) or separate a field name from
/// its value (`LF`, `CAN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Stx,
    Etx,
    Esc,
    Lf,
    Us,
    Etb,
    Can,
    Si,
}

impl Marker {
    pub const ALL: [Marker; 8] = [
        Marker::Stx,
        Marker::Etx,
        Marker::Esc,
        Marker::Lf,
        Marker::Us,
        Marker::Etb,
        Marker::Can,
        Marker::Si,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Marker::Stx => "STX",
            Marker::Etx => "ETX",
            Marker::Esc => "ESC",
            Marker::Lf => "LF",
            Marker::Us => "US",
            Marker::Etb => "ETB",
            Marker::Can => "CAN",
            Marker::Si => "SI",
        }
    }

    /// ASCII control code the device expects on the wire.
    pub fn control_byte(self) -> u8 {
        match self {
            Marker::Stx => 0x02,
            Marker::Etx => 0x03,
            Marker::Esc => 0x1B,
            Marker::Lf => 0x0A,
            Marker::Us => 0x1F,
            Marker::Etb => 0x17,
            Marker::Can => 0x18,
            Marker::Si => 0x0F,
        }
    }
}

/// How markers are written into the output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Readable `<STX>`-style tokens, as found in the exports the format copies.
    #[default]
    Placeholder,
    /// The raw control bytes, for sending the file straight to a device.
    ControlBytes,
}

impl MarkerStyle {
    /// Text emitted for `marker` under this style.
    pub fn emit(self, marker: Marker) -> &'static str {
        match self {
            MarkerStyle::Placeholder => match marker {
                Marker::Stx => "<STX>",
                Marker::Etx => "<ETX>",
                Marker::Esc => "<ESC>",
                Marker::Lf => "<LF>",
                Marker::Us => "<US>",
                Marker::Etb => "<ETB>",
                Marker::Can => "<CAN>",
                Marker::Si => "<SI>",
            },
            MarkerStyle::ControlBytes => match marker {
                Marker::Stx => "\x02",
                Marker::Etx => "\x03",
                Marker::Esc => "\x1b",
                Marker::Lf => "\x0a",
                Marker::Us => "\x1f",
                Marker::Etb => "\x17",
                Marker::Can => "\x18",
                Marker::Si => "\x0f",
            },
        }
    }
}

impl fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerStyle::Placeholder => write!(f, "placeholder"),
            MarkerStyle::ControlBytes => write!(f, "control-bytes"),
        }
    }
}
