//! Shared clap helper types for the CLI.

use clap::ValueEnum;
use pm42_labels::MarkerStyle;

/// How control markers are written to the command file.
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum MarkerStyleArg {
    /// Readable tokens such as `<STX>`.
    #[default]
    Placeholder,
    /// Raw ASCII control bytes.
    #[value(name = "control-bytes")]
    ControlBytes,
}

impl From<MarkerStyleArg> for MarkerStyle {
    fn from(value: MarkerStyleArg) -> Self {
        match value {
            MarkerStyleArg::Placeholder => MarkerStyle::Placeholder,
            MarkerStyleArg::ControlBytes => MarkerStyle::ControlBytes,
        }
    }
}
