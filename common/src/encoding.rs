//! Per-code-unit textual encodings.
//!
//! Every encoding renders each UTF-16 code unit of the input independently as
//! `prefix digits suffix`, joins the fragments with a separator and wraps the
//! result. Characters outside the Basic Multilingual Plane are therefore
//! encoded as two surrogate units.

use std::fmt::{self, Display};

use itertools::Itertools;

/// Number base used for the digits of a single code unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    #[must_use]
    pub fn get(self) -> u32 {
        match self {
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }

    fn write_digits(self, f: &mut fmt::Formatter<'_>, unit: u16, width: usize) -> fmt::Result {
        match self {
            Self::Octal => write!(f, "{unit:0width$o}"),
            Self::Decimal => write!(f, "{unit:0width$}"),
            Self::Hex => write!(f, "{unit:0width$x}"),
        }
    }
}

/// The supported encodings, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// `\74\163`
    Octal,
    /// `%3c%73`
    Url,
    /// `&#x3c;&#x73;`
    HtmlHexEntity,
    /// `&#60;&#115;`
    HtmlDecimalEntity,
    /// `\u003c\u0073`
    UnicodeEscape,
    /// `String.fromCharCode(60,115)`
    CharCode,
    /// `\x3c\x73`
    HexEscape,
    /// `0x3c 0x73`
    HexIntegers,
}

impl Encoding {
    const ALL: [Self; 8] = [
        Self::Octal,
        Self::Url,
        Self::HtmlHexEntity,
        Self::HtmlDecimalEntity,
        Self::UnicodeEscape,
        Self::CharCode,
        Self::HexEscape,
        Self::HexIntegers,
    ];

    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// One-based position in the display order.
    #[must_use]
    pub fn ordinal(self) -> usize {
        self as usize + 1
    }

    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Octal => "\\",
            Self::Url => "%",
            Self::HtmlHexEntity => "&#x",
            Self::HtmlDecimalEntity => "&#",
            Self::UnicodeEscape => "\\u",
            Self::CharCode => "",
            Self::HexEscape => "\\x",
            Self::HexIntegers => "0x",
        }
    }

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::HtmlHexEntity | Self::HtmlDecimalEntity => ";",
            _ => "",
        }
    }

    #[must_use]
    pub fn radix(self) -> Radix {
        match self {
            Self::Octal => Radix::Octal,
            Self::HtmlDecimalEntity | Self::CharCode => Radix::Decimal,
            Self::Url
            | Self::HtmlHexEntity
            | Self::UnicodeEscape
            | Self::HexEscape
            | Self::HexIntegers => Radix::Hex,
        }
    }

    /// Minimum number of digits, zero-padded.
    #[must_use]
    pub fn width(self) -> usize {
        match self {
            Self::UnicodeEscape => 4,
            _ => 0,
        }
    }

    /// Text placed between two encoded units.
    #[must_use]
    pub fn separator(self) -> &'static str {
        match self {
            Self::CharCode => ",",
            Self::HexIntegers => " ",
            _ => "",
        }
    }

    /// Text placed around the whole value (opening, closing).
    #[must_use]
    pub fn wrapper(self) -> (&'static str, &'static str) {
        match self {
            Self::CharCode => ("String.fromCharCode(", ")"),
            _ => ("", ""),
        }
    }

    /// Write the encoding of `units` into `writer`.
    ///
    /// # Errors
    ///
    /// Only errors of the underlying writer are returned.
    pub fn encode_to(
        self,
        units: impl IntoIterator<Item = u16>,
        writer: &mut impl fmt::Write,
    ) -> fmt::Result {
        let (open, close) = self.wrapper();
        let fragments = units.into_iter().map(|unit| Fragment {
            encoding: self,
            unit,
        });
        write!(writer, "{open}{}{close}", fragments.format(self.separator()))
    }

    #[must_use]
    pub fn encode(self, input: &str) -> String {
        let mut result = String::new();
        self.encode_to(input.encode_utf16(), &mut result)
            .unwrap(/* Write for String should never fail */);
        result
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Octal => "Octal escape",
            Self::Url => "URL encoding",
            Self::HtmlHexEntity => "HTML hex entity",
            Self::HtmlDecimalEntity => "HTML decimal entity",
            Self::UnicodeEscape => "Unicode escape",
            Self::CharCode => "String.fromCharCode",
            Self::HexEscape => "Hex escape",
            Self::HexIntegers => "Hex integers",
        };

        write!(f, "{name}")
    }
}

/// A single encoded code unit.
struct Fragment {
    encoding: Encoding,
    unit: u16,
}

impl Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encoding.prefix())?;
        self.encoding
            .radix()
            .write_digits(f, self.unit, self.encoding.width())?;
        f.write_str(self.encoding.suffix())
    }
}

/// The input rendered in one encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedResult {
    pub encoding: Encoding,
    pub value: String,
}

impl EncodedResult {
    /// Display label, e.g. `1. Octal escape`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}. {}", self.encoding.ordinal(), self.encoding)
    }
}

/// Render `input` in every [`Encoding`], in display order.
#[must_use]
pub fn encode(input: &str) -> Vec<EncodedResult> {
    Encoding::iter()
        .map(|encoding| EncodedResult {
            encoding,
            value: encoding.encode(input),
        })
        .collect()
}
