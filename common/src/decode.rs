use thiserror::Error;

use crate::encoding::Encoding;

/// Possible errors when decoding an encoded value.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not parse {encoding} value")]
    Parser {
        encoding: Encoding,
        #[source]
        source: parse::Error,
    },
}

impl Encoding {
    /// Parse a value produced by [`Encoding::encode`] back into UTF-16 code units.
    ///
    /// Decoding is strict: the whole text has to match the shape produced by this encoding.
    pub fn decode(self, text: &str) -> Result<Vec<u16>, Error> {
        parse::parse(self, text).map_err(|source| Error::Parser {
            encoding: self,
            source,
        })
    }

    /// Like [`Encoding::decode`], but into a string. Unpaired surrogates are replaced.
    pub fn decode_string(self, text: &str) -> Result<String, Error> {
        self.decode(text)
            .map(|units| String::from_utf16_lossy(&units))
    }
}

mod parse {
    use nom::{
        Finish,
        bytes::complete::{tag, take_while1},
        combinator::{all_consuming, map_res},
        multi::{many0, separated_list0},
        sequence::delimited,
    };

    use crate::encoding::Encoding;

    pub type Error = nom::error::Error<String>;
    pub type Result<T> = std::result::Result<T, nom::error::Error<String>>;
    type IResult<'a, T> = nom::IResult<&'a str, T>;

    fn unit<'a>(encoding: Encoding) -> impl FnMut(&'a str) -> IResult<'a, u16> {
        let radix = encoding.radix().get();
        move |input| {
            delimited(
                tag(encoding.prefix()),
                map_res(
                    take_while1(move |c: char| c.is_digit(radix)),
                    move |digits: &str| u16::from_str_radix(digits, radix),
                ),
                tag(encoding.suffix()),
            )(input)
        }
    }

    fn units<'a>(encoding: Encoding) -> impl FnMut(&'a str) -> IResult<'a, Vec<u16>> {
        move |input| match encoding.separator() {
            "" => many0(unit(encoding))(input),
            separator => separated_list0(tag(separator), unit(encoding))(input),
        }
    }

    pub fn parse(encoding: Encoding, input: &str) -> Result<Vec<u16>> {
        let (open, close) = encoding.wrapper();
        all_consuming(delimited(tag(open), units(encoding), tag(close)))(input)
            .finish()
            .map_err(|nom::error::Error { input, code }| Error {
                input: input.to_owned(),
                code,
            })
            .map(|(_, res)| res)
    }
}

#[cfg(test)]
mod test {
    use crate::encoding::encode;

    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "a",
        "<script>alert('&amp;')</script>",
        "line\nbreak\ttab",
        "日本語",
        "😀 mixed 𝄞",
        "\0\u{ffff}",
    ];

    #[test]
    fn round_trip() {
        for input in SAMPLES {
            let units = input.encode_utf16().collect::<Vec<_>>();
            for result in encode(input) {
                assert_eq!(
                    result.encoding.decode(&result.value).unwrap(),
                    units,
                    "{} of {input:?}",
                    result.encoding
                );
            }
        }
    }

    #[test]
    fn round_trip_random() {
        fastrand::seed(7);
        for _ in 0..200 {
            let len = fastrand::usize(0..24);
            let input = std::iter::repeat_with(|| fastrand::char(..))
                .take(len)
                .collect::<String>();

            for result in encode(&input) {
                assert_eq!(
                    result.encoding.decode_string(&result.value).unwrap(),
                    input
                );
            }
        }
    }

    #[test]
    fn decode_examples() {
        assert_eq!(Encoding::Octal.decode(r"\74\163").unwrap(), [60, 115]);
        assert_eq!(Encoding::Url.decode("%3c%73").unwrap(), [60, 115]);
        assert_eq!(
            Encoding::CharCode
                .decode("String.fromCharCode(60,115)")
                .unwrap(),
            [60, 115]
        );
        assert_eq!(Encoding::HexIntegers.decode("0x3c 0x73").unwrap(), [60, 115]);
        assert!(Encoding::CharCode
            .decode("String.fromCharCode()")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn rejects_malformed() {
        assert!(Encoding::Octal.decode(r"\8").is_err());
        assert!(Encoding::Url.decode("%3c%").is_err());
        assert!(Encoding::HtmlHexEntity.decode("&#x3c").is_err());
        assert!(Encoding::HtmlDecimalEntity.decode("&#99999;").is_err());
        assert!(Encoding::CharCode.decode("60,115").is_err());
        assert!(Encoding::HexIntegers.decode("0x3c 0x73 ").is_err());
        assert!(Encoding::HexEscape.decode("abc").is_err());
    }

    #[test]
    fn error_names_encoding() {
        let error = Encoding::Url.decode("nope").unwrap_err();
        assert_eq!(error.to_string(), "could not parse URL encoding value");
    }
}
