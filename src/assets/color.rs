use std::str::FromStr;

use serde::Deserialize;

use crate::foundation::core::Color;
use crate::foundation::error::PictureError;

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbObj { r: u8, g: u8, b: u8 },
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbObj { r, g, b } => Ok(Color::rgb(r, g, b)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
                _ => Err(serde::de::Error::custom(
                    "rgb array must have len 3 ([r,g,b])",
                )),
            },
        }
    }
}

impl FromStr for Color {
    type Err = PictureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map_err(PictureError::validation)
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    // Short #RGB form doubles every digit.
    match s.len() {
        3 if s.is_ascii() => {
            let d = |i: usize| hex_byte(&s[i..i + 1].repeat(2));
            Ok(Color::rgb(d(0)?, d(1)?, d(2)?))
        }
        6 if s.is_ascii() => Ok(Color::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        _ => Err("hex color must be #RGB or #RRGGBB (case-insensitive)".to_owned()),
    }
}
