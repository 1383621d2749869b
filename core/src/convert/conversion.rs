// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

use crate::{HarfError, HarfResult};

/// Which way a conversion went.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

/// Why a fallback path was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackKind {
    /// Encoding: the char is neither ASCII nor in the forward table, so its UTF-8 bytes
    /// were written instead. This does not survive a round trip.
    UnmappedChar(char),
    /// Decoding: the byte has no entry in the reverse table, so the char with the same
    /// numeric value (`U+0080..=U+00FF`) was written instead.
    UnmappedByte(u8),
}

impl Display for FallbackKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FallbackKind::UnmappedChar(ch) => {
                write!(f, "unmapped char U+{:04X}", u32::from(*ch))
            }
            FallbackKind::UnmappedByte(byte) => write!(f, "unmapped byte 0x{byte:02X}"),
        }
    }
}

/// One place in the input where a fallback path was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Fallback {
    /// Byte offset into the input text. For encoding this is where the char starts, for
    /// decoding it is where the token starts.
    pub offset: usize,
    pub kind: FallbackKind,
}

/// The result of a conversion, plus a record of every fallback that was used to produce
/// it. An empty [`Conversion::fallbacks`] means every char or token was mapped. For an
/// encode this also means that decoding [`Conversion::text`] gives the original input.
/// A decode drops the text between tokens, so it never round trips in general.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub text: String,
    pub fallbacks: Vec<Fallback>,
}

impl Conversion {
    #[must_use]
    pub fn is_lossless(&self) -> bool { self.fallbacks.is_empty() }

    #[must_use]
    pub fn fallback_count(&self) -> usize { self.fallbacks.len() }

    /// Turn a lossy conversion into an error. Lossless conversions pass through.
    ///
    /// # Errors
    ///
    /// Returns [`HarfError::LossyConversion`] if at least one fallback was used.
    pub fn into_strict(self, direction: Direction) -> HarfResult<Self> {
        match self.fallbacks.first() {
            None => Ok(self),
            Some(first) => Err(HarfError::LossyConversion {
                direction,
                count: self.fallbacks.len(),
                first_offset: first.offset,
                first: first.kind,
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_direction_strings() {
        assert_eq!(Direction::Encode.to_string(), "encode");
        assert_eq!(Direction::from_str("decode").unwrap(), Direction::Decode);
    }

    #[test]
    fn test_fallback_kind_display() {
        assert_eq!(
            FallbackKind::UnmappedChar('€').to_string(),
            "unmapped char U+20AC"
        );
        assert_eq!(
            FallbackKind::UnmappedByte(0x80).to_string(),
            "unmapped byte 0x80"
        );
    }

    #[test]
    fn test_into_strict() {
        let exact = Conversion {
            text: "ok".to_string(),
            fallbacks: vec![],
        };
        assert!(exact.is_lossless());
        assert_eq!(exact.clone().into_strict(Direction::Encode).unwrap(), exact);

        let lossy = Conversion {
            text: "\u{80}".to_string(),
            fallbacks: vec![
                Fallback {
                    offset: 3,
                    kind: FallbackKind::UnmappedByte(0x80),
                },
                Fallback {
                    offset: 9,
                    kind: FallbackKind::UnmappedByte(0x81),
                },
            ],
        };
        assert_eq!(lossy.fallback_count(), 2);
        let report = lossy.into_strict(Direction::Decode).unwrap_err();
        match report.downcast_ref::<HarfError>() {
            Some(HarfError::LossyConversion {
                direction,
                count,
                first_offset,
                first,
            }) => {
                assert_eq!(*direction, Direction::Decode);
                assert_eq!(*count, 2);
                assert_eq!(*first_offset, 3);
                assert_eq!(*first, FallbackKind::UnmappedByte(0x80));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_serialize_report() {
        let conversion = Conversion {
            text: "x".to_string(),
            fallbacks: vec![Fallback {
                offset: 0,
                kind: FallbackKind::UnmappedChar('😀'),
            }],
        };
        let json = serde_json::to_string(&conversion).unwrap();
        assert_eq!(
            json,
            r#"{"text":"x","fallbacks":[{"offset":0,"kind":{"unmapped_char":"😀"}}]}"#
        );
    }
}
