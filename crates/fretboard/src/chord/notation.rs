//! Chord notation parsing.
//!
//! Positions are written one character per string (`xx0232`), or separated
//! by hyphens when a fret needs more than one digit (`x-15-14-11-12-11`).
//! Finger labels are always one character per string (`-43121`).

use std::ops::Range;

use crate::error::FretboardError;

/// Highest fret a position token may name.
pub(crate) const MAX_FRET: u32 = 99;

/// One position token with its byte span in the notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PositionToken {
    /// `None` for a muted string.
    pub fret: Option<u32>,
    pub span: Range<usize>,
}

/// Splits a position notation into tokens.
pub(crate) fn parse_positions(notation: &str) -> Result<Vec<PositionToken>, FretboardError> {
    if notation.contains('-') {
        let mut tokens = Vec::new();
        let mut start = 0;
        for part in notation.split('-') {
            let span = start..start + part.len();
            tokens.push(parse_token(notation, part, span)?);
            start += part.len() + 1;
        }
        Ok(tokens)
    } else {
        notation
            .char_indices()
            .map(|(offset, ch)| {
                let span = offset..offset + ch.len_utf8();
                parse_token(notation, &notation[span.clone()], span)
            })
            .collect()
    }
}

fn parse_token(
    notation: &str,
    token: &str,
    span: Range<usize>,
) -> Result<PositionToken, FretboardError> {
    let fret = match token {
        "" | "x" | "X" => None,
        digits if digits.bytes().all(|b| b.is_ascii_digit()) => {
            match digits.parse::<u32>() {
                Ok(fret) if fret <= MAX_FRET => Some(fret),
                _ => {
                    return Err(FretboardError::malformed_chord(
                        format!("fret `{digits}` is too large, the highest fret is {MAX_FRET}"),
                        notation,
                        Some(span),
                    ));
                }
            }
        }
        other => {
            return Err(FretboardError::malformed_chord(
                format!("unexpected position `{other}`, expected a fret number or `x`"),
                notation,
                Some(span),
            ));
        }
    };

    Ok(PositionToken { fret, span })
}

/// Splits a finger notation into labels, one per string.
pub(crate) fn parse_fingers(notation: &str) -> Vec<Option<char>> {
    notation
        .chars()
        .map(|ch| match ch {
            '-' | '.' | ' ' => None,
            label => Some(label),
        })
        .collect()
}
