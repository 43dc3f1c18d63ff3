//! The engine's compact move notation.
//!
//! The remote service speaks a four-or-five character from/to format:
//! `e2e4`, or `e7e8q` when the move promotes. Decoding only checks shape
//! (squares in `[a-h][1-8]`, promotion piece in `qrbn`); whether the move is
//! legal in a given position is the orchestrator's business.

use shakmaty::{Role, Square};

use crate::error::TokenError;

/// A move as the wire notation expresses it: coordinates plus an optional
/// promotion piece, not yet checked against any position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

/// Parse an engine move token.
pub fn decode(token: &str) -> Result<RawMove, TokenError> {
    let bytes = token.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(TokenError::BadLength(bytes.len()));
    }

    let from = decode_square(&bytes[0..2])?;
    let to = decode_square(&bytes[2..4])?;
    let promotion = match bytes.get(4) {
        Some(&ch) => Some(decode_promotion(char::from(ch))?),
        None => None,
    };

    Ok(RawMove {
        from,
        to,
        promotion,
    })
}

/// Render a move in the wire notation. Inverse of [`decode`] for every
/// well-formed move.
pub fn encode(m: &RawMove) -> String {
    match m.promotion {
        Some(role) => format!("{}{}{}", m.from, m.to, role.char()),
        None => format!("{}{}", m.from, m.to),
    }
}

fn decode_square(bytes: &[u8]) -> Result<Square, TokenError> {
    Square::from_ascii(bytes)
        .map_err(|_| TokenError::BadSquare(String::from_utf8_lossy(bytes).into_owned()))
}

fn decode_promotion(ch: char) -> Result<Role, TokenError> {
    // Only the pieces a pawn may become; `k` and `p` are valid piece letters
    // elsewhere but never a promotion.
    match ch {
        'q' => Ok(Role::Queen),
        'r' => Ok(Role::Rook),
        'b' => Ok(Role::Bishop),
        'n' => Ok(Role::Knight),
        _ => Err(TokenError::BadPromotion(ch)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_move() {
        let m = decode("e2e4").unwrap();
        assert_eq!(m.from, Square::E2);
        assert_eq!(m.to, Square::E4);
        assert_eq!(m.promotion, None);
    }

    #[test]
    fn decodes_promotion_move() {
        let m = decode("e7e8q").unwrap();
        assert_eq!(m.from, Square::E7);
        assert_eq!(m.to, Square::E8);
        assert_eq!(m.promotion, Some(Role::Queen));

        assert_eq!(decode("a2a1n").unwrap().promotion, Some(Role::Knight));
    }

    #[test]
    fn rejects_bad_lengths() {
        assert_eq!(decode(""), Err(TokenError::BadLength(0)));
        assert_eq!(decode("zz"), Err(TokenError::BadLength(2)));
        assert_eq!(decode("e2e4e5"), Err(TokenError::BadLength(6)));
    }

    #[test]
    fn rejects_bad_squares() {
        assert_eq!(
            decode("i2e4"),
            Err(TokenError::BadSquare("i2".to_string()))
        );
        assert_eq!(
            decode("e2e9"),
            Err(TokenError::BadSquare("e9".to_string()))
        );
        assert_eq!(
            decode("zzzz"),
            Err(TokenError::BadSquare("zz".to_string()))
        );
    }

    #[test]
    fn rejects_bad_promotion_pieces() {
        assert_eq!(decode("e7e8k"), Err(TokenError::BadPromotion('k')));
        assert_eq!(decode("e7e8p"), Err(TokenError::BadPromotion('p')));
    }

    #[test]
    fn non_ascii_input_is_rejected_not_panicked_on() {
        assert!(decode("e2é4").is_err());
        assert!(decode("♞♞♞♞").is_err());
    }

    #[test]
    fn encode_is_the_inverse_of_decode() {
        for token in ["e2e4", "g8f6", "e7e8q", "a2a1r", "h7h8b", "b2b1n"] {
            let m = decode(token).unwrap();
            assert_eq!(encode(&m), token);
            assert_eq!(decode(&encode(&m)), Ok(m));
        }
    }
}
