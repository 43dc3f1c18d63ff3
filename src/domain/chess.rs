//! Helpers over the shakmaty rules layer.
//!
//! The orchestrator never builds a `shakmaty::Move` by hand: a from/to pair
//! (from the board or from the wire) is resolved against the legal-move list
//! for the current position, so legality checking and move construction are
//! one and the same step for both the human and the engine path.

use shakmaty::fen::Fen;
use shakmaty::{Chess, EnPassantMode, File, Move, Position, Role, Square};

/// Find the legal move matching `from`/`to`, if any.
///
/// Castling is matched by the king's two-square hop (`e1g1` style), the way
/// both the board UI and the engine protocol express it. When the matched
/// move is a pawn reaching the back rank, `promotion` picks the piece and
/// defaults to a queen - a plain pawn push to the last rank never comes back
/// without a promotion role.
pub fn resolve_move(
    position: &Chess,
    from: Square,
    to: Square,
    promotion: Option<Role>,
) -> Option<Move> {
    let wanted = promotion.unwrap_or(Role::Queen);

    for m in &position.legal_moves() {
        let (move_from, move_to) = match m {
            Move::Normal { from, to, .. } => (*from, *to),
            Move::EnPassant { from, to, .. } => (*from, *to),
            Move::Castle { king, rook, .. } => {
                let king_dest = if rook.file() == File::H {
                    Square::from_coords(File::G, rook.rank())
                } else {
                    Square::from_coords(File::C, rook.rank())
                };
                (*king, king_dest)
            }
            Move::Put { .. } => continue,
        };

        if move_from != from || move_to != to {
            continue;
        }

        match m {
            // Promotions are enumerated once per target piece; take the one
            // that was asked for.
            Move::Normal {
                promotion: Some(role),
                ..
            } => {
                if *role == wanted {
                    return Some(m.clone());
                }
            }
            _ => return Some(m.clone()),
        }
    }

    None
}

/// Canonical FEN serialization of a position.
pub fn position_fen(position: &Chess) -> String {
    Fen::from_position(position, EnPassantMode::Legal).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::CastlingMode;

    fn position(fen: &str) -> Chess {
        fen.parse::<Fen>()
            .unwrap()
            .into_position(CastlingMode::Standard)
            .unwrap()
    }

    #[test]
    fn resolves_a_legal_pawn_push() {
        let pos = Chess::default();
        let m = resolve_move(&pos, Square::E2, Square::E4, None).unwrap();
        assert_eq!(m.from(), Some(Square::E2));
        assert_eq!(m.to(), Square::E4);
    }

    #[test]
    fn rejects_an_illegal_destination() {
        let pos = Chess::default();
        assert!(resolve_move(&pos, Square::E2, Square::E5, None).is_none());
        assert!(resolve_move(&pos, Square::A1, Square::A8, None).is_none());
    }

    #[test]
    fn resolves_castling_by_king_hop() {
        // White ready to castle short.
        let pos = position("rnbqk2r/pppp1ppp/5n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
        let m = resolve_move(&pos, Square::E1, Square::G1, None).unwrap();
        assert!(matches!(m, Move::Castle { .. }));
    }

    #[test]
    fn pawn_to_back_rank_defaults_to_queen() {
        let pos = position("8/4P2k/8/8/8/8/8/4K3 w - - 0 1");
        let m = resolve_move(&pos, Square::E7, Square::E8, None).unwrap();
        match m {
            Move::Normal { promotion, .. } => assert_eq!(promotion, Some(Role::Queen)),
            other => panic!("expected a promotion, got {other:?}"),
        }
    }

    #[test]
    fn pawn_to_back_rank_honors_requested_piece() {
        let pos = position("8/4P2k/8/8/8/8/8/4K3 w - - 0 1");
        let m = resolve_move(&pos, Square::E7, Square::E8, Some(Role::Knight)).unwrap();
        match m {
            Move::Normal { promotion, .. } => assert_eq!(promotion, Some(Role::Knight)),
            other => panic!("expected a promotion, got {other:?}"),
        }
    }

    #[test]
    fn non_promoting_move_carries_no_promotion_role() {
        let pos = Chess::default();
        let m = resolve_move(&pos, Square::G1, Square::F3, Some(Role::Queen)).unwrap();
        match m {
            Move::Normal { promotion, .. } => assert_eq!(promotion, None),
            other => panic!("expected a normal move, got {other:?}"),
        }
    }

    #[test]
    fn fen_of_the_start_position() {
        assert_eq!(
            position_fen(&Chess::default()),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }
}
