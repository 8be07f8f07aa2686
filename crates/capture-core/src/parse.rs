//! Input token validation and parsing.
//!
//! Raw prompt input arrives as free-form text. The helpers here normalize
//! (trim, lowercase) and validate it into domain values. Every failure is an
//! absence, never a fault: callers re-prompt on `None`.

use crate::{PieceKind, Square};

/// Returns true iff the text, trimmed and lowercased, names a piece kind.
pub fn is_valid_piece_name(text: &str) -> bool {
    PieceKind::from_name(text).is_some()
}

/// Returns true iff the text, trimmed and lowercased, is a board square
/// token: exactly a letter 'a'-'h' followed by a digit '1'-'8'.
pub fn is_valid_square(text: &str) -> bool {
    Square::from_algebraic(text.trim()).is_some()
}

/// Parses input like `"knight a5"` into a piece kind and square.
///
/// Succeeds only when the input splits into exactly two whitespace-separated
/// tokens and both validate. Any other token count, an unknown piece name,
/// or an out-of-range square yields `None`; there are no partial results.
pub fn parse_piece_and_square(text: &str) -> Option<(PieceKind, Square)> {
    let mut tokens = text.split_whitespace();
    let kind = PieceKind::from_name(tokens.next()?)?;
    let square = Square::from_algebraic(tokens.next()?)?;
    if tokens.next().is_some() {
        return None;
    }
    Some((kind, square))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{File, Rank};
    use proptest::prelude::*;

    fn sq(token: &str) -> Square {
        Square::from_algebraic(token).expect("valid square token")
    }

    #[test]
    fn parses_exact_pair() {
        assert_eq!(
            parse_piece_and_square("knight a5"),
            Some((PieceKind::Knight, sq("a5")))
        );
        assert_eq!(
            parse_piece_and_square("rook d6"),
            Some((PieceKind::Rook, sq("d6")))
        );
    }

    #[test]
    fn normalizes_case_and_spacing() {
        assert_eq!(
            parse_piece_and_square("ROOK H8"),
            Some((PieceKind::Rook, sq("h8")))
        );
        assert_eq!(
            parse_piece_and_square("pawn  a2"),
            Some((PieceKind::Pawn, sq("a2")))
        );
        assert_eq!(
            parse_piece_and_square("  bishop    c4  "),
            Some((PieceKind::Bishop, sq("c4")))
        );
    }

    #[test]
    fn rejects_wrong_token_counts() {
        assert_eq!(parse_piece_and_square(""), None);
        assert_eq!(parse_piece_and_square("   "), None);
        assert_eq!(parse_piece_and_square("rook"), None);
        assert_eq!(parse_piece_and_square("queen c4 extra"), None);
    }

    #[test]
    fn rejects_invalid_tokens() {
        assert_eq!(parse_piece_and_square("bad a2"), None);
        assert_eq!(parse_piece_and_square("rook z9"), None);
        assert_eq!(parse_piece_and_square("knight a9"), None);
        assert_eq!(parse_piece_and_square("e4 pawn"), None);
    }

    #[test]
    fn piece_name_validator() {
        assert!(is_valid_piece_name("pawn"));
        assert!(is_valid_piece_name("  BISHOP "));
        assert!(!is_valid_piece_name("dragon"));
        assert!(!is_valid_piece_name(""));
    }

    #[test]
    fn square_validator() {
        assert!(is_valid_square("a1"));
        assert!(is_valid_square("h8"));
        assert!(is_valid_square("A1"));
        assert!(is_valid_square("  a1  "));
        assert!(!is_valid_square("a0"));
        assert!(!is_valid_square("i1"));
        assert!(!is_valid_square("a10"));
        assert!(!is_valid_square("1a"));
        assert!(!is_valid_square("aa"));
        assert!(!is_valid_square(""));
    }

    proptest! {
        #[test]
        fn any_valid_pair_parses_regardless_of_case_and_padding(
            kind_idx in 0usize..6,
            file_idx in 0u8..8,
            rank_idx in 0u8..8,
            uppercase in proptest::bool::ANY,
            lead in "[ \t]{0,3}",
            gap in "[ \t]{1,3}",
            trail in "[ \t]{0,3}",
        ) {
            let kind = PieceKind::ALL[kind_idx];
            let square = Square::new(
                File::from_index(file_idx).unwrap(),
                Rank::from_index(rank_idx).unwrap(),
            );
            let name = if uppercase {
                kind.name().to_ascii_uppercase()
            } else {
                kind.name().to_string()
            };
            let text = format!("{lead}{name}{gap}{square}{trail}");
            prop_assert_eq!(parse_piece_and_square(&text), Some((kind, square)));
        }

        #[test]
        fn any_token_count_other_than_two_is_rejected(
            tokens in proptest::collection::vec("[a-z0-9]{1,6}", 0..6),
        ) {
            prop_assume!(tokens.len() != 2);
            prop_assert_eq!(parse_piece_and_square(&tokens.join(" ")), None);
        }

        #[test]
        fn square_validity_matches_token_shape(token in "[a-z0-9]{1,3}") {
            let bytes = token.as_bytes();
            let expected = bytes.len() == 2
                && bytes[0].is_ascii_lowercase()
                && bytes[0] <= b'h'
                && (b'1'..=b'8').contains(&bytes[1]);
            prop_assert_eq!(is_valid_square(&token), expected);
        }
    }
}
