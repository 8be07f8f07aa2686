//! Interactive capture query prompt.
//!
//! Reads one white attacker (pawn or rook) and one to sixteen black pieces
//! from stdin, runs the capture query once, and prints the capturable
//! squares with their occupants. All input failures re-prompt; EOF exits.

use std::io::{self, BufRead, Lines, StdinLock, Write};

use capture_core::parse::parse_piece_and_square;
use capture_engine::{QuerySetup, MAX_BLACK_PIECES};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    let Some(mut setup) = read_white_piece(&mut lines, &mut out)? else {
        return Ok(());
    };

    writeln!(out, "Now add BLACK pieces one by one (any valid chess piece).")?;
    writeln!(
        out,
        "Format: 'bishop d6'. Add at least 1 and at most {} pieces. Type 'done' when finished.",
        MAX_BLACK_PIECES
    )?;

    loop {
        prompt(&mut out, "Add BLACK piece (or 'done'): ")?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        if line.trim().eq_ignore_ascii_case("done") {
            if setup.black_count() == 0 {
                writeln!(out, "You must add at least one black piece.")?;
                continue;
            }
            break;
        }

        let Some((kind, square)) = parse_piece_and_square(&line) else {
            writeln!(
                out,
                "Invalid format. Please use: '<piece> <square>', e.g. 'rook d6'."
            )?;
            continue;
        };

        match setup.add_black(kind, square) {
            Ok(()) => writeln!(out, "Added BLACK {} on {}.", kind, square)?,
            Err(err) => {
                writeln!(out, "{}. Try again.", err)?;
                continue;
            }
        }

        if setup.black_count() == MAX_BLACK_PIECES {
            writeln!(
                out,
                "Reached the maximum of {} black pieces.",
                MAX_BLACK_PIECES
            )?;
            break;
        }
    }

    let query = match setup.finish() {
        Ok(query) => query,
        Err(err) => {
            writeln!(out, "{}.", err)?;
            return Ok(());
        }
    };

    let capturable = query.capturable_squares();

    writeln!(out)?;
    writeln!(out, "=== Result ===")?;
    if capturable.is_empty() {
        writeln!(
            out,
            "No black pieces can be captured by the white {} on {}.",
            query.attacker(),
            query.origin()
        )?;
    } else {
        writeln!(
            out,
            "The white {} on {} can capture these squares:",
            query.attacker(),
            query.origin()
        )?;
        for square in capturable {
            if let Some(kind) = query.board().piece_at(square) {
                writeln!(out, " - {} {}", square, kind)?;
            }
        }
    }

    Ok(())
}

/// Prompts until a supported white piece parses, returning its setup.
/// `None` means stdin closed before a valid white piece arrived.
fn read_white_piece(
    lines: &mut Lines<StdinLock<'_>>,
    out: &mut impl Write,
) -> io::Result<Option<QuerySetup>> {
    loop {
        prompt(out, "Enter WHITE piece and position (pawn/rook), e.g. 'pawn e4': ")?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;

        let Some((kind, square)) = parse_piece_and_square(&line) else {
            writeln!(
                out,
                "Invalid format. Please use: '<piece> <square>', e.g. 'pawn e4'."
            )?;
            continue;
        };

        match QuerySetup::new(kind, square) {
            Ok(setup) => {
                writeln!(out, "Added WHITE {} on {}.", kind, square)?;
                return Ok(Some(setup));
            }
            Err(err) => writeln!(out, "{}.", err)?,
        }
    }
}

fn prompt(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}
