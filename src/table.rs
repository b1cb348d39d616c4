//! Console driver for a single round.
//!
//! Transcript, with `?` standing in for the hidden hole card:
//!
//! ```text
//! D: 7,?
//! P: 10,8
//! H/S?
//! =>18
//! D: 7,5,3,2
//! =>17
//! Player wins!
//! ```

use std::io;

use tracing::{debug, warn};

use crate::card::Card;
use crate::console::Console;
use crate::deck::Deck;
use crate::error::{InputError, RoundError, ShowdownError};
use crate::game::{Game, Phase};
use crate::options::GameOptions;
use crate::random::RandomSource;
use crate::result::RoundResult;

/// Plays one round: shuffles, deals, runs both turns and announces the result.
///
/// Every hit/stand decision is one input line. A line starting with `H` or
/// `h` hits; anything else stands, including an empty line, end of input and
/// an overlong line.
///
/// # Errors
///
/// Returns an error if the random source fails, the deck runs out, input
/// cannot be read, or the transcript cannot be written.
pub fn play_round<C, R>(
    console: &mut C,
    rng: &mut R,
    options: GameOptions,
) -> Result<RoundResult, RoundError>
where
    C: Console + ?Sized,
    R: RandomSource + ?Sized,
{
    let deck = Deck::shuffle(rng)?;
    play_deck(console, deck, options)
}

/// Plays one round dealing from an already ordered deck.
///
/// # Errors
///
/// Returns an error if the deck runs out, input cannot be read, or the
/// transcript cannot be written.
pub fn play_deck<C: Console + ?Sized>(
    console: &mut C,
    deck: Deck,
    options: GameOptions,
) -> Result<RoundResult, RoundError> {
    let result = run(console, Game::new(deck, options));
    console.flush()?;
    result
}

fn run<C: Console + ?Sized>(console: &mut C, mut game: Game) -> Result<RoundResult, RoundError> {
    let opening = game.deal()?;

    console.write_text("D: ")?;
    write_card(console, opening.dealer[0])?;
    console.write_char(',')?;
    if game.dealer_hand().is_twenty_one() {
        write_card(console, opening.dealer[1])?;
        console.write_text("\n=>21\n")?;
    } else {
        console.write_text("?\n")?;
    }

    console.write_text("P: ")?;
    write_card(console, opening.player[0])?;
    console.write_char(',')?;
    write_card(console, opening.player[1])?;

    if let Some(result) = game.check_naturals()? {
        if result.player_natural {
            console.write_text("\n=>21\n")?;
        } else {
            console.write_char('\n')?;
        }
        announce(console, &result)?;
        return Ok(result);
    }

    console.write_text("\nH/S?\n")?;
    while game.phase() == Phase::PlayerTurn {
        if !read_hit(console)? {
            game.stand()?;
            break;
        }

        let card = game.hit()?;
        write_card(console, card)?;
        console.write_char('\n')?;

        if let Some(result) = game.result() {
            console.write_text("=>bust\n")?;
            announce(console, &result)?;
            return Ok(result);
        }
    }

    console.write_text("=>")?;
    console.write_int(game.player_hand().total().into())?;

    console.write_text("\nD: ")?;
    write_card(console, opening.dealer[0])?;
    console.write_char(',')?;
    write_card(console, opening.dealer[1])?;
    for card in game.dealer_play()? {
        console.write_char(',')?;
        write_card(console, card)?;
    }

    let result = game.result().ok_or(ShowdownError::InvalidState)?;
    if result.dealer_bust {
        console.write_text("\n=>bust\n")?;
    } else {
        console.write_text("\n=>")?;
        console.write_int(result.dealer_total.into())?;
        console.write_char('\n')?;
    }
    announce(console, &result)?;

    Ok(result)
}

fn write_card<C: Console + ?Sized>(console: &mut C, card: Card) -> io::Result<()> {
    console.write_text(&card.to_string())
}

fn announce<C: Console + ?Sized>(console: &mut C, result: &RoundResult) -> io::Result<()> {
    debug!(outcome = ?result.outcome, "round over");
    console.write_text(result.outcome.announcement())?;
    console.write_char('\n')
}

/// Reads one hit/stand decision.
fn read_hit<C: Console + ?Sized>(console: &mut C) -> Result<bool, RoundError> {
    match console.read_line() {
        Ok(Some(line)) => Ok(is_hit(&line)),
        Ok(None) => {
            warn!("input closed during player turn, standing");
            Ok(false)
        }
        Err(err @ (InputError::MalformedInput { .. } | InputError::NotANumber)) => {
            warn!(%err, "unreadable move, standing");
            Ok(false)
        }
        Err(err @ InputError::Io(_)) => Err(err.into()),
    }
}

fn is_hit(line: &str) -> bool {
    matches!(line.as_bytes().first(), Some(b'H' | b'h'))
}
