use crate::format::plural;
use crate::game::{GameStatus, Session};
use crate::model::Code;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use super::CommandContext;
use super::utils::{code_pegs, feedback_pegs, feedback_summary, palette_legend};

pub fn handle_play(ctx: &CommandContext, seed: Option<u64>) -> Result<()> {
    let mut session = Session::new(ctx.settings.clone(), seed);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_play(&mut session, stdin.lock(), stdout.lock())
}

/// Line-oriented game loop. Returns at EOF or `quit`.
pub fn run_play<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> Result<()> {
    print_intro(session, &mut out)?;
    prompt(session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        match command.to_lowercase().as_str() {
            "" => {}
            "q" | "quit" | "exit" => break,
            "h" | "help" | "?" => print_help(session, &mut out)?,
            "n" | "new" => {
                session.new_game();
                writeln!(out, "{}", "New game started.".cyan())?;
            }
            _ if session.state().is_over() => {
                writeln!(
                    out,
                    "The game is over. Type 'new' to play again or 'quit' to exit."
                )?;
            }
            _ => submit_line(session, command, &mut out)?,
        }

        prompt(session, &mut out)?;
    }

    let tally = session.tally();
    writeln!(out, "\nGames won: {}  lost: {}", tally.won, tally.lost)?;
    Ok(())
}

fn submit_line<W: Write>(session: &mut Session, line: &str, out: &mut W) -> Result<()> {
    let settings = session.state().settings();
    let guess = match Code::parse_for(line, settings.code_length, &settings.palette) {
        Ok(guess) => guess,
        Err(e) => {
            writeln!(out, "{} {}", "Invalid guess:".red(), e)?;
            return Ok(());
        }
    };

    session.clear_current_guess();
    for color in guess.iter() {
        session.select_color(*color);
    }
    if !session.submit_guess() {
        return Ok(());
    }

    let state = session.state();
    if let Some(record) = state.history().last() {
        writeln!(
            out,
            "{:>2}. {}  {}  ({})",
            state.attempts_used(),
            code_pegs(record.guess()),
            feedback_pegs(record.feedback()),
            feedback_summary(record.feedback())
        )?;
    }

    match state.status() {
        GameStatus::Won => writeln!(
            out,
            "{} You guessed the secret code in {}!",
            "You won!".green().bold(),
            plural(state.attempts_used(), "attempt")
        )?,
        GameStatus::Lost => {
            writeln!(
                out,
                "{} You've run out of attempts.",
                "Game over.".red().bold()
            )?;
            writeln!(
                out,
                "The secret code was: {}  {}",
                code_pegs(state.secret()),
                state.secret()
            )?;
        }
        GameStatus::InProgress => {}
    }
    Ok(())
}

fn print_intro<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let settings = session.state().settings();
    writeln!(out, "{}", "Mastermind".bold())?;
    writeln!(
        out,
        "Guess the secret code of {} colored pegs in {}.",
        settings.code_length,
        plural(settings.max_attempts, "attempt")
    )?;
    writeln!(out, "Colors: {}", palette_legend(&settings.palette))?;
    writeln!(out, "Type 'help' for instructions.")?;
    Ok(())
}

fn print_help<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let settings = session.state().settings();
    writeln!(
        out,
        "Enter {} colors separated by spaces or commas, e.g. 'red blue g y'.",
        settings.code_length
    )?;
    writeln!(
        out,
        "Feedback: {} right color and position, {} right color wrong position, {} no match.",
        "●".bold(),
        "○",
        "·".dimmed()
    )?;
    writeln!(out, "Colors: {}", palette_legend(&settings.palette))?;
    writeln!(out, "Commands: new, help, quit")?;
    Ok(())
}

fn prompt<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let state = session.state();
    if state.is_over() {
        write!(out, "> ")?;
    } else {
        write!(
            out,
            "[{}/{}] > ",
            state.attempts_used() + 1,
            state.settings().max_attempts
        )?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameSettings;

    fn play(session: &mut Session, input: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_play(session, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_win_in_one() {
        let mut session = Session::new(GameSettings::default(), Some(42));
        let secret = session.state().secret().to_string();
        let output = play(&mut session, &format!("{}\nquit\n", secret));
        assert!(output.contains("You won!"));
        assert!(output.contains("in 1 attempt!"));
        assert!(output.contains("Games won: 1  lost: 0"));
    }

    #[test]
    fn test_invalid_guess_is_reported() {
        let mut session = Session::new(GameSettings::default(), Some(1));
        let output = play(&mut session, "red blue\nmagenta red red red\n");
        assert!(output.contains("Invalid guess: Invalid code: expected 4 colors, got 2"));
        assert!(output.contains("Invalid guess: Invalid color: magenta"));
        assert_eq!(session.state().attempts_used(), 0);
    }

    #[test]
    fn test_guess_after_game_over() {
        let settings = GameSettings {
            max_attempts: 1,
            ..GameSettings::default()
        };
        let mut session = Session::new(settings, Some(8));
        let output = play(&mut session, "r r r r\nb b b b\n");
        assert!(output.contains("The game is over"));
        assert_eq!(session.state().attempts_used(), 1);
    }

    #[test]
    fn test_new_command() {
        let mut session = Session::new(GameSettings::default(), Some(2));
        let output = play(&mut session, "r g b y\nnew\n");
        assert!(output.contains("New game started."));
        assert!(session.state().history().is_empty());
    }
}
