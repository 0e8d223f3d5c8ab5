use crate::game::{FeedbackLayout, score_with};
use crate::model::Code;
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::{code_pegs, feedback_pegs, feedback_summary};

pub fn handle_score(
    ctx: &CommandContext,
    secret: &str,
    guess: &str,
    positional: bool,
    json: bool,
) -> Result<()> {
    let settings = &ctx.settings;
    let secret = Code::parse_for(secret, settings.code_length, &settings.palette)
        .context("Invalid secret")?;
    let guess = Code::parse_for(guess, settings.code_length, &settings.palette)
        .context("Invalid guess")?;

    let layout = if positional {
        FeedbackLayout::Positional
    } else {
        settings.feedback
    };
    let feedback = score_with(&secret, &guess, layout);

    if json {
        let out = serde_json::json!({
            "secret": secret,
            "guess": guess,
            "feedback": feedback,
            "correct": feedback.correct(),
            "wrong_position": feedback.wrong_position(),
            "solved": feedback.is_solved(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}  {}", code_pegs(&guess), feedback_pegs(&feedback));
        println!("{}", feedback_summary(&feedback));
        if feedback.is_solved() {
            println!("{}", "Solved".green().bold());
        }
    }
    Ok(())
}
