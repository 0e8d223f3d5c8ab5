use crate::model::{Code, Color, Feedback, PegResult};
use colored::{ColoredString, Colorize};

/// A filled peg in the color it stands for
pub fn peg(color: Color) -> ColoredString {
    let (r, g, b) = color.rgb();
    "●".truecolor(r, g, b)
}

pub fn code_pegs(code: &Code) -> String {
    code.iter()
        .map(|c| peg(*c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Key pegs: `●` correct, `○` wrong position, `·` incorrect
pub fn feedback_pegs(feedback: &Feedback) -> String {
    feedback
        .results()
        .iter()
        .map(|r| match r {
            PegResult::Correct => "●".bold().to_string(),
            PegResult::WrongPosition => "○".to_string(),
            PegResult::Incorrect => "·".dimmed().to_string(),
        })
        .collect()
}

pub fn feedback_summary(feedback: &Feedback) -> String {
    format!(
        "{} correct, {} wrong position",
        feedback.correct(),
        feedback.wrong_position()
    )
}

pub fn palette_legend(palette: &[Color]) -> String {
    palette
        .iter()
        .map(|c| match c.alias() {
            Some(a) => format!("{} {} ({})", peg(*c), c, a),
            None => format!("{} {}", peg(*c), c),
        })
        .collect::<Vec<_>>()
        .join("  ")
}
