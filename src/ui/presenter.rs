use crossterm::style::{style, Color, Stylize};

use crate::core::{Configuration, GuessError, Response};
use crate::rules::GameResult;

#[derive(Clone, Copy, Debug)]
enum Tone {
    Bold,
    Info,
    Hint,
    Error,
    Success,
    Failure,
}

/// Formats every line the terminal session shows.
///
/// With color enabled, lines carry ANSI styling; otherwise they are plain
/// text.
#[derive(Clone, Copy, Debug)]
pub struct Presenter {
    color: bool,
}

impl Presenter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }

        let styled = style(text);
        let styled = match tone {
            Tone::Bold => styled.bold(),
            Tone::Info => styled.with(Color::Yellow),
            Tone::Hint => styled.with(Color::Grey).italic(),
            Tone::Error => styled.with(Color::Red).bold(),
            Tone::Success => styled.with(Color::Green).bold(),
            Tone::Failure => styled.with(Color::Magenta).bold(),
        };
        styled.to_string()
    }

    pub fn banner(&self, config: &Configuration) -> Result<Vec<String>, serde_json::Error> {
        let json = serde_json::to_string(config)?;

        Ok(vec![
            String::new(),
            format!("\t{}", self.paint("Ready to play?", Tone::Bold)),
            format!("\tConfiguration: {}", self.paint(&json, Tone::Info)),
            format!("\t{}", self.paint("CTRL+C to exit", Tone::Hint)),
        ])
    }

    pub fn prompt(&self, turn: u32) -> String {
        self.paint(&format!("\t(Turn {turn} > What is your number?"), Tone::Bold)
    }

    pub fn error(&self, error: &GuessError) -> String {
        format!("\t{}", self.paint(&format!("Error: {error}"), Tone::Error))
    }

    pub fn hint(&self, response: Response) -> String {
        let text = match response {
            Response::Higher | Response::Lower => format!("You should find a {response} number"),
            Response::MaxTriesExceeded { .. } => response.to_string(),
        };
        format!("\t{}", self.paint(&text, Tone::Info))
    }

    pub fn result(&self, result: GameResult, target: Option<i64>, response: Option<Response>) -> Vec<String> {
        let mut lines = vec![String::new()];

        if result.is_win() {
            let text = format!("Congratulations! You have won in {} turn(s)!", result.turns());
            lines.push(format!("\t{}", self.paint(&text, Tone::Success)));
            return lines;
        }

        if let Some(reason) = response {
            lines.push(format!("\t{}", self.paint(&reason.to_string(), Tone::Info)));
        }
        let text = match target {
            Some(target) => format!("Oh... you have lost. The number was {target}."),
            None => "Oh... you have lost.".to_string(),
        };
        lines.push(format!("\t{}", self.paint(&text, Tone::Failure)));

        lines
    }

    pub fn goodbye(&self) -> String {
        format!("\t{}", self.paint("Goodbye.", Tone::Hint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner() {
        let lines = Presenter::plain().banner(&Configuration::default()).unwrap();

        assert_eq!(lines[1], "\tReady to play?");
        assert_eq!(lines[2], "\tConfiguration: {\"maxNumber\":30,\"maxTries\":10}");
    }

    #[test]
    fn test_prompt_and_hints() {
        let p = Presenter::plain();

        assert_eq!(p.prompt(3), "\t(Turn 3 > What is your number?");
        assert_eq!(p.hint(Response::Higher), "\tYou should find a higher number");
        assert_eq!(p.hint(Response::Lower), "\tYou should find a lower number");
        assert_eq!(
            p.error(&GuessError::BelowMinimum),
            "\tError: Your number must be higher than 0"
        );
    }

    #[test]
    fn test_result_lines() {
        let p = Presenter::plain();

        let won = p.result(GameResult::Won { turns: 2 }, Some(7), None);
        assert!(won.iter().any(|l| l.contains("won in 2 turn(s)")));
        assert!(!won.iter().any(|l| l.contains("lost")));

        let lost = p.result(
            GameResult::Lost { turns: 2 },
            Some(7),
            Some(Response::MaxTriesExceeded { max_tries: 2 }),
        );
        assert!(lost.iter().any(|l| l.contains("Max tries exceeded, it is the 2th turn")));
        assert!(lost.iter().any(|l| l.contains("The number was 7.")));
    }

    #[test]
    fn test_color_adds_escape_codes() {
        let colored = Presenter::new(true).prompt(1);
        let plain = Presenter::plain().prompt(1);

        assert!(colored.contains("(Turn 1 > What is your number?"));
        assert_ne!(colored, plain);
    }
}
