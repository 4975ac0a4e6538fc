use super::{render_error, render_since};
use crate::core::{ChatMachine, ChatPhase, MentorClient, Modifiers};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::debug;

const EXIT_COMMAND: &str = "/sair";
/// A line ending in this character is a modified Enter: the draft continues on the next line
const LINE_BREAK: char = '\\';

fn display_welcome_message() {
    println!("{}", "\nMOVE · Mentor Cristão".bold().cyan());
    println!(
        "{}",
        format!("\"Lâmpada para os meus pés é tua palavra\"  (digite {} para sair)", EXIT_COMMAND)
            .italic()
            .dimmed()
    );
    println!(
        "{}",
        format!("Termine a linha com {} para continuar na linha seguinte.", LINE_BREAK).dimmed()
    );
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("-\\|/")
        .template("{spinner} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message("MOVE está escrevendo...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Splits a typed line into its text and the modifiers of the Enter that ended it
fn read_enter(line: &str) -> (&str, Modifiers) {
    match line.strip_suffix(LINE_BREAK) {
        Some(text) => (
            text,
            Modifiers {
                shift: true,
                ..Modifiers::default()
            },
        ),
        None => (line, Modifiers::default()),
    }
}

fn print_since(machine: &ChatMachine, shown: &mut usize) {
    for line in render_since(machine.state(), *shown) {
        println!("{}", line);
    }
    *shown = machine.state().messages.len();

    if machine.phase() == ChatPhase::Error {
        if let Some(error) = &machine.state().error {
            println!("{}", render_error(error));
        }
    }
}

/// Runs the interactive chat until the user types `/sair` or input ends
pub async fn run_chat(machine: &mut ChatMachine, client: &dyn MentorClient, name: Option<&str>) {
    display_welcome_message();
    let mut shown = 0;
    print_since(machine, &mut shown);

    let mut draft = String::new();
    loop {
        let prompt = if draft.is_empty() { "Você" } else { "..." };
        let line: String = match Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(e) => {
                debug!("Input closed: {}", e);
                break;
            }
        };
        if draft.is_empty() && line.trim() == EXIT_COMMAND {
            break;
        }

        let (text, modifiers) = read_enter(&line);
        if !draft.is_empty() {
            draft.push('\n');
        }
        draft.push_str(text);

        let Some(turn) = machine.on_enter(modifiers, &draft) else {
            if !modifiers.any() {
                draft.clear();
            }
            continue;
        };
        draft.clear();
        // The prompt already echoed the user's text.
        shown += 1;

        let spinner = (machine.phase() == ChatPhase::Sending).then(thinking_spinner);
        machine.resolve(turn, client, name).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        print_since(machine, &mut shown);
    }

    println!("{}", "Que Deus abençoe sua caminhada!".green());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_backslash_is_shift_enter() {
        let (text, modifiers) = read_enter("Primeira linha\\");
        assert_eq!(text, "Primeira linha");
        assert!(modifiers.shift);

        let (text, modifiers) = read_enter("Como orar?");
        assert_eq!(text, "Como orar?");
        assert!(!modifiers.any());
    }
}
