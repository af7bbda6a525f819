use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Password };
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;
use textwrap::wrap;

use componentgpt::CodeArtifact;

/// Framework labels offered by the plugin panel
pub const SUGGESTED_FRAMEWORKS: &[&str] = &["Angular", "React", "Vue", "Svelte", "Lit", "Web Components"];

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text wrapped to the terminal width
pub fn print_text(text: &str) {
    let width = Term::stdout().size().1 as usize;
    for line in text.lines() {
        for wrapped_line in wrap(line, width.saturating_sub(10).max(20)) {
            println!("{}", wrapped_line);
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Show one generated block with its language label
pub fn display_artifact(artifact: &CodeArtifact) {
    print_header(&artifact.title);
    println!("Language: {}", artifact.language.cyan());
    // Code is printed verbatim, wrapping would break indentation
    println!("\n{}\n", artifact.code);
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Ask for the API key without echoing it
pub fn prompt_api_key() -> std::io::Result<String> {
    Password::with_theme(&get_theme())
        .with_prompt("OpenAI API key")
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}
