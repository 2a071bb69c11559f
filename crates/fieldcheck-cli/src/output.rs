use fieldcheck_types::{CheckStatus, TestReport};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Human-readable rendering of the report. Colors only on a terminal.
pub fn print_report(report: &TestReport) {
    let colored = std::io::stdout().is_terminal();

    for outcome in report.outcomes() {
        match outcome.detail() {
            Some(detail) => println!(
                "{:<24} {}  ({})",
                outcome.name(),
                paint(outcome.status(), colored),
                detail
            ),
            None => println!("{:<24} {}", outcome.name(), paint(outcome.status(), colored)),
        }
    }

    println!();
    println!("Result: {}", paint(report.verdict(), colored));
}

fn paint(status: CheckStatus, colored: bool) -> String {
    if !colored {
        return status.to_string();
    }
    match status {
        CheckStatus::Ok => status.green().to_string(),
        CheckStatus::Partial => status.yellow().to_string(),
        CheckStatus::Failed => status.red().to_string(),
    }
}
