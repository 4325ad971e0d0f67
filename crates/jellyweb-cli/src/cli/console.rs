//! Terminal stand-ins for the browser collaborators.

use std::io::{self, BufRead, Write};

use jellyweb_core::collab::{Confirm, Navigator};

/// Asks on stderr and reads `y`/`yes` from stdin; anything else declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        is_yes(&line)
    }
}

/// Accepts without asking (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Fixed location; navigation requests are printed instead of followed.
pub struct ConsoleNavigator {
    location: String,
}

impl ConsoleNavigator {
    pub fn at(location: &str) -> Self {
        Self {
            location: location.to_string(),
        }
    }
}

impl Navigator for ConsoleNavigator {
    fn current_location(&self) -> String {
        self.location.clone()
    }

    fn replace(&mut self, url: &str) {
        println!("Redirect: {url}");
    }

    fn reload(&mut self) {
        println!("Reload: {}", self.location);
    }
}
