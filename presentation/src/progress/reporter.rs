//! Progress reporting for debate execution

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use panel_application::DebateProgress;
use panel_domain::{SessionResult, Speaker, TeamKind, Turn};
use std::collections::HashMap;
use std::sync::Mutex;

/// Reports debate progress with one bar per team
///
/// Both team sessions run concurrently, so bars are kept in a map keyed
/// by team and updated from whichever task reports next.
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<TeamKind, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn team_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn with_bar(&self, team: TeamKind, f: impl FnOnce(&ProgressBar)) {
        if let Ok(bars) = self.bars.lock()
            && let Some(bar) = bars.get(&team)
        {
            f(bar);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateProgress for ProgressReporter {
    fn on_session_start(&self, team: TeamKind, budget: usize) {
        let bar = self.multi.add(ProgressBar::new(budget as u64));
        bar.set_style(Self::team_style());
        bar.set_prefix(team.to_string());
        bar.set_message("starting...");

        if let Ok(mut bars) = self.bars.lock() {
            bars.insert(team, bar);
        }
    }

    fn on_turn_start(&self, team: TeamKind, speaker: &Speaker, _seq: usize) {
        let message = format!("{} speaking...", speaker);
        self.with_bar(team, |bar| bar.set_message(message));
    }

    fn on_turn_complete(&self, team: TeamKind, turn: &Turn) {
        let message = format!("{} done", turn.speaker);
        self.with_bar(team, |bar| {
            bar.inc(1);
            bar.set_message(message);
        });
    }

    fn on_retry(&self, team: TeamKind, speaker: &Speaker, attempt: usize, _error: &str) {
        let message = format!("{} retry {}", speaker, attempt).yellow().to_string();
        self.with_bar(team, |bar| bar.set_message(message));
    }

    fn on_session_complete(&self, result: &SessionResult) {
        let message = if result.is_complete() {
            format!("{} in {} turns", "complete".green(), result.turns_used)
        } else {
            format!("{} at {} turns", "partial".yellow(), result.turns_used)
        };
        self.with_bar(result.team, |bar| bar.finish_with_message(message));
    }
}
