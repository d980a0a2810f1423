use crossterm::style::Stylize;

/// Win/loss/tie tally from the remote player's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Tally {
    /// Fold per-game (remote, opponent) score pairs into a tally.
    pub fn from_scores(scores: &[(u32, u32)]) -> Self {
        let mut tally = Tally::default();
        for &(own, opponent) in scores {
            if own > opponent {
                tally.wins += 1;
            } else if own < opponent {
                tally.losses += 1;
            } else {
                tally.ties += 1;
            }
        }
        tally
    }

    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

/// Render the tally as a `width`-character bar (green wins, red losses,
/// yellow ties) followed by a summary line with percentages.
pub fn render_bar(tally: &Tally, width: usize) -> String {
    let total = tally.total();
    if total == 0 {
        return String::new();
    }
    let frac_win = tally.wins as f64 / total as f64;
    let frac_lose = tally.losses as f64 / total as f64;
    let frac_tie = tally.ties as f64 / total as f64;

    let win_chars = (frac_win * width as f64).round() as usize;
    let lose_chars = (frac_lose * width as f64).round() as usize;
    let tie_chars = width.saturating_sub(win_chars + lose_chars);

    let mut out = String::new();
    out.push_str(&"█".repeat(win_chars).green().to_string());
    out.push_str(&"█".repeat(lose_chars).red().to_string());
    out.push_str(&"█".repeat(tie_chars).yellow().to_string());
    out.push('\n');
    out.push_str(&format!(
        "{}: {} ({:.0}%), {}: {} ({:.0}%), {}: {} ({:.0}%)\n",
        "Wins".green(),
        tally.wins,
        frac_win * 100.0,
        "Losses".red(),
        tally.losses,
        frac_lose * 100.0,
        "Ties".yellow(),
        tally.ties,
        frac_tie * 100.0,
    ));
    out
}

/// Current terminal width, with a sane fallback when not attached to a tty.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| cols as usize)
        .unwrap_or(80)
}
