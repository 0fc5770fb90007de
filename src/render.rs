use std::fmt::Write as FmtWrite;
use std::path::Path;

use colored::Colorize;

use crate::git::RepoStatus;
use crate::session::SessionSnapshot;

/// Rendering knobs resolved from flags and config before `render` runs.
#[derive(Debug)]
pub struct RenderOptions {
    pub bar_width: usize,
    pub use_unicode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bar_width: 8,
            use_unicode: true,
        }
    }
}

/// Context usage as an integer percentage, floored, clamped to 100.
/// Token counts larger than the window are expected at runtime, not an error.
pub fn percent_used(total_tokens: u64, window: u64) -> u8 {
    if window == 0 {
        return 0;
    }
    // Widen before multiplying so u64::MAX token counts cannot overflow.
    let pct = (total_tokens as u128 * 100) / window as u128;
    pct.min(100) as u8
}

/// Fixed-width progress bar: `filled` full glyphs then the rest empty,
/// no separator. `filled = floor(percent * width / 100)`.
pub fn render_bar(percent: u8, width: usize, use_unicode: bool) -> String {
    let filled = (percent as usize * width / 100).min(width);
    let (full, empty) = if use_unicode {
        ('\u{2588}', '\u{2591}') // █ ░
    } else {
        ('#', '-')
    };

    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push(full);
    }
    for _ in filled..width {
        bar.push(empty);
    }
    bar
}

/// Final path component of the session's working directory.
/// Empty path or no final component falls back to the literal `~`.
pub fn folder_name(dir: &str) -> String {
    Path::new(dir)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "~".to_string())
}

/// API duration in seconds with exactly one fraction digit (e.g. "4.5").
pub fn format_seconds(ms: u64) -> String {
    format!("{:.1}", ms as f64 / 1000.0)
}

/// Cost with exactly two fraction digits. Uses Rust's default float
/// formatting, which rounds half-to-even on the decimal expansion.
pub fn format_cost(cost_usd: f64) -> String {
    format!("${:.2}", cost_usd)
}

/// Trailing git segment: " | no repo" outside a work tree, " | <branch>"
/// on a branch, empty when detached.
pub fn git_segment(repo: &RepoStatus) -> String {
    if !repo.is_repository {
        return " | no repo".to_string();
    }
    match &repo.branch {
        Some(branch) => format!(" | {}", branch),
        None => String::new(),
    }
}

/// Color the usage chunk by how full the context window is.
/// Thresholds match the rest of our tooling: <50% green, <80% yellow, red above.
fn colorize_usage(text: String, percent: u8) -> String {
    if percent >= 80 {
        text.bright_red().to_string()
    } else if percent >= 50 {
        text.yellow().to_string()
    } else {
        text.green().to_string()
    }
}

/// Main render function. Returns the final single-line string.
pub fn render(session: &SessionSnapshot, repo: &RepoStatus, opts: &RenderOptions) -> String {
    let percent = percent_used(session.total_tokens(), session.context_window_size());
    let bar = render_bar(percent, opts.bar_width, opts.use_unicode);
    let usage = colorize_usage(format!("{} {}%", bar, percent), percent);

    let mut out = String::with_capacity(128);
    let _ = write!(
        out,
        "{}/ | {} | {} | {} | {}s | +{} -{}",
        folder_name(session.current_dir()),
        session.model_display_name(),
        usage,
        format_cost(session.cost_usd()),
        format_seconds(session.api_duration_ms()),
        session.lines_added(),
        session.lines_removed(),
    );
    out.push_str(&git_segment(repo));
    out
}
