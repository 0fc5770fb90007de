mod config;
mod git;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use git::{GitCli, RepoProbe};
use render::RenderOptions;

/// Claude Code statusline renderer
#[derive(Parser)]
#[command(name = "ccline", version, about, long_about = None)]
struct Cli {
    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    no_color: bool,

    /// Use ASCII-only bar glyphs (no Unicode block characters)
    #[arg(long)]
    no_unicode: bool,
}

/// Entry point. Wraps `run_inner` in `catch_unwind` so that panics
/// are swallowed and the process always exits 0 -- a statusline that
/// fails visibly is worse than one that prints nothing.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| run_inner(cli)));

    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(_)) | Err(_) => {
            println!();
            Ok(())
        }
    }
}

fn run_inner(cli: Cli) -> Result<()> {
    // Because Claude Code pipes stdout (not a TTY), colored would normally
    // disable colors. Force them on unless --no-color or NO_COLOR is set.
    if cli.no_color || std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    } else {
        colored::control::set_override(true);
    }

    // Config load is silent: missing or broken file means defaults.
    let config = config::load_config();

    let session = session::parse_stdin();

    // Repository state comes from the process cwd, not the session JSON.
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let repo = GitCli.probe(&cwd);

    let opts = RenderOptions {
        bar_width: config.bar_width.max(1),
        use_unicode: !(cli.no_unicode || config.ascii),
    };

    // Exactly one line to stdout.
    println!("{}", render::render(&session, &repo, &opts));

    Ok(())
}
