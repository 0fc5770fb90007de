use std::io::Read;

use serde::Deserialize;

/// Session metadata piped by Claude Code on each statusline tick.
/// All fields are optional -- Claude Code may omit any of them, and
/// the entire blob may be absent, empty, or malformed.
#[derive(Debug, Deserialize, Default)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub model: Option<Model>,
    #[serde(default)]
    pub context_window: Option<ContextWindow>,
    #[serde(default)]
    pub cost: Option<SessionCost>,
    #[serde(default)]
    pub workspace: Option<Workspace>,
    // session_id and transcript_path are not deserialized -- sensitive,
    // unused by rendering. serde_json silently drops unknown fields.
}

#[derive(Debug, Deserialize, Default)]
pub struct Model {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ContextWindow {
    #[serde(default)]
    pub total_input_tokens: Option<u64>,
    #[serde(default)]
    pub total_output_tokens: Option<u64>,
    #[serde(default)]
    pub context_window_size: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SessionCost {
    #[serde(default)]
    pub total_cost_usd: Option<f64>,
    #[serde(default)]
    pub total_lines_added: Option<u64>,
    #[serde(default)]
    pub total_lines_removed: Option<u64>,
    #[serde(default)]
    pub total_api_duration_ms: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Workspace {
    #[serde(default)]
    pub current_dir: Option<String>,
}

/// Window size Claude Code uses when the session does not report one.
const DEFAULT_CONTEXT_WINDOW: u64 = 200_000;

impl SessionSnapshot {
    pub fn model_display_name(&self) -> &str {
        self.model
            .as_ref()
            .and_then(|m| m.display_name.as_deref())
            .unwrap_or("Claude")
    }

    pub fn total_tokens(&self) -> u64 {
        let ctx = self.context_window.as_ref();
        let input = ctx.and_then(|c| c.total_input_tokens).unwrap_or(0);
        let output = ctx.and_then(|c| c.total_output_tokens).unwrap_or(0);
        input.saturating_add(output)
    }

    pub fn context_window_size(&self) -> u64 {
        self.context_window
            .as_ref()
            .and_then(|c| c.context_window_size)
            .unwrap_or(DEFAULT_CONTEXT_WINDOW)
    }

    pub fn cost_usd(&self) -> f64 {
        self.cost
            .as_ref()
            .and_then(|c| c.total_cost_usd)
            .unwrap_or(0.0)
    }

    pub fn lines_added(&self) -> u64 {
        self.cost
            .as_ref()
            .and_then(|c| c.total_lines_added)
            .unwrap_or(0)
    }

    pub fn lines_removed(&self) -> u64 {
        self.cost
            .as_ref()
            .and_then(|c| c.total_lines_removed)
            .unwrap_or(0)
    }

    pub fn api_duration_ms(&self) -> u64 {
        self.cost
            .as_ref()
            .and_then(|c| c.total_api_duration_ms)
            .unwrap_or(0)
    }

    pub fn current_dir(&self) -> &str {
        self.workspace
            .as_ref()
            .and_then(|w| w.current_dir.as_deref())
            .unwrap_or("")
    }
}

/// Parse session JSON from stdin. Returns default on empty/malformed input.
/// Reads at most 64KB from stdin to avoid blocking on large inputs.
pub fn parse_stdin() -> SessionSnapshot {
    let mut buf = Vec::with_capacity(65536);
    let _ = std::io::stdin().lock().take(65536).read_to_end(&mut buf);

    if buf.is_empty() {
        return SessionSnapshot::default();
    }

    serde_json::from_slice(&buf).unwrap_or_default()
}
