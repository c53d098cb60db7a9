//! Workplace chat assistant: analysis modes, prompt, and canned replies.

/// Tuning constants for the chat reply generation.
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 500;

pub const SYSTEM_PROMPT: &str = "You are an expert workplace analyst and \
    career advisor. Provide concise, actionable insights with specific \
    recommendations.";

/// Known analysis modes. Unknown modes fall back to `general`.
pub const ANALYSIS_MODES: &[&str] = &["general", "productivity", "team", "career"];

/// Build the user prompt for a chat message under a given analysis mode.
pub fn user_prompt(mode: &str, message: &str) -> String {
    format!("Analyze this workplace situation ({mode}): {message}")
}

/// Canned reply used when the upstream model is unavailable or fails.
pub fn fallback_reply(mode: &str) -> String {
    let text = match mode {
        "productivity" => {
            "Productivity analysis: break large tasks into smaller chunks, \
             use time-blocking for deep work, minimize distractions during \
             focused periods, and take regular breaks to maintain energy. \
             Applied consistently these habits can improve efficiency by \
             20-30%."
        }
        "team" => {
            "Team dynamics analysis: foster open communication channels, \
             clarify roles and responsibilities, celebrate wins together, \
             and address conflicts promptly and professionally. Strong team \
             dynamics lead to better outcomes and higher satisfaction."
        }
        "career" => {
            "Career development insights: identify skill gaps and create a \
             learning plan, seek mentorship from experienced professionals, \
             take on challenging projects to build experience, and network \
             within and outside your organization."
        }
        _ => {
            "Thank you for sharing. Document all relevant details and \
             communications, consider discussing with your supervisor or HR \
             if appropriate, and focus on solutions that align with \
             organizational goals. Evaluate the situation objectively and \
             act according to your company's policies."
        }
    };
    text.to_string()
}

/// Normalize a client-supplied analysis mode to a known one.
pub fn normalize_mode(mode: Option<&str>) -> &'static str {
    match mode {
        Some("productivity") => "productivity",
        Some("team") => "team",
        Some("career") => "career",
        _ => "general",
    }
}
