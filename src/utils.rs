// Clips `s` for a one-line status message. Char-boundary safe.
pub fn clip(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = s[..end].to_string();
    out.push_str("… [truncated]");
    out
}

// One-line preview of a multi-line block.
pub fn preview_line(s: &str, max: usize) -> String {
    clip(s.lines().next().unwrap_or(""), max)
}
