//! Small text primitives shared by the shell renderer.

#![allow(missing_docs)]

/// Render a `[LABEL]` status badge.
#[must_use]
pub fn status_badge(label: &str) -> String {
    format!("[{}]", label.to_ascii_uppercase())
}

/// Render a section header with a trailing rule: `── Title ──────`.
#[must_use]
pub fn section_header(title: &str, width: usize) -> String {
    let prefix = format!("── {title} ");
    let used = prefix.chars().count();
    let fill = width.saturating_sub(used);
    format!("{prefix}{}", "─".repeat(fill))
}

/// Render a `key:description` hint for the footer.
#[must_use]
pub fn key_hint(keys: &str, description: &str) -> String {
    format!("{keys}:{description}")
}

/// Center `text` within `width` columns (left-biased on odd remainders).
#[must_use]
pub fn center_text(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_owned();
    }
    let pad = (width - len) / 2;
    format!("{}{text}", " ".repeat(pad))
}

/// Truncate a line to `width` characters.
#[must_use]
pub fn clip_line(line: &str, width: usize) -> String {
    line.chars().take(width).collect()
}

/// Human-readable duration: `45s`, `3m12s`, `2h05m`.
#[must_use]
pub fn human_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m{:02}s", secs / 60, secs % 60)
    } else {
        format!("{}h{:02}m", secs / 3600, (secs % 3600) / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_uppercases() {
        assert_eq!(status_badge("pausing"), "[PAUSING]");
    }

    #[test]
    fn section_header_fills_to_width() {
        let header = section_header("Products", 20);
        assert_eq!(header.chars().count(), 20);
        assert!(header.starts_with("── Products "));
    }

    #[test]
    fn center_text_is_left_biased() {
        assert_eq!(center_text("ab", 5), " ab");
        assert_eq!(center_text("toolong", 3), "toolong");
    }

    #[test]
    fn clip_line_counts_chars_not_bytes() {
        assert_eq!(clip_line("⌂▦≻◫", 2), "⌂▦");
    }

    #[test]
    fn durations_format_by_magnitude() {
        assert_eq!(human_duration(45), "45s");
        assert_eq!(human_duration(192), "3m12s");
        assert_eq!(human_duration(7500), "2h05m");
    }
}
