use super::threshold::ReminderThreshold;

/// A reminder ready to be delivered to the notification channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderNotification {
    pub event_id: String,
    pub threshold: ReminderThreshold,
    pub title: String,
    /// Pretty-printed start: date only for all-day events, localized
    /// date and time for timed events
    pub start_display: String,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl ReminderNotification {
    /// Render the Discord message content
    pub fn format_message(&self) -> String {
        let mut message = format!("⏰ **Tapahtuma {}:**\n", self.threshold.label());
        message.push_str(&format!("**{}**\n", self.title));
        message.push_str(&format!("📅 {}\n", self.start_display));

        if let Some(description) = &self.description {
            message.push_str(description);
            message.push('\n');
        }

        if let Some(link) = &self.link {
            message.push_str(link);
            message.push('\n');
        }

        message
    }
}

/// Strip HTML markup from a calendar event description.
///
/// Google Calendar descriptions may contain markup entered through the
/// web UI. Tags are dropped, line-breaking tags become newlines and the
/// common entities are decoded. The result is trimmed.
pub fn sanitize_description(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut tag = String::new();
    let mut in_tag = false;

    for c in raw.chars() {
        if in_tag {
            if c == '>' {
                in_tag = false;
                let name = tag
                    .trim_start_matches('/')
                    .split_whitespace()
                    .next()
                    .unwrap_or("")
                    .to_ascii_lowercase();
                if matches!(name.as_str(), "br" | "br/" | "p" | "div" | "li") {
                    text.push('\n');
                }
                tag.clear();
            } else {
                tag.push(c);
            }
        } else if c == '<' {
            in_tag = true;
        } else {
            text.push(c);
        }
    }

    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    // Collapse runs of blank lines left behind by block tags
    let mut result = String::with_capacity(text.len());
    let mut last_was_newline = false;
    for c in text.chars() {
        if c == '\n' {
            if !last_was_newline {
                result.push(c);
            }
            last_was_newline = true;
        } else {
            result.push(c);
            last_was_newline = false;
        }
    }

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification() -> ReminderNotification {
        ReminderNotification {
            event_id: "abc123".to_string(),
            threshold: ReminderThreshold::OneDay,
            title: "Kesäjuhla".to_string(),
            start_display: "11.06.2024 klo 15:00".to_string(),
            description: Some("Tervetuloa!".to_string()),
            link: Some("https://calendar.google.com/event?eid=abc123".to_string()),
        }
    }

    #[test]
    fn test_format_full_message() {
        let message = notification().format_message();
        assert_eq!(
            message,
            "⏰ **Tapahtuma huomenna:**\n\
             **Kesäjuhla**\n\
             📅 11.06.2024 klo 15:00\n\
             Tervetuloa!\n\
             https://calendar.google.com/event?eid=abc123\n"
        );
    }

    #[test]
    fn test_format_without_optional_fields() {
        let mut n = notification();
        n.threshold = ReminderThreshold::OneWeek;
        n.description = None;
        n.link = None;

        let message = n.format_message();
        assert!(message.starts_with("⏰ **Tapahtuma viikon päästä:**\n"));
        assert!(message.contains("📅 11.06.2024 klo 15:00\n"));
        assert!(!message.contains("Tervetuloa"));
        assert!(!message.contains("https://"));
    }

    #[test]
    fn test_sanitize_strips_tags() {
        assert_eq!(
            sanitize_description("<b>Bring</b> your <i>own</i> snacks"),
            "Bring your own snacks"
        );
    }

    #[test]
    fn test_sanitize_converts_breaks_to_newlines() {
        assert_eq!(sanitize_description("line one<br>line two"), "line one\nline two");
        assert_eq!(
            sanitize_description("<p>first</p><p>second</p>"),
            "first\nsecond"
        );
    }

    #[test]
    fn test_sanitize_decodes_entities() {
        assert_eq!(
            sanitize_description("fish &amp; chips &lt;today&gt;"),
            "fish & chips <today>"
        );
    }

    #[test]
    fn test_sanitize_plain_text_unchanged() {
        assert_eq!(sanitize_description("no markup here"), "no markup here");
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize_description("  <br> padded <br>  "), "padded");
    }
}
