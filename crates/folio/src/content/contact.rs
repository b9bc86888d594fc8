use super::{ContactEntry, ContactKind};

/// Parse `contact.txt` line by line. Blank lines and `//` lines are skipped;
/// every other line yields exactly one entry.
pub fn parse(text: &str) -> Vec<ContactEntry> {
    text.lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with("//"))
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> ContactEntry {
    let Some((key, value)) = line.split_once(": ") else {
        return ContactEntry {
            kind: ContactKind::Other,
            label: line.to_string(),
            target: None,
        };
    };

    let normalized: String = key
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let kind = ContactKind::from_key(&normalized);

    let target = match kind {
        ContactKind::Email => Some(format!("mailto:{value}")),
        ContactKind::Phone => {
            let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
            Some(format!("tel:{digits}"))
        }
        _ if value.starts_with("http") => Some(value.to_string()),
        _ if value.starts_with("www") => Some(format!("https://{value}")),
        _ => None,
    };

    // Entries without a usable target show the whole line, key included;
    // linked entries show only the value.
    let label = if target.is_some() {
        value.to_string()
    } else {
        line.to_string()
    };

    ContactEntry { kind, label, target }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_becomes_mailto() {
        let entries = parse("Email: me@x.com");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, ContactKind::Email);
        assert_eq!(entries[0].label, "me@x.com");
        assert_eq!(entries[0].target.as_deref(), Some("mailto:me@x.com"));
        assert!(!entries[0].opens_externally());
    }

    #[test]
    fn phone_strips_whitespace_in_target() {
        let entries = parse("Phone: +46 70 123 45 67");
        assert_eq!(entries[0].label, "+46 70 123 45 67");
        assert_eq!(entries[0].target.as_deref(), Some("tel:+46701234567"));
    }

    #[test]
    fn www_value_gets_https_prefix() {
        let entries = parse("Site: www.x.com");
        assert_eq!(entries[0].target.as_deref(), Some("https://www.x.com"));
        assert!(entries[0].opens_externally());
    }

    #[test]
    fn http_value_is_used_verbatim() {
        let entries = parse("GitHub: https://github.com/someone");
        assert_eq!(entries[0].kind, ContactKind::GitHub);
        assert_eq!(
            entries[0].target.as_deref(),
            Some("https://github.com/someone")
        );
    }

    #[test]
    fn value_with_extra_colons_is_rejoined() {
        let entries = parse("Email: a: b@x.com");
        assert_eq!(entries[0].label, "a: b@x.com");
        assert_eq!(entries[0].target.as_deref(), Some("mailto:a: b@x.com"));
    }

    #[test]
    fn unknown_kind_without_url_shows_the_whole_line() {
        let entries = parse("Discord: someone#1234");
        assert_eq!(entries[0].kind, ContactKind::Other);
        assert_eq!(entries[0].target, None);
        assert_eq!(entries[0].label, "Discord: someone#1234");
    }

    #[test]
    fn kind_key_is_normalized() {
        let entries = parse("Itch.io: https://someone.itch.io");
        assert_eq!(entries[0].kind, ContactKind::ItchIo);
    }

    #[test]
    fn colonless_line_is_plain_text() {
        let entries = parse("Ask me anything");
        assert_eq!(entries[0].kind, ContactKind::Other);
        assert_eq!(entries[0].label, "Ask me anything");
        assert_eq!(entries[0].target, None);
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let entries = parse("// internal\n\nEmail: me@x.com\n");
        assert_eq!(entries.len(), 1);
    }
}
