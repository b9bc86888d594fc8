/// Parse `gallery.txt`: one image filename per line, `#` starts a comment
/// line. Order is preserved and duplicates are kept.
pub fn parse(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blanks_are_excluded() {
        let names = parse("a.png\n# section break\n\nb.jpg\nc.webp");
        assert_eq!(names, vec!["a.png", "b.jpg", "c.webp"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let names = parse("a.png\nb.png\na.png");
        assert_eq!(names, vec!["a.png", "b.png", "a.png"]);
    }

    #[test]
    fn lines_are_trimmed() {
        assert_eq!(parse("  spaced.png  "), vec!["spaced.png"]);
    }
}
