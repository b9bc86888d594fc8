use super::SkillCategory;

/// Parse `skills.txt` line by line.
///
/// A line containing a colon names a category: the text before the first
/// colon is the name, the remainder a comma-separated item list. Colon-less
/// lines all feed one implicit unnamed category, created where its first
/// member appears; its members need not be contiguous in the file.
pub fn parse(text: &str) -> Vec<SkillCategory> {
    let mut categories: Vec<SkillCategory> = Vec::new();
    let mut standalone: Option<usize> = None;

    for raw in text.lines() {
        if raw.trim().is_empty() || raw.starts_with("//") {
            continue;
        }
        let line = raw.trim();

        if let Some((name, rest)) = line.split_once(':') {
            let items = rest
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect();
            categories.push(SkillCategory {
                name: Some(name.trim().to_string()),
                items,
            });
        } else {
            let idx = *standalone.get_or_insert_with(|| {
                categories.push(SkillCategory {
                    name: None,
                    items: Vec::new(),
                });
                categories.len() - 1
            });
            categories[idx].items.push(line.to_string());
        }
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_standalone_categories() {
        let cats = parse("Languages: Go, Rust\nCooking");
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[0].name.as_deref(), Some("Languages"));
        assert_eq!(cats[0].items, vec!["Go", "Rust"]);
        assert_eq!(cats[1].name, None);
        assert_eq!(cats[1].items, vec!["Cooking"]);
    }

    #[test]
    fn standalone_items_aggregate_across_the_file() {
        let cats = parse("Drawing\nTools: Git\nWriting");
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[0].name, None);
        assert_eq!(cats[0].items, vec!["Drawing", "Writing"]);
        assert_eq!(cats[1].name.as_deref(), Some("Tools"));
    }

    #[test]
    fn items_are_trimmed_and_empties_dropped() {
        let cats = parse("Langs:  C ,, Zig ,");
        assert_eq!(cats[0].items, vec!["C", "Zig"]);
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        let cats = parse("\n// note to self\nTools: Git\n\n");
        assert_eq!(cats.len(), 1);
    }

    #[test]
    fn category_with_no_items_still_appears() {
        let cats = parse("Future plans:");
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].name.as_deref(), Some("Future plans"));
        assert!(cats[0].items.is_empty());
    }
}
