use super::ExperienceRecord;
use super::blocks::split_blocks;

/// Parse `experience.txt` into position records.
///
/// The first three lines of a block are title, company and date range.
/// Later lines starting with `-` open a responsibility item; lines without
/// the marker continue the current item with a soft line break. Blocks with
/// fewer than three usable lines are dropped without a diagnostic.
pub fn parse(text: &str) -> Vec<ExperienceRecord> {
    split_blocks(text)
        .iter()
        .filter_map(|block| parse_block(block))
        .collect()
}

fn parse_block(block: &str) -> Option<ExperienceRecord> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with("//"))
        .collect();

    if lines.len() < 3 {
        return None;
    }

    let mut responsibilities = Vec::new();
    let mut i = 3;
    while i < lines.len() {
        if let Some(rest) = lines[i].strip_prefix('-') {
            let mut item = rest.trim().to_string();
            let mut j = i + 1;
            while j < lines.len() && !lines[j].starts_with('-') {
                item.push('\n');
                item.push_str(lines[j]);
                j += 1;
            }
            responsibilities.push(item);
            i = j;
        } else {
            // Stray line before the first `-` item; ignored.
            i += 1;
        }
    }

    Some(ExperienceRecord {
        title: lines[0].to_string(),
        company: lines[1].to_string(),
        date_range: lines[2].to_string(),
        responsibilities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_block_parses_without_responsibilities() {
        let records = parse("Developer\nAcme Corp\n2020 - 2022");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Developer");
        assert_eq!(records[0].company, "Acme Corp");
        assert_eq!(records[0].date_range, "2020 - 2022");
        assert!(records[0].responsibilities.is_empty());
    }

    #[test]
    fn responsibilities_split_on_dash_lines() {
        let text = "Dev\nAcme\n2020\n- Built the tooling\n- Shipped releases";
        let records = parse(text);
        assert_eq!(
            records[0].responsibilities,
            vec!["Built the tooling", "Shipped releases"]
        );
    }

    #[test]
    fn continuation_lines_join_with_soft_breaks() {
        let text = "Dev\nAcme\n2020\n- Built the tooling\nacross three platforms\n- Other work";
        let records = parse(text);
        assert_eq!(
            records[0].responsibilities,
            vec!["Built the tooling\nacross three platforms", "Other work"]
        );
    }

    #[test]
    fn line_comments_are_dropped() {
        let text = "Dev\n// placeholder\nAcme\n2020\n// hidden\n- Real item";
        let records = parse(text);
        assert_eq!(records[0].company, "Acme");
        assert_eq!(records[0].responsibilities, vec!["Real item"]);
    }

    #[test]
    fn incomplete_block_is_dropped_silently() {
        assert!(parse("Dev\nAcme").is_empty());
    }

    #[test]
    fn commented_out_block_is_skipped() {
        let text = "/* Old job\nGone\n2010\n\nDev\nAcme\n2020";
        let records = parse(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Dev");
    }
}
