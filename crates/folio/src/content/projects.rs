use log::warn;

use super::ProjectRecord;
use super::blocks::split_blocks;

/// Parse `projects.txt` into project records, in encounter order.
///
/// Block grammar: line 0 is the title, the last line is a comma-separated
/// image filename list, and the lines between are subtitle plus description
/// (or a single description line when the block has exactly three lines).
/// A line starting with `/*` cuts off the rest of its block.
pub fn parse(text: &str) -> Vec<ProjectRecord> {
    split_blocks(text)
        .iter()
        .enumerate()
        .filter_map(|(i, block)| parse_block(block, i))
        .collect()
}

fn parse_block(block: &str, index: usize) -> Option<ProjectRecord> {
    // An inline `/*` line silently truncates everything after it. This is
    // not a balanced comment; nothing reopens the block.
    let mut effective: Vec<&str> = Vec::new();
    for line in block.lines() {
        if line.trim().starts_with("/*") {
            break;
        }
        effective.push(line);
    }

    let lines: Vec<&str> = effective
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    if lines.len() < 3 {
        warn!(
            "project block {} is incomplete: expected at least title, description \
             and image list, got {} line(s)",
            index + 1,
            lines.len()
        );
        return None;
    }

    let title = lines[0].to_string();
    let images: Vec<String> = lines[lines.len() - 1]
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect();

    let (subtitle, description) = if lines.len() == 3 {
        (String::new(), lines[1].to_string())
    } else {
        (lines[1].to_string(), lines[2..lines.len() - 1].join("\n"))
    };

    Some(ProjectRecord {
        title,
        subtitle,
        description,
        images,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_line_block_has_no_subtitle() {
        let records = parse("Game\nA short description\nshot.png");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Game");
        assert_eq!(records[0].subtitle, "");
        assert_eq!(records[0].description, "A short description");
        assert_eq!(records[0].images, vec!["shot.png"]);
    }

    #[test]
    fn longer_block_splits_subtitle_and_description() {
        let text = "Engine\nSide project\nFirst paragraph.\nSecond paragraph.\na.png, b.png";
        let records = parse(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subtitle, "Side project");
        assert_eq!(records[0].description, "First paragraph.\nSecond paragraph.");
        assert_eq!(records[0].images, vec!["a.png", "b.png"]);
    }

    #[test]
    fn image_list_trims_and_drops_empties() {
        let records = parse("T\nD\n a.png ,, b.png , ");
        assert_eq!(records[0].images, vec!["a.png", "b.png"]);
    }

    #[test]
    fn short_block_is_dropped() {
        assert!(parse("Just a title\nand a description").is_empty());
    }

    #[test]
    fn comment_line_truncates_the_block() {
        let text = "Game\nDescription\nshot.png\n/* old notes\nleftover.png";
        let records = parse(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].images, vec!["shot.png"]);
    }

    #[test]
    fn comment_truncation_can_invalidate_a_block() {
        let text = "Game\n/* everything below is disabled\nDescription\nshot.png";
        assert!(parse(text).is_empty());
    }

    #[test]
    fn commented_out_blocks_are_skipped_entirely() {
        let text = "/* Old project\nGone\ngone.png\n\nKept\nStill here\nkeep.png";
        let records = parse(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Kept");
    }

    #[test]
    fn records_keep_encounter_order() {
        let text = "A\nd\n1.png\n\nB\nd\n2.png\n\nC\nd\n3.png";
        let titles: Vec<String> = parse(text).into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }
}
