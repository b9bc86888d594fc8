/// Split raw text into entry blocks separated by one blank line (two
/// consecutive line breaks). Blocks that are empty after trimming, or whose
/// trimmed form starts with `/*`, are discarded.
///
/// Both the project and experience files use this block structure.
pub fn split_blocks(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .filter(|block| {
            let trimmed = block.trim();
            !trimmed.is_empty() && !trimmed.starts_with("/*")
        })
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_single_blank_line() {
        let blocks = split_blocks("one\ntwo\n\nthree");
        assert_eq!(blocks, vec!["one\ntwo", "three"]);
    }

    #[test]
    fn tolerates_crlf() {
        let blocks = split_blocks("a\r\n\r\nb");
        assert_eq!(blocks, vec!["a", "b"]);
    }

    #[test]
    fn drops_empty_and_commented_blocks() {
        let blocks = split_blocks("first\n\n   \n\n/* disabled\nstuff\n\nlast");
        assert_eq!(blocks, vec!["first", "last"]);
    }

    #[test]
    fn extra_blank_lines_produce_no_phantom_blocks() {
        let blocks = split_blocks("a\n\n\nb");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].trim(), "b");
    }
}
