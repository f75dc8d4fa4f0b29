//! Block splitter
//!
//! Divides raw export text into transaction blocks on a literal marker.

use crate::types::RawBlock;

/// Split `text` into trimmed, non-empty blocks numbered from 0
///
/// The delimiter never appears in block text. Whitespace-only segments
/// (leading marker, trailing marker, consecutive markers) are dropped and do
/// not consume an ordinal. An empty delimiter yields the whole text as one
/// block.
pub fn split_blocks(text: &str, delimiter: &str) -> Vec<RawBlock> {
    let segments: Box<dyn Iterator<Item = &str>> = if delimiter.is_empty() {
        Box::new(std::iter::once(text))
    } else {
        Box::new(text.split(delimiter))
    };

    segments
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .enumerate()
        .map(|(index, segment)| RawBlock::new(index, segment))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const MARKER: &str = "[SAHAL]";

    fn texts(blocks: &[RawBlock]) -> Vec<&str> {
        blocks.iter().map(|b| b.text.as_str()).collect()
    }

    #[rstest]
    #[case::empty("", &[])]
    #[case::whitespace_only("  \n\t ", &[])]
    #[case::no_marker("  one block  ", &["one block"])]
    #[case::marker_at_start("[SAHAL]a[SAHAL]b", &["a", "b"])]
    #[case::marker_at_end("a[SAHAL]b[SAHAL]", &["a", "b"])]
    #[case::consecutive_markers("a[SAHAL][SAHAL]  [SAHAL]b", &["a", "b"])]
    #[case::only_markers("[SAHAL][SAHAL]", &[])]
    fn test_split_blocks(#[case] input: &str, #[case] expected: &[&str]) {
        let blocks = split_blocks(input, MARKER);
        assert_eq!(texts(&blocks), expected);
    }

    #[test]
    fn test_indices_are_consecutive_after_dropping_empty() {
        let blocks = split_blocks("[SAHAL]\n\n[SAHAL] x [SAHAL]\n[SAHAL] y ", MARKER);
        let indices: Vec<_> = blocks.iter().map(|b| b.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(texts(&blocks), vec!["x", "y"]);
    }

    #[test]
    fn test_multiline_block_keeps_inner_newlines() {
        let blocks = split_blocks("[SAHAL]\nline one\nline two\n", MARKER);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "line one\nline two");
    }

    #[test]
    fn test_rejoin_reproduces_trimmed_source() {
        let source = "first[SAHAL]second[SAHAL]third";
        let blocks = split_blocks(source, MARKER);
        let rejoined = texts(&blocks).join(MARKER);
        assert_eq!(rejoined, source);
    }

    #[test]
    fn test_empty_delimiter_is_single_block() {
        let blocks = split_blocks(" a[SAHAL]b ", "");
        assert_eq!(texts(&blocks), vec!["a[SAHAL]b"]);
    }
}
