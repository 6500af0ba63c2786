//! Splitpoint slicer
//!
//! Cuts a string into contiguous chunks at absolute character offsets. The
//! slicer is the only place where character offsets are turned into byte
//! offsets, so multi-byte characters are never cut in half.

use super::chunk::Chunk;
use super::span::Span;

/// Slices `text` at `splitpoints`.
///
/// `origin` is the absolute offset of the first character of `text`.
/// Splitpoints must be sorted and lie within `[origin, origin + len]`. The
/// output always holds `splitpoints.len() + 1` chunks whose texts concatenate
/// back to `text`.
pub fn slice_at_splitpoints(text: &str, splitpoints: &[usize], origin: usize) -> Vec<Chunk> {
    let end = origin + text.chars().count();

    debug_assert!(
        splitpoints.windows(2).all(|w| w[0] <= w[1]),
        "splitpoints must be sorted"
    );
    debug_assert!(
        splitpoints.iter().all(|&p| origin <= p && p <= end),
        "splitpoints must lie within [{origin}, {end}]"
    );

    let byte_offsets = char_to_byte_offsets(text, splitpoints.iter().map(|&p| p - origin));

    let mut chunks = Vec::with_capacity(splitpoints.len() + 1);
    let mut left = origin;
    let mut left_byte = 0;
    for (&point, &byte) in splitpoints.iter().zip(&byte_offsets) {
        chunks.push(Chunk::new(&text[left_byte..byte], Span::new(left, point)));
        left = point;
        left_byte = byte;
    }
    chunks.push(Chunk::new(&text[left_byte..], Span::new(left, end)));

    chunks
}

/// Maps sorted character positions (relative to the start of `text`) to byte
/// offsets in a single pass. Positions past the end map to `text.len()`.
pub(crate) fn char_to_byte_offsets(
    text: &str,
    positions: impl IntoIterator<Item = usize>,
) -> Vec<usize> {
    let mut boundaries = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .enumerate()
        .peekable();

    positions
        .into_iter()
        .map(|position| {
            while let Some(&(index, byte)) = boundaries.peek() {
                if index == position {
                    return byte;
                }
                boundaries.next();
            }
            text.len()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(chunks: &[Chunk]) -> Vec<&str> {
        chunks.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_slice_basic() {
        let chunks = slice_at_splitpoints("ABCDEFGHIJ", &[3, 7], 0);

        assert_eq!(texts(&chunks), vec!["ABC", "DEFG", "HIJ"]);
        assert_eq!(chunks[0].span, Span::new(0, 3));
        assert_eq!(chunks[1].span, Span::new(3, 7));
        assert_eq!(chunks[2].span, Span::new(7, 10));
    }

    #[test]
    fn test_slice_without_splitpoints() {
        let chunks = slice_at_splitpoints("hello", &[], 0);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "hello");
        assert_eq!(chunks[0].span, Span::new(0, 5));
    }

    #[test]
    fn test_slice_with_origin() {
        let chunks = slice_at_splitpoints("world", &[12], 10);
        assert_eq!(texts(&chunks), vec!["wo", "rld"]);
        assert_eq!(chunks[0].span, Span::new(10, 12));
        assert_eq!(chunks[1].span, Span::new(12, 15));
    }

    #[test]
    fn test_slice_empty_text() {
        let chunks = slice_at_splitpoints("", &[], 4);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "");
        assert_eq!(chunks[0].span, Span::new(4, 4));
    }

    #[test]
    fn test_slice_at_edges_yields_empty_chunks() {
        let chunks = slice_at_splitpoints("abc", &[0, 3], 0);
        assert_eq!(texts(&chunks), vec!["", "abc", ""]);
        assert_eq!(chunks[2].span, Span::new(3, 3));
    }

    #[test]
    fn test_slice_multibyte() {
        let text = "Genève et Zürich";
        let chunks = slice_at_splitpoints(text, &[6, 10], 0);
        assert_eq!(texts(&chunks), vec!["Genève", " et ", "Zürich"]);
        assert_eq!(chunks[2].span, Span::new(10, 16));
        assert_eq!(chunks.iter().map(|c| c.text.as_str()).collect::<String>(), text);
    }

    #[test]
    fn test_char_to_byte_offsets() {
        assert_eq!(char_to_byte_offsets("aé b", [0, 1, 2, 2, 4]), vec![0, 1, 3, 3, 5]);
        assert_eq!(char_to_byte_offsets("ab", [7]), vec![2]);
    }
}
