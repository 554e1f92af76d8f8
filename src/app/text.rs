use crate::app::models::Occurrence;

/// Iterator over the occurrences of a needle inside a text.
///
/// The haystack is visited once: line numbers are counted incrementally as
/// the scan advances, not recomputed per hit. The scan resumes at the next
/// character boundary after each hit, so overlapping occurrences are all
/// reported.
#[derive(Debug)]
pub struct Occurrences<'a> {
    haystack: &'a str,
    needle: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Occurrences<'a> {
    /// An empty needle yields no occurrences.
    pub fn new(haystack: &'a str, needle: &'a str) -> Self {
        Self {
            haystack,
            needle,
            pos: 0,
            line: 1,
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        if self.needle.is_empty() {
            return None;
        }
        let rest = self.haystack.get(self.pos..)?;
        let start = self.pos + rest.find(self.needle)?;
        let end = start + self.needle.len();

        self.line += count_newlines(&self.haystack[self.pos..start]);
        let line = self.line;

        // Resume one character past the start of this hit. The skipped
        // character still has to be counted when it is a newline.
        if self.needle.starts_with('\n') {
            self.line += 1;
        }
        let advance = self.needle.chars().next().map_or(1, char::len_utf8);
        self.pos = start + advance;

        Some(Occurrence { start, end, line })
    }
}

/// Collects every occurrence of `needle` in `haystack`.
pub fn find_occurrences(haystack: &str, needle: &str) -> Vec<Occurrence> {
    Occurrences::new(haystack, needle).collect()
}

fn count_newlines(s: &str) -> usize {
    s.bytes().filter(|&b| b == b'\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(haystack: &str, needle: &str) -> Vec<(usize, usize, usize)> {
        find_occurrences(haystack, needle)
            .into_iter()
            .map(|occ| (occ.start, occ.end, occ.line))
            .collect()
    }

    #[test]
    fn test_every_occurrence_is_reported() {
        assert_eq!(
            spans("alpha beta alpha", "alpha"),
            vec![(0, 5, 1), (11, 16, 1)]
        );
    }

    #[test]
    fn test_line_numbers_are_one_based_and_tracked() {
        let text = "one\ntwo\nthree two\n";
        assert_eq!(spans(text, "two"), vec![(4, 7, 2), (14, 17, 3)]);
    }

    #[test]
    fn test_overlapping_occurrences() {
        assert_eq!(spans("aaaa", "aa"), vec![(0, 2, 1), (1, 3, 1), (2, 4, 1)]);
    }

    #[test]
    fn test_empty_needle_yields_nothing() {
        assert!(find_occurrences("anything", "").is_empty());
    }

    #[test]
    fn test_hit_flush_against_end_of_text() {
        assert_eq!(spans("xabc", "abc"), vec![(1, 4, 1)]);
        assert_eq!(spans("abc", "abc"), vec![(0, 3, 1)]);
    }

    #[test]
    fn test_needle_spanning_lines() {
        // Both hits of "a\nb" are found and each is reported on the line
        // its first byte sits on.
        assert_eq!(spans("a\nb a\nb", "a\nb"), vec![(0, 3, 1), (4, 7, 2)]);
    }

    #[test]
    fn test_needle_starting_with_newline() {
        assert_eq!(spans("x\na\na", "\na"), vec![(1, 3, 1), (3, 5, 2)]);
    }

    #[test]
    fn test_multibyte_needle_advances_on_char_boundaries() {
        assert_eq!(spans("ééé", "é"), vec![(0, 2, 1), (2, 4, 1), (4, 6, 1)]);
    }

    #[test]
    fn test_no_hit_yields_empty() {
        assert!(find_occurrences("haystack", "needle").is_empty());
    }
}
