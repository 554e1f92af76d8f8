use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// The set of search options active for one search request.
    ///
    /// Built once from user toggles or persisted preferences, read-only
    /// afterwards. Values are `Copy`, so "adding" a flag with `|` always
    /// produces a new set and leaves the operand untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SearchParameters: u8 {
        /// Consider files and directories whose name starts with a dot.
        const SHOW_HIDDEN_FILES = 1 << 0;
        /// Interpret the query as a regular expression instead of a
        /// literal fragment with `*`/`?` wildcards.
        const REGEX = 1 << 1;
        /// Require the pattern to cover the whole file name rather than
        /// matching a substring of it.
        const REGEX_MATCHES = 1 << 2;
        /// Permit the search to reach privileged locations. Recorded here,
        /// enforced by the search executor.
        const ROOT = 1 << 3;
    }
}

impl SearchParameters {
    /// Builds the parameter set from the four independent boolean options,
    /// one per flag. All sixteen combinations are valid; four `false`
    /// inputs yield the empty set.
    pub fn from_booleans(
        show_hidden_files: bool,
        is_regex_enabled: bool,
        is_regex_matches_enabled: bool,
        is_root: bool,
    ) -> Self {
        let mut params = Self::empty();
        if show_hidden_files {
            params |= Self::SHOW_HIDDEN_FILES;
        }
        if is_regex_enabled {
            params |= Self::REGEX;
        }
        if is_regex_matches_enabled {
            params |= Self::REGEX_MATCHES;
        }
        if is_root {
            params |= Self::ROOT;
        }
        params
    }

    /// Number of flags present in the set.
    pub fn len(&self) -> usize {
        self.bits().count_ones() as usize
    }
}

impl fmt::Display for SearchParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                f.write_str(" | ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}
