// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

const ELLIPSIS: char = '\u{2026}';

/// Shortens `text` to at most `max_chars` characters, marking the cut with an
/// ellipsis.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate("The Matrix", 20), "The Matrix");
/// assert_eq!(truncate("The Matrix Reloaded", 10), "The Matri…");
/// ```
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    if max_chars == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("Alien", 5), "Alien");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(truncate("The Matrix Reloaded", 10), "The Matri\u{2026}");
        assert_eq!(truncate("Amélie", 3), "Am\u{2026}");
        assert_eq!(truncate("Alien", 0), "");
    }
}
