//! Centralized section-name derivation.
//!
//! A section is named after its directory under `photos/`. Two different
//! strings are derived from that one name, and both derivations live here so
//! the scanner and the emitter can never disagree:
//!
//! - **id**: a slug usable both as an HTML fragment identifier and as a
//!   suffix in generated element ids (`player-0`, `#10_finale`). Lowercase,
//!   runs of non-alphanumeric characters collapsed to a single underscore,
//!   leading/trailing underscores trimmed.
//! - **title**: the human-readable form shown in the nav and heading.
//!   Dashes and underscores become spaces; each word's first letter is
//!   uppercased.
//!
//! ```text
//! "10_finale"    → id "10_finale",  title "10 Finale"
//! "stage-Left"   → id "stage_left", title "Stage Left"
//! "champions"    → id "champions",  title "Champions"
//! ```

/// Derive the fragment-identifier slug from a section directory name.
///
/// Lowercases, collapses every run of non-alphanumeric characters into one
/// underscore, and trims underscores from both ends. A name with no
/// alphanumeric characters at all yields an empty slug.
pub fn section_id(dir_name: &str) -> String {
    let mut slug = String::with_capacity(dir_name.len());
    let mut pending_sep = false;
    for c in dir_name.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_sep = true;
        }
    }
    slug
}

/// Derive the display title from a section directory name.
///
/// Dashes and underscores become spaces, then the first letter of each word
/// is uppercased. Word starts are positions following a non-alphanumeric
/// character, so `"10_finale"` titles as `"10 Finale"`.
pub fn section_title(dir_name: &str) -> String {
    let spaced: String = dir_name
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();

    let mut title = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                title.extend(c.to_uppercase());
            } else {
                title.push(c);
            }
            at_word_start = false;
        } else {
            title.push(c);
            at_word_start = true;
        }
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_plain_name_passes_through() {
        assert_eq!(section_id("flag"), "flag");
    }

    #[test]
    fn id_lowercases() {
        assert_eq!(section_id("Champions"), "champions");
    }

    #[test]
    fn id_keeps_numeric_prefix() {
        assert_eq!(section_id("10_finale"), "10_finale");
    }

    #[test]
    fn id_collapses_punctuation_runs() {
        assert_eq!(section_id("My  Gallery!!2024"), "my_gallery_2024");
    }

    #[test]
    fn id_trims_leading_and_trailing_separators() {
        assert_eq!(section_id("-stage-left-"), "stage_left");
    }

    #[test]
    fn id_empty_when_no_alphanumerics() {
        assert_eq!(section_id("---"), "");
    }

    #[test]
    fn title_single_word() {
        assert_eq!(section_title("champions"), "Champions");
    }

    #[test]
    fn title_underscores_become_spaces() {
        assert_eq!(section_title("10_finale"), "10 Finale");
    }

    #[test]
    fn title_dashes_become_spaces() {
        assert_eq!(section_title("stage-left"), "Stage Left");
    }

    #[test]
    fn title_preserves_interior_capitals() {
        assert_eq!(section_title("backstage-VIP"), "Backstage VIP");
    }

    #[test]
    fn title_mixed_separators() {
        assert_eq!(section_title("opening_night-2024"), "Opening Night 2024");
    }
}
