//! Filesystem-safe slugs for article titles.

use chrono::Utc;

/// Characters that become a hyphen in a slug.
const SEPARATORS: &str = " /\\:;,.!?&\"'()[]{}<>@#%^*+=~`|";

/// Longest slug (in characters) used for an output filename.
pub const MAX_SLUG_CHARS: usize = 80;

/// Lower-case `text`, turn separator characters and whitespace into hyphens,
/// collapse hyphen runs and trim hyphens from both ends. May return an empty
/// string.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        let ch = if ch.is_whitespace() || SEPARATORS.contains(ch) {
            '-'
        } else {
            ch
        };
        if ch == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(ch);
    }

    slug.trim_matches('-').to_string()
}

/// Slug used for an article's HTML and image filenames.
///
/// Truncated to [`MAX_SLUG_CHARS`]; an empty result falls back to
/// `post-<unix timestamp>`.
pub fn slug_for_title(title: &str) -> String {
    let slug: String = slugify(title).chars().take(MAX_SLUG_CHARS).collect();
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        format!("post-{}", Utc::now().timestamp())
    } else {
        slug.to_string()
    }
}
