//! # Slugs
//!
//! A slug is the URL-safe key of an item within its collection, derived from the title.
//!
//! [`slugify`] lowercases the title, drops everything but ASCII letters, digits, whitespace
//! and hyphens, turns each whitespace run into a single hyphen and trims hyphens from both
//! ends. Existing hyphen runs are kept as they are.
//!
//! [`resolve_unique`] then makes the slug unique against the rest of the collection by
//! appending `-1`, `-2`, ... until it no longer collides.
//!
//! A title with no usable characters slugifies to `""`. The resolver still terminates on
//! it (`""`, then `-1`, `-2`, ...), so callers reject such titles up front
//! (see [`crate::kinds::validate_title`]).

/// Anything that occupies a slug within a collection.
pub trait Slugged {
    fn slug(&self) -> &str;
}

impl<T: Slugged + ?Sized> Slugged for &T {
    fn slug(&self) -> &str {
        (**self).slug()
    }
}

impl Slugged for str {
    fn slug(&self) -> &str {
        self
    }
}

impl Slugged for String {
    fn slug(&self) -> &str {
        self
    }
}

pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '-' {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug.trim_matches('-').to_string()
}

/// Returns `base` if no record in `existing` uses it, otherwise the first free `base-N`.
///
/// `existing` must not contain the record being renamed, or it would collide with itself.
pub fn resolve_unique<T: Slugged>(base: &str, existing: &[T]) -> String {
    let taken = |candidate: &str| existing.iter().any(|record| record.slug() == candidate);

    if !taken(base) {
        return base.to_string();
    }

    let mut suffix: u64 = 1;
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if !taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_title() {
        assert_eq!(slugify("Hello World!"), "hello-world");
    }

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("My   Rust \t Notes"), "my-rust-notes");
    }

    #[test]
    fn slugify_trims_edge_hyphens_and_spaces() {
        assert_eq!(slugify("  - Intro -  "), "intro");
    }

    #[test]
    fn slugify_keeps_inner_hyphens() {
        assert_eq!(slugify("Rust - the good parts"), "rust---the-good-parts");
        assert_eq!(slugify("state-of-the-art"), "state-of-the-art");
    }

    #[test]
    fn slugify_strips_punctuation_and_non_ascii() {
        assert_eq!(slugify("C++ & Rust: a 2024 review"), "c-rust-a-2024-review");
        assert_eq!(slugify("Café Noir"), "caf-noir");
        assert_eq!(slugify("snake_case_title"), "snakecasetitle");
    }

    #[test]
    fn slugify_without_valid_characters_is_empty() {
        assert_eq!(slugify("!!! ???"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slugify_is_idempotent() {
        for title in [
            "Hello World!",
            "  Spaced   Out  ",
            "Ünïcödé Ti-tle 42",
            "C++ & Rust",
            "İstanbul trip",
        ] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once, "not idempotent for {:?}", title);
        }
    }

    #[test]
    fn resolve_returns_base_when_free() {
        let existing = vec!["other".to_string()];
        assert_eq!(resolve_unique("hello-world", &existing), "hello-world");
    }

    #[test]
    fn resolve_appends_smallest_free_suffix() {
        let existing = vec!["hello-world".to_string()];
        assert_eq!(resolve_unique("hello-world", &existing), "hello-world-1");

        let existing = vec![
            "hello-world".to_string(),
            "hello-world-1".to_string(),
            "hello-world-3".to_string(),
        ];
        assert_eq!(resolve_unique("hello-world", &existing), "hello-world-2");
    }

    #[test]
    fn resolve_never_returns_an_existing_slug() {
        let mut existing: Vec<String> = Vec::new();
        for _ in 0..20 {
            let next = resolve_unique("post", &existing);
            assert!(!existing.contains(&next));
            existing.push(next);
        }
        assert_eq!(existing[0], "post");
        assert_eq!(existing[19], "post-19");
    }

    #[test]
    fn resolve_with_empty_base_degenerates_to_suffixes() {
        let existing = vec![String::new()];
        assert_eq!(resolve_unique("", &existing), "-1");
    }

    #[test]
    fn resolve_accepts_borrowed_records() {
        let owned = vec!["a".to_string(), "a-1".to_string()];
        let borrowed: Vec<&String> = owned.iter().collect();
        assert_eq!(resolve_unique("a", &borrowed), "a-2");
    }
}
