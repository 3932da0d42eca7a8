/// Normalize a section title into a filesystem-safe slug.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single `-`, and trims leading and trailing dashes. May return an empty
/// string; callers pick their own fallback.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for ch in raw.trim().to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_title() {
        assert_eq!(slugify("Step 1: Load Data"), "step-1-load-data");
        assert_eq!(slugify("Intro"), "intro");
        assert_eq!(slugify("Step Two"), "step-two");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify("  ###  "), "");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_trims_and_collapses() {
        assert_eq!(slugify("--Hello,   World!--"), "hello-world");
        assert_eq!(slugify("a__b--c"), "a-b-c");
        assert_eq!(slugify("Über Café"), "ber-caf");
    }

    #[test]
    fn test_slugify_idempotent() {
        for input in [
            "Step 1: Load Data",
            "  ###  ",
            "--Hello,   World!--",
            "Über Café",
            "already-a-slug",
            "MiXeD 42 _ case",
        ] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }
}
