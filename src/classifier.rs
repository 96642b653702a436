//! Category-based artist detection for ambiguous Wikipedia matches.

/// Category words that mark a page as plausibly describing an artist.
const ARTIST_KEYWORDS: [&str; 4] = ["art", "artist", "sculptor", "painter"];

/// Whether any category string contains an artist keyword.
///
/// Category names are split on whitespace and each word compared
/// case-insensitively against the keyword set; the scan stops at the first
/// hit. An empty category list is never a match.
pub fn categories_describe_artist(categories: &[String]) -> bool {
    for category in categories {
        for word in category.split_whitespace() {
            let word = word.to_lowercase();
            if ARTIST_KEYWORDS.contains(&word.as_str()) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::categories_describe_artist;

    fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_painter_category_matches() {
        assert!(categories_describe_artist(&categories(&[
            "Dutch Golden Age painter"
        ])));
    }

    #[test]
    fn test_plural_keyword_does_not_match() {
        // The keyword set holds exact words only; "painters" is not "painter".
        assert!(!categories_describe_artist(&categories(&[
            "Spanish painters"
        ])));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(categories_describe_artist(&categories(&[
            "French SCULPTOR biographies"
        ])));
    }

    #[test]
    fn test_keyword_must_be_a_whole_word() {
        // "artists" is not in the keyword set; "artist" is.
        assert!(!categories_describe_artist(&categories(&[
            "Articles with short description"
        ])));
        assert!(categories_describe_artist(&categories(&[
            "American artist biographies"
        ])));
    }

    #[test]
    fn test_later_category_still_matches() {
        assert!(categories_describe_artist(&categories(&[
            "1881 births",
            "People from Malaga",
            "Cubism art movement"
        ])));
    }

    #[test]
    fn test_no_categories_is_no_match() {
        assert!(!categories_describe_artist(&[]));
    }

    #[test]
    fn test_unrelated_categories_are_no_match() {
        assert!(!categories_describe_artist(&categories(&[
            "American politicians",
            "1950 births"
        ])));
    }
}
