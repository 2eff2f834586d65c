use std::sync::LazyLock;

use regex::Regex;

static VIDEO_ID_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([A-Za-z0-9_-]{11})")
            .expect("valid youtube id pattern"),
        Regex::new(r"youtube\.com/shorts/([A-Za-z0-9_-]{11})").expect("valid shorts id pattern"),
    ]
});

/// Extract the 11-character video id from the usual YouTube URL shapes
/// (`watch?v=`, `youtu.be/`, `embed/`, `/shorts/`).
pub fn video_id(url: &str) -> Option<&str> {
    VIDEO_ID_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    })
}

/// Render a privacy-enhanced embed iframe for a YouTube URL, or an empty
/// string when no video id can be extracted.
pub fn embed_html(url: &str) -> String {
    let Some(id) = video_id(url) else {
        return String::new();
    };
    format!(
        "<div class=\"youtube-embed\">\
         <iframe src=\"https://www.youtube-nocookie.com/embed/{id}\" \
         title=\"YouTube video\" frameborder=\"0\" \
         allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" \
         allowfullscreen></iframe>\
         </div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_common_url_shapes() {
        let cases = [
            "https://www.youtube.com/watch?v=abcDEFghij1",
            "https://youtu.be/abcDEFghij1",
            "https://www.youtube.com/embed/abcDEFghij1",
            "https://www.youtube.com/shorts/abcDEFghij1",
        ];
        for url in cases {
            assert_eq!(video_id(url), Some("abcDEFghij1"), "url: {url}");
        }
    }

    #[test]
    fn unrecognized_shapes_yield_no_id() {
        assert_eq!(video_id("https://vimeo.com/123456789"), None);
        assert_eq!(video_id("https://www.youtube.com/watch?v=short"), None);
        assert_eq!(video_id(""), None);
    }

    #[test]
    fn embed_of_unrecognized_url_is_empty() {
        assert_eq!(embed_html("https://example.com/clip"), "");
    }

    #[test]
    fn embed_uses_nocookie_host() {
        let html = embed_html("https://youtu.be/abcDEFghij1");
        assert!(html.contains("https://www.youtube-nocookie.com/embed/abcDEFghij1"));
        assert!(html.starts_with("<div class=\"youtube-embed\">"));
    }
}
