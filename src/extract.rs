//! Pulls tagged sections out of a free-text model reply.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Result,
    Tldr,
    Details,
    Errors,
    Suggestions,
}

impl Tag {
    pub const ALL: [Tag; 5] = [
        Tag::Result,
        Tag::Tldr,
        Tag::Details,
        Tag::Errors,
        Tag::Suggestions,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tag::Result => "result",
            Tag::Tldr => "tldr",
            Tag::Details => "details",
            Tag::Errors => "errors",
            Tag::Suggestions => "suggestions",
        }
    }

    fn pattern(self) -> &'static Regex {
        static PATTERNS: OnceLock<[Regex; 5]> = OnceLock::new();
        let patterns = PATTERNS.get_or_init(|| {
            Tag::ALL.map(|tag| {
                let name = tag.name();
                // (?s) lets the lazy body span newlines
                Regex::new(&format!(r"(?s)<{name}>(.*?)</{name}>"))
                    .expect("tag pattern is a valid regex")
            })
        });
        &patterns[self as usize]
    }

    /// Trimmed contents of the first `<tag>...</tag>` in `reply`, or `""`.
    pub fn extract(self, reply: &str) -> String {
        self.pattern()
            .captures(reply)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub result: String,
    pub tldr: String,
    pub details: String,
    pub errors: String,
    pub suggestions: String,
}

impl Sections {
    pub fn from_reply(reply: &str) -> Self {
        Self {
            result: Tag::Result.extract(reply),
            tldr: Tag::Tldr.extract(reply),
            details: Tag::Details.extract(reply),
            errors: Tag::Errors.extract(reply),
            suggestions: Tag::Suggestions.extract(reply),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_tags_are_extracted_and_absent_ones_are_empty() {
        let sections = Sections::from_reply("<result>A</result><tldr>B</tldr>");
        assert_eq!(sections.result, "A");
        assert_eq!(sections.tldr, "B");
        assert_eq!(sections.details, "");
        assert_eq!(sections.errors, "");
        assert_eq!(sections.suggestions, "");
    }

    #[test]
    fn multi_line_contents_are_trimmed() {
        let sections = Sections::from_reply("<result>\nline1\nline2\n</result>");
        assert_eq!(sections.result, "line1\nline2");
    }

    #[test]
    fn first_match_wins_and_is_non_greedy() {
        let reply = "<tldr> one </tldr> filler <tldr>two</tldr>";
        assert_eq!(Tag::Tldr.extract(reply), "one");
    }

    #[test]
    fn order_in_reply_does_not_matter() {
        let reply = "<suggestions>s</suggestions>\n<errors>e</errors>\n<details>d</details>";
        let sections = Sections::from_reply(reply);
        assert_eq!(sections.suggestions, "s");
        assert_eq!(sections.errors, "e");
        assert_eq!(sections.details, "d");
        assert_eq!(sections.result, "");
    }

    #[test]
    fn unclosed_tag_does_not_swallow_others() {
        let reply = "<result>never closed\n<tldr>short</tldr>";
        let sections = Sections::from_reply(reply);
        assert_eq!(sections.result, "");
        assert_eq!(sections.tldr, "short");
    }

    #[test]
    fn plain_text_reply_yields_all_empty() {
        assert_eq!(Sections::from_reply("just some prose"), Sections::default());
    }
}
