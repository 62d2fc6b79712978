//! Syntax highlighting for the code viewer.
//!
//! Uses syntect with the bundled Sublime Text syntax definitions and a dark
//! bundled theme. The output is split on `'\n'` only, so concatenating every
//! token of every line with `'\n'` gives back the input byte for byte.

use std::sync::OnceLock;

use syntect::{
    easy::HighlightLines,
    highlighting::{FontStyle, Style, Theme, ThemeSet},
    parsing::SyntaxSet,
};

/// Language assumed when the caller does not name one.
pub const DEFAULT_LANGUAGE: &str = "java";

const PREFERRED_THEMES: &[&str] =
    &["base16-ocean.dark", "base16-eighties.dark", "base16-mocha.dark", "Solarized (dark)"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A run of text sharing one style. `color` is `None` for plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub color: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
}

impl Token {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            color: None,
            bold: false,
            italic: false,
        }
    }

    fn styled(style: Style, text: &str) -> Self {
        Self {
            text: text.to_string(),
            color: Some(Rgb {
                r: style.foreground.r,
                g: style.foreground.g,
                b: style.foreground.b,
            }),
            bold: style.font_style.contains(FontStyle::BOLD),
            italic: style.font_style.contains(FontStyle::ITALIC),
        }
    }

    /// Inline CSS for the token, or `None` when it carries no styling.
    pub fn css_style(&self) -> Option<String> {
        let mut rules = Vec::with_capacity(3);
        if let Some(color) = self.color {
            rules.push(format!("color:{}", color.to_css()));
        }
        if self.bold {
            rules.push("font-weight:600".to_string());
        }
        if self.italic {
            rules.push("font-style:italic".to_string());
        }
        if rules.is_empty() {
            None
        } else {
            Some(rules.join(";"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightedLine {
    /// 1-based line number shown in the gutter.
    pub number: usize,
    pub tokens: Vec<Token>,
}

impl HighlightedLine {
    pub fn text(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }
}

/// Highlight `code` as `language`. An unknown language yields uncoloured
/// tokens rather than an error.
pub fn highlight_code(language: &str, code: &str) -> Vec<HighlightedLine> {
    let syntax_set = syntax_set();
    let syntax = syntax_set
        .find_syntax_by_token(language)
        .or_else(|| syntax_set.find_syntax_by_name(language));

    let Some(syntax) = syntax else {
        tracing::debug!(language, "no syntax definition, rendering plain text");
        return code
            .split('\n')
            .enumerate()
            .map(|(index, line)| HighlightedLine {
                number: index + 1,
                tokens: plain_tokens(line),
            })
            .collect();
    };

    let mut highlighter = HighlightLines::new(syntax, theme());
    code.split('\n')
        .enumerate()
        .map(|(index, line)| {
            let tokens = match highlighter.highlight_line(line, syntax_set) {
                Ok(ranges) => ranges
                    .into_iter()
                    .filter(|(_, text)| !text.is_empty())
                    .map(|(style, text)| Token::styled(style, text))
                    .collect(),
                Err(err) => {
                    tracing::warn!(line = index + 1, %err, "highlighting failed, using plain text");
                    plain_tokens(line)
                },
            };
            HighlightedLine {
                number: index + 1,
                tokens,
            }
        })
        .collect()
}

/// Join highlighted lines back into the original text.
pub fn plain_text(lines: &[HighlightedLine]) -> String {
    lines.iter().map(HighlightedLine::text).collect::<Vec<_>>().join("\n")
}

fn plain_tokens(line: &str) -> Vec<Token> {
    if line.is_empty() {
        Vec::new()
    } else {
        vec![Token::plain(line)]
    }
}

fn syntax_set() -> &'static SyntaxSet {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_nonewlines)
}

fn theme() -> &'static Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    THEME.get_or_init(|| {
        let theme_set = ThemeSet::load_defaults();
        for name in PREFERRED_THEMES {
            if let Some(theme) = theme_set.themes.get(*name) {
                return theme.clone();
            }
        }
        theme_set.themes.values().next().cloned().unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::content::sections;

    #[test]
    fn java_produces_several_colours() {
        let lines = highlight_code("java", "public class A {\n    int x = 1; // uno\n}");
        let colours: HashSet<_> = lines
            .iter()
            .flat_map(|line| line.tokens.iter())
            .filter_map(|token| token.color)
            .collect();
        assert!(colours.len() > 1, "expected distinct colours, got {colours:?}");
    }

    #[test]
    fn unknown_language_falls_back_to_plain() {
        let lines = highlight_code("klingon", "qapla'\nbatlh");
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().flat_map(|line| &line.tokens).all(|token| token.color.is_none()));
        assert_eq!(plain_text(&lines), "qapla'\nbatlh");
    }

    #[test]
    fn shipped_snippets_round_trip_verbatim() {
        for section in sections() {
            for example in section.examples {
                let lines = highlight_code(DEFAULT_LANGUAGE, example.code);
                assert_eq!(plain_text(&lines), example.code, "example {}", example.title);
            }
        }
    }

    #[test]
    fn trailing_newline_keeps_an_empty_last_line() {
        let lines = highlight_code(DEFAULT_LANGUAGE, "int a;\n");
        assert_eq!(lines.len(), 2);
        assert!(lines[1].tokens.is_empty());
        assert_eq!(plain_text(&lines), "int a;\n");
    }

    #[test]
    fn line_numbers_start_at_one() {
        let lines = highlight_code(DEFAULT_LANGUAGE, "a\nb\nc");
        let numbers: Vec<_> = lines.iter().map(|line| line.number).collect();
        assert_eq!(numbers, [1, 2, 3]);
    }

    #[test]
    fn output_is_deterministic() {
        let code = sections()[0].examples[0].code;
        assert_eq!(highlight_code("java", code), highlight_code("java", code));
    }

    #[test]
    fn css_style_for_plain_token_is_none() {
        assert_eq!(Token::plain("x").css_style(), None);
        let token = Token {
            text: "x".into(),
            color: Some(Rgb {
                r: 0xab,
                g: 0x01,
                b: 0xff,
            }),
            bold: true,
            italic: false,
        };
        assert_eq!(token.css_style().as_deref(), Some("color:#ab01ff;font-weight:600"));
    }
}
