use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// The two-character sequence (a backslash and an `n`, *not* a newline) which
/// separates paragraphs in the source text.
pub const PARAGRAPH_BREAK: &str = r"\n";

/// The class every paragraph is tagged with, so the site's styles can target them.
pub const PARAGRAPH_CLASS: &str = "textParserBlock";

lazy_static! {
   // `(?s)`: display math may run across real newlines.
   static ref BLOCK_MATH: Regex = Regex::new(r"(?s)\$\$(.+?)\$\$").expect("valid regex");
   // Everything else stays within a line. `\r`, U+2028 and U+2029 end a line too, so
   // plain `.` (which only stops at `\n`) is too permissive.
   static ref INLINE_MATH: Regex =
      Regex::new(r"\$([^\n\r\x{2028}\x{2029}]+?)\$").expect("valid regex");
   static ref STRONG: Regex =
      Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]+?)\*\*").expect("valid regex");
   static ref EMPHASIS: Regex =
      Regex::new(r"\*([^\n\r\x{2028}\x{2029}]+?)\*").expect("valid regex");
   static ref UNDERLINE: Regex =
      Regex::new(r"__([^\n\r\x{2028}\x{2029}]+?)__").expect("valid regex");
   static ref LINK: Regex =
      Regex::new(r"\[([^\]]+)\]\((https?://[^)]+)\)").expect("valid regex");
}

/// Wrap every `\n`-separated segment in a `<p>`. Consecutive breaks produce empty
/// paragraphs; text with no breaks at all becomes a single paragraph.
pub fn paragraphs(text: &str) -> String {
   text
      .split(PARAGRAPH_BREAK)
      .map(|paragraph| format!(r#"<p class="{PARAGRAPH_CLASS}">{paragraph}</p>"#))
      .collect()
}

pub fn block_math(html: &str) -> String {
   BLOCK_MATH
      .replace_all(html, |captures: &Captures| {
         format!(r"<div>\[{}\]</div>", trim(&captures[1]))
      })
      .into_owned()
}

/// Whitespace plus U+FEFF, which browsers also strip from both ends of a string.
fn trim(expr: &str) -> &str {
   expr.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Unlike block math, the expression is emitted untrimmed.
pub fn inline_math(html: &str) -> String {
   INLINE_MATH.replace_all(html, r"\(${1}\)").into_owned()
}

/// `**` has to go before `*`, or `**bold**` would come out as `<em>*bold</em>*`.
pub fn decorations(html: &str) -> String {
   let html = STRONG.replace_all(html, "<strong>${1}</strong>");
   let html = EMPHASIS.replace_all(&html, "<em>${1}</em>");
   let html = UNDERLINE.replace_all(&html, "<u>${1}</u>");
   html.into_owned()
}

/// Only `http://` and `https://` targets become links; everything else is left as
/// written.
pub fn links(html: &str) -> String {
   LINK
      .replace_all(html, r#"<a href="${2}" target="_blank">${1}</a>"#)
      .into_owned()
}
