//! Turn the site's tiny markdown-ish text format into an HTML fragment.
//!
//! The transformation is a fixed sequence of text-to-text passes:
//!
//! 1. Split paragraphs on literal `\n` sequences.
//! 2. Block math: `$$…$$` → `<div>\[…\]</div>`.
//! 3. Inline math: `$…$` → `\(…\)`.
//! 4. Decorations: `**strong**`, `*em*`, `__underline__`.
//! 5. Links: `[label](http…)`.
//!
//! Later passes see the HTML produced by earlier ones, so the order is load-bearing:
//! block math must consume `$$` before inline math sees a single `$`, and `**` must be
//! consumed before `*`. Nothing is escaped; callers rendering untrusted input must
//! sanitize the result themselves.
//!
//! Running `transcode` over its own output is *not* a no-op: every run wraps the
//! input in another paragraph, and stray `*`, `_`, or `$` left in the output can
//! match on a second run.

mod passes;

use log::trace;

pub use passes::{
   block_math, decorations, inline_math, links, paragraphs, PARAGRAPH_BREAK,
   PARAGRAPH_CLASS,
};

/// A single named step in the pipeline. Each pass is a pure function of its input.
#[derive(Debug, Clone, Copy)]
pub struct Pass {
   pub name: &'static str,
   pub apply: fn(&str) -> String,
}

/// Every pass, in the order `transcode` runs them.
pub const PASSES: [Pass; 5] = [
   Pass {
      name: "paragraphs",
      apply: paragraphs,
   },
   Pass {
      name: "block math",
      apply: block_math,
   },
   Pass {
      name: "inline math",
      apply: inline_math,
   },
   Pass {
      name: "decorations",
      apply: decorations,
   },
   Pass {
      name: "links",
      apply: links,
   },
];

/// Run `text` through every pass in [`PASSES`]. Never fails: delimiters which do not
/// pair up are left in the output exactly as they appeared in the input.
pub fn transcode(text: &str) -> String {
   PASSES.iter().fold(text.to_owned(), |html, pass| {
      let next = (pass.apply)(&html);
      trace!(
         "{name}: {before} → {after} bytes",
         name = pass.name,
         before = html.len(),
         after = next.len()
      );
      next
   })
}

#[cfg(test)]
mod tests {
   use super::*;

   fn p(content: &str) -> String {
      format!(r#"<p class="textParserBlock">{content}</p>"#)
   }

   #[test]
   fn plain_text_is_one_paragraph() {
      assert_eq!(transcode("hello, world"), p("hello, world"));
   }

   #[test]
   fn empty_input_is_one_empty_paragraph() {
      assert_eq!(transcode(""), p(""));
   }

   #[test]
   fn escaped_newlines_split_paragraphs() {
      assert_eq!(transcode("a\\nb"), p("a") + &p("b"));
   }

   #[test]
   fn block_math_is_trimmed() {
      assert_eq!(transcode("$$ x+1 $$"), p(r"<div>\[x+1\]</div>"));
   }

   #[test]
   fn inline_math() {
      assert_eq!(transcode("$x$"), p(r"\(x\)"));
   }

   #[test]
   fn block_and_inline_math_together() {
      assert_eq!(
         transcode("$$a$$ and $b$"),
         p(r"<div>\[a\]</div> and \(b\)")
      );
   }

   #[test]
   fn decorations_in_order() {
      assert_eq!(
         transcode("**bold** and *italic* and __under__"),
         p("<strong>bold</strong> and <em>italic</em> and <u>under</u>")
      );
   }

   #[test]
   fn http_links() {
      assert_eq!(
         transcode("[text](http://example.com)"),
         p(r#"<a href="http://example.com" target="_blank">text</a>"#)
      );
   }

   #[test]
   fn other_schemes_are_not_links() {
      assert_eq!(transcode("[text](ftp://x)"), p("[text](ftp://x)"));
   }

   #[test]
   fn decorated_link_label() {
      assert_eq!(
         transcode("[**docs**](https://example.com/docs)"),
         p(r#"<a href="https://example.com/docs" target="_blank"><strong>docs</strong></a>"#)
      );
   }

   #[test]
   fn everything_at_once() {
      assert_eq!(
         transcode("Let $x$ be *small*.\\n$$x^2$$\\nSee [here](https://example.com)."),
         p(r"Let \(x\) be <em>small</em>.")
            + &p(r"<div>\[x^2\]</div>")
            + &p(r#"See <a href="https://example.com" target="_blank">here</a>."#)
      );
   }

   // Inline math runs over the joined paragraphs, so a `$` pair may straddle two of
   // them.
   #[test]
   fn inline_math_crosses_paragraph_boundaries() {
      assert_eq!(
         transcode("$a\\nb$"),
         r#"<p class="textParserBlock">\(a</p><p class="textParserBlock">b\)</p>"#
      );
   }

   #[test]
   fn not_idempotent() {
      let once = transcode("*x*");
      assert_eq!(once, p("<em>x</em>"));
      assert_ne!(transcode(&once), once);
   }

   #[test]
   fn passes_are_ordered() {
      let names = PASSES.iter().map(|pass| pass.name).collect::<Vec<_>>();
      assert_eq!(
         names,
         ["paragraphs", "block math", "inline math", "decorations", "links"]
      );
   }
}
