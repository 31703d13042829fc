//! Hand code to Syntect and get back a self-contained, inline-styled `<pre>` block.

use std::borrow::Cow;
use std::num::NonZeroUsize;

use lazy_static::lazy_static;
use log::debug;
use serde::Deserialize;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};
use thiserror::Error;

pub const DEFAULT_THEME: &str = "base16-ocean.dark";

lazy_static! {
   static ref SYNTAX_SET: SyntaxSet = SyntaxSet::load_defaults_newlines();
   static ref THEME_SET: ThemeSet = ThemeSet::load_defaults();
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Options {
   /// Name of one of Syntect's bundled themes.
   #[serde(default = "default_theme")]
   pub theme: String,

   /// Expand tabs to this many columns before highlighting. Tabs are left alone when
   /// this is `None`.
   #[serde(default)]
   pub tab_size: Option<NonZeroUsize>,
}

impl Default for Options {
   fn default() -> Self {
      Options {
         theme: default_theme(),
         tab_size: None,
      }
   }
}

fn default_theme() -> String {
   DEFAULT_THEME.to_string()
}

#[derive(Error, Debug)]
pub enum Error {
   #[error("no syntax definition for language '{lang}'")]
   UnknownLanguage { lang: String },

   #[error("no theme named '{theme}' (try `tp highlight --list-themes`)")]
   UnknownTheme { theme: String },

   #[error("could not highlight {lang}")]
   Highlight {
      lang: String,
      source: syntect::Error,
   },
}

/// Highlight `code` as `lang`, which may be a file extension (`rs`) or a language name
/// (`rust`, `Rust`).
pub fn highlight(code: &str, lang: &str, options: &Options) -> Result<String, Error> {
   let syntax = SYNTAX_SET
      .find_syntax_by_token(lang)
      .ok_or_else(|| Error::UnknownLanguage {
         lang: lang.to_owned(),
      })?;

   let theme = THEME_SET
      .themes
      .get(&options.theme)
      .ok_or_else(|| Error::UnknownTheme {
         theme: options.theme.clone(),
      })?;

   debug!(
      "highlighting {len} bytes as {name} with '{theme}'",
      len = code.len(),
      name = syntax.name,
      theme = options.theme
   );

   let code = match options.tab_size {
      Some(tab_size) => Cow::Owned(expand_tabs(code, tab_size)),
      None => Cow::Borrowed(code),
   };

   highlighted_html_for_string(&code, &SYNTAX_SET, syntax, theme).map_err(|source| {
      Error::Highlight {
         lang: syntax.name.clone(),
         source,
      }
   })
}

/// Replace each tab with enough spaces to reach the next tab stop. Columns are
/// counted in `char`s and reset at every newline.
pub fn expand_tabs(code: &str, tab_size: NonZeroUsize) -> String {
   let width = tab_size.get();
   let mut expanded = String::with_capacity(code.len());
   let mut column = 0;

   for c in code.chars() {
      match c {
         '\t' => {
            let spaces = width - column % width;
            expanded.extend(std::iter::repeat(' ').take(spaces));
            column += spaces;
         }
         '\n' => {
            expanded.push(c);
            column = 0;
         }
         _ => {
            expanded.push(c);
            column += 1;
         }
      }
   }

   expanded
}

/// Every bundled syntax definition, for `--list-languages`.
pub fn languages() -> impl Iterator<Item = &'static SyntaxReference> {
   SYNTAX_SET.syntaxes().iter()
}

/// Theme names, sorted.
pub fn themes() -> impl Iterator<Item = &'static str> {
   THEME_SET.themes.keys().map(String::as_str)
}
