use std::io::{Read, Write};

use log::debug;

pub struct Include {
   pub wrapping_html: bool,
   /// Only matters when `wrapping_html` is set.
   pub theme: Theme,
}

/// Color scheme for the standalone preview page.
#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
   #[default]
   Light,
   Dark,
}

struct Palette {
   text: &'static str,
   background: &'static str,
   link: &'static str,
   link_hover: &'static str,
}

impl Theme {
   fn palette(self) -> Palette {
      match self {
         Theme::Light => Palette {
            text: "#252525",
            background: "#f9f5f1",
            link: "#252525",
            link_hover: "#898989",
         },
         Theme::Dark => Palette {
            text: "#ffffff",
            background: "#212529",
            link: "#ffffff",
            link_hover: "#9b9b9b",
         },
      }
   }
}

const KATEX: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.10/dist";

/// Read all of `input`, transcode it, and write the HTML to `output`.
pub fn convert(
   mut input: impl Read,
   output: &mut dyn Write,
   include: Include,
) -> Result<(), Error> {
   let mut bytes = Vec::new();
   input
      .read_to_end(&mut bytes)
      .map_err(|source| Error::ReadBuffer { source })?;

   let src = String::from_utf8(bytes).map_err(|source| Error::NotUtf8 { source })?;
   debug!("transcoding {} bytes", src.len());

   let rendered = tp_md::transcode(&src);

   if include.wrapping_html {
      write(&page_head(include.theme), output)?;
   }

   write(&rendered, output)?;

   if include.wrapping_html {
      write(PAGE_TAIL, output)?;
   }

   output
      .flush()
      .map_err(|source| Error::WriteBuffer { source })
}

/// Everything up to and including the opening tag of the content container. KaTeX's
/// auto-render picks up the `\[…\]` and `\(…\)` delimiters the math passes emit.
fn page_head(theme: Theme) -> String {
   let Palette {
      text,
      background,
      link,
      link_hover,
   } = theme.palette();

   format!(
      r#"<!DOCTYPE html>
<html>
   <head>
      <meta charset="utf-8" />
      <link rel="stylesheet" href="{KATEX}/katex.min.css">
      <script src="{KATEX}/katex.min.js"></script>
      <script src="{KATEX}/contrib/auto-render.min.js"></script>
      <style>
         body {{
            font-family: Arial, sans-serif;
            color: {text};
            background-color: {background};
            transition: background-color 0.3s, color 0.3s;
         }}
         .textParserBlock {{
            display: block;
            margin-bottom: 1em;
         }}
         a {{
            color: {link};
            text-decoration: none;
            transition: background-color 0.3s, color 0.3s;
         }}
         a:hover {{
            color: {link_hover};
         }}
      </style>
   </head>
   <body>
      <div id="content">"#
   )
}

const PAGE_TAIL: &str = r#"</div>
      <script>
         renderMathInElement(document.getElementById("content"), {
            delimiters: [
               {left: "\\[", right: "\\]", display: true},
               {left: "\\(", right: "\\)", display: false}
            ]
         });
      </script>
   </body>
</html>
"#;

fn write(src: &str, dest: &mut dyn Write) -> Result<(), Error> {
   dest
      .write_all(src.as_bytes())
      .map_err(|source| Error::WriteBuffer { source })
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
   #[error("could not read buffer")]
   ReadBuffer { source: std::io::Error },

   #[error("input is not valid UTF-8")]
   NotUtf8 { source: std::string::FromUtf8Error },

   #[error("could not write to buffer")]
   WriteBuffer { source: std::io::Error },
}
