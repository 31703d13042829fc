use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{crate_version, ArgAction, Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate_to, shells::Fish};
use simplelog::LevelFilter;
use thiserror::Error;

use tp::{highlight, md};

#[derive(Parser, Debug)]
#[clap(
   name = "tp",
   about = "Turn the site's little text format into HTML, and highlight code.",
   version = crate_version!()
)]
#[command(author, version, about, arg_required_else_help(true))]
pub struct Cli {
   #[command(subcommand)]
   pub command: Command,

   /// Log more. Repeat for even more.
   #[arg(short, long, action = ArgAction::Count, global = true)]
   pub verbose: u8,

   /// Log nothing at all.
   #[arg(short, long, global = true, conflicts_with = "verbose")]
   pub quiet: bool,

   /// Config file to use instead of `~/.config/tp/config.yaml`.
   #[arg(long, global = true)]
   pub config: Option<PathBuf>,
}

impl Cli {
   pub(crate) fn completions(&self) -> Result<(), CompletionsError> {
      let mut dir = dirs::home_dir().ok_or(CompletionsError::NoHomeDir)?;
      dir.extend([".config", "fish", "completions"]);
      let mut cmd = Self::command();
      generate_to(Fish, &mut cmd, "tp", &dir)
         .map(|_| ())
         .map_err(|source| CompletionsError::Write { dir, source })
   }

   pub(crate) fn log_level(&self) -> LevelFilter {
      if self.quiet {
         return LevelFilter::Off;
      }

      match self.verbose {
         0 => LevelFilter::Warn,
         1 => LevelFilter::Info,
         2 => LevelFilter::Debug,
         _ => LevelFilter::Trace,
      }
   }
}

#[derive(Error, Debug)]
pub enum CompletionsError {
   #[error("no home directory to put fish completions in")]
   NoHomeDir,

   #[error("could not write fish completions to '{}'", dir.display())]
   Write {
      dir: PathBuf,
      source: std::io::Error,
   },
}

#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum Command {
   #[command(about = "📝 Text → HTML")]
   Convert {
      #[clap(flatten)]
      paths: Paths,

      /// Emit a standalone preview page (with KaTeX) instead of a fragment.
      #[arg(long)]
      wrap: bool,

      /// Colors for the preview page.
      #[arg(long, value_enum, default_value_t, requires = "wrap")]
      theme: md::Theme,
   },

   #[command(about = "🎨 Code → highlighted HTML")]
   Highlight(HighlightArgs),

   #[command(about = "🐟 Straight to the config.")]
   Completions,
}

#[derive(Args, Debug, PartialEq, Clone)]
pub struct Paths {
   /// Path to the file to convert. Will use `stdin` if not supplied.
   pub input: Option<PathBuf>,
   /// Where to print the output. Will use `stdout` if not supplied.
   pub output: Option<PathBuf>,
}

#[derive(Args, Debug, PartialEq, Clone)]
pub struct HighlightArgs {
   /// The code to highlight. Falls back to `--file`, then to `stdin`.
   pub code: Option<String>,

   /// Language to highlight as: an extension (`rs`) or a name (`rust`).
   #[arg(
      short,
      long,
      required_unless_present_any = ["list_languages", "list_themes"]
   )]
   pub lang: Option<String>,

   /// Read the code from this file.
   #[arg(short, long, conflicts_with = "code")]
   pub file: Option<PathBuf>,

   /// Overrides the config file's theme.
   #[arg(long)]
   pub theme: Option<String>,

   /// Overrides the config file's tab size.
   #[arg(long)]
   pub tab_size: Option<NonZeroUsize>,

   #[arg(long, conflicts_with = "list_themes")]
   pub list_languages: bool,

   #[arg(long)]
   pub list_themes: bool,
}

impl HighlightArgs {
   /// Flags win over whatever the config file said.
   pub(crate) fn options(&self, configured: highlight::Options) -> highlight::Options {
      highlight::Options {
         theme: self.theme.clone().unwrap_or(configured.theme),
         tab_size: self.tab_size.or(configured.tab_size),
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   fn parse(args: &[&str]) -> Cli {
      Cli::try_parse_from(args).unwrap()
   }

   #[test]
   fn definition_is_valid() {
      Cli::command().debug_assert();
   }

   #[test]
   fn convert_defaults_to_stdio() {
      let cli = parse(&["tp", "convert"]);
      assert_eq!(
         cli.command,
         Command::Convert {
            paths: Paths {
               input: None,
               output: None
            },
            wrap: false,
            theme: md::Theme::Light,
         }
      );
   }

   #[test]
   fn convert_with_paths() {
      let cli = parse(&["tp", "convert", "in.txt", "out.html", "--wrap"]);
      assert_eq!(
         cli.command,
         Command::Convert {
            paths: Paths {
               input: Some("in.txt".into()),
               output: Some("out.html".into()),
            },
            wrap: true,
            theme: md::Theme::Light,
         }
      );
   }

   #[test]
   fn convert_with_dark_theme() {
      let cli = parse(&["tp", "convert", "--wrap", "--theme", "dark"]);
      let Command::Convert { wrap, theme, .. } = cli.command else {
         panic!("expected the convert command");
      };
      assert!(wrap);
      assert_eq!(theme, md::Theme::Dark);

      assert!(Cli::try_parse_from(["tp", "convert", "--theme", "dark"]).is_err());
      assert!(Cli::try_parse_from(["tp", "convert", "--wrap", "--theme", "sepia"]).is_err());
   }

   #[test]
   fn highlight_requires_a_language() {
      assert!(Cli::try_parse_from(["tp", "highlight", "let x = 1;"]).is_err());
      assert!(Cli::try_parse_from(["tp", "highlight", "--list-themes"]).is_ok());
   }

   #[test]
   fn code_and_file_conflict() {
      let result =
         Cli::try_parse_from(["tp", "highlight", "x", "--lang", "rs", "--file", "a.rs"]);
      assert!(result.is_err());
   }

   #[test]
   fn flags_override_config() {
      let Command::Highlight(args) = parse(&[
         "tp",
         "highlight",
         "x",
         "-l",
         "rs",
         "--theme",
         "InspiredGitHub",
      ])
      .command
      else {
         panic!("expected the highlight command");
      };

      let configured = highlight::Options {
         theme: "base16-mocha.dark".into(),
         tab_size: NonZeroUsize::new(4),
      };

      assert_eq!(
         args.options(configured),
         highlight::Options {
            theme: "InspiredGitHub".into(),
            tab_size: NonZeroUsize::new(4),
         }
      );
   }

   #[test]
   fn completions_errors_name_the_directory() {
      let error = CompletionsError::Write {
         dir: PathBuf::from("/home/me/.config/fish/completions"),
         source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
      };
      assert_eq!(
         error.to_string(),
         "could not write fish completions to '/home/me/.config/fish/completions'"
      );
      assert!(std::error::Error::source(&error).is_some());
   }

   #[test]
   fn log_levels() {
      assert_eq!(parse(&["tp", "completions"]).log_level(), LevelFilter::Warn);
      assert_eq!(parse(&["tp", "-vv", "completions"]).log_level(), LevelFilter::Debug);
      assert_eq!(parse(&["tp", "completions", "-q"]).log_level(), LevelFilter::Off);
      assert!(Cli::try_parse_from(["tp", "-q", "-v", "completions"]).is_err());
   }
}
