//! Convert text or highlight code for the site.

use std::io::{Read, Write};

use anyhow::Context;
use clap::Parser;
use log::debug;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use cli::{Cli, Command, HighlightArgs, Paths};
use tp::config::Config;
use tp::{files, highlight, md};

mod cli;

fn main() -> anyhow::Result<()> {
   let cli = Cli::parse();

   TermLogger::init(
      cli.log_level(),
      simplelog::Config::default(),
      TerminalMode::Mixed,
      ColorChoice::Auto,
   )
   .context("could not initialize logging")?;

   match &cli.command {
      Command::Convert { paths, wrap, theme } => convert(paths, *wrap, *theme),
      Command::Highlight(args) => {
         let config = Config::load(cli.config.as_deref())?;
         highlight_code(args, config)
      }
      Command::Completions => cli.completions().map_err(anyhow::Error::from),
   }
}

fn convert(paths: &Paths, wrap: bool, theme: md::Theme) -> anyhow::Result<()> {
   let input = files::input_buffer(paths.input.as_deref())?;
   let mut output = files::output_buffer(paths.output.as_deref())?;
   debug!("writing to {}", output.dest);

   md::convert(
      input,
      &mut output.buf,
      md::Include {
         wrapping_html: wrap,
         theme,
      },
   )
   .with_context(|| format!("could not convert to {}", output.dest))
}

fn highlight_code(args: &HighlightArgs, config: Config) -> anyhow::Result<()> {
   let mut stdout = std::io::stdout().lock();

   if args.list_languages {
      for syntax in highlight::languages() {
         writeln!(stdout, "{}: {}", syntax.name, syntax.file_extensions.join(", "))?;
      }
      return Ok(());
   }

   if args.list_themes {
      for theme in highlight::themes() {
         writeln!(stdout, "{theme}")?;
      }
      return Ok(());
   }

   // clap requires `--lang` unless one of the list flags was passed.
   let lang = args.lang.as_deref().context("no language supplied")?;

   let code = match &args.code {
      Some(code) => code.clone(),
      None => {
         let mut code = String::new();
         files::input_buffer(args.file.as_deref())?
            .read_to_string(&mut code)
            .context("could not read code to highlight")?;
         code
      }
   };

   let html = highlight::highlight(&code, lang, &args.options(config.highlight))?;
   stdout.write_all(html.as_bytes())?;
   Ok(())
}
