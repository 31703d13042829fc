use std::fmt::Display;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
   #[error("could not open file at '{path}' {reason}")]
   CouldNotOpenFile {
      path: PathBuf,
      reason: FileOpenReason,
      source: std::io::Error,
   },

   #[error("invalid file path with no parent directory: '{path}'")]
   InvalidDirectory { path: PathBuf },

   #[error("could not create directory '{dir}' to write file '{path}'")]
   CreateDirectory {
      dir: PathBuf,
      path: PathBuf,
      source: std::io::Error,
   },
}

#[derive(Debug)]
pub enum FileOpenReason {
   Read,
   Write,
}

impl Display for FileOpenReason {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      match self {
         FileOpenReason::Read => write!(f, "to read it"),
         FileOpenReason::Write => write!(f, "to write to it"),
      }
   }
}

/// The file at `path`, or `stdin` if there is no path.
pub fn input_buffer(path: Option<&Path>) -> Result<Box<dyn BufRead>, Error> {
   let buf = match path {
      Some(path) => {
         let file =
            std::fs::File::open(path).map_err(|source| Error::CouldNotOpenFile {
               path: path.to_owned(),
               reason: FileOpenReason::Read,
               source,
            })?;

         Box::new(BufReader::new(file)) as Box<dyn BufRead>
      }
      None => Box::new(BufReader::new(std::io::stdin())) as Box<dyn BufRead>,
   };

   Ok(buf)
}

/// The file at `path` (creating its directory if need be), or `stdout` if there is no
/// path.
pub fn output_buffer(path: Option<&Path>) -> Result<Output, Error> {
   match path {
      Some(path) => {
         let dir = path.parent().ok_or_else(|| Error::InvalidDirectory {
            path: path.to_owned(),
         })?;

         std::fs::create_dir_all(dir).map_err(|source| Error::CreateDirectory {
            dir: dir.to_owned(),
            path: path.to_owned(),
            source,
         })?;

         let file =
            std::fs::File::create(path).map_err(|source| Error::CouldNotOpenFile {
               path: path.to_owned(),
               reason: FileOpenReason::Write,
               source,
            })?;

         Ok(Output {
            buf: Box::new(file),
            dest: Dest::File(path.to_owned()),
         })
      }
      None => Ok(Output {
         buf: Box::new(std::io::stdout()),
         dest: Dest::Stdout,
      }),
   }
}

pub struct Output {
   pub buf: Box<dyn Write>,
   pub dest: Dest,
}

#[derive(Debug)]
pub enum Dest {
   File(PathBuf),
   Stdout,
}

impl Display for Dest {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      match self {
         Dest::File(path) => write!(f, "{}", path.display()),
         Dest::Stdout => f.write_str("stdout"),
      }
   }
}
