//! Option parsing for query commands.
//!
//! `tlaref <command> <file> [<line>:<column>] [--dir <path>]... [--no-stdlib]`

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// 1-based source position as typed on the command line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl FromStr for Position {
    type Err = ArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ArgError::BadPosition(s.to_string());
        let (line, column) = s.split_once(':').ok_or_else(bad)?;
        let line = line.parse::<u32>().map_err(|_| bad())?;
        let column = column.parse::<u32>().map_err(|_| bad())?;
        if line == 0 || column == 0 {
            return Err(bad());
        }
        Ok(Position { line, column })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Options shared by every query command.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct QueryOptions {
    pub file: PathBuf,
    pub position: Option<Position>,
    /// Extra search-path roots besides the file's own directory.
    pub dirs: Vec<PathBuf>,
    pub no_stdlib: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ArgError {
    MissingFile,
    MissingPosition,
    BadPosition(String),
    MissingValue(&'static str),
    UnknownFlag(String),
    Unexpected(String),
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::MissingFile => write!(f, "missing file path"),
            ArgError::MissingPosition => write!(f, "missing position <line>:<column>"),
            ArgError::BadPosition(s) => {
                write!(f, "invalid position '{s}', expected <line>:<column>")
            }
            ArgError::MissingValue(flag) => write!(f, "{flag} requires a value"),
            ArgError::UnknownFlag(flag) => write!(f, "unknown option '{flag}'"),
            ArgError::Unexpected(arg) => write!(f, "unexpected argument '{arg}'"),
        }
    }
}

impl std::error::Error for ArgError {}

/// Parse the arguments that follow the command name.
pub fn parse_query(args: &[String], needs_position: bool) -> Result<QueryOptions, ArgError> {
    let mut options = QueryOptions::default();
    let mut file = None;
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--dir" {
            let dir = args.get(i + 1).ok_or(ArgError::MissingValue("--dir"))?;
            options.dirs.push(PathBuf::from(dir));
            i += 2;
            continue;
        }
        if let Some(dir) = arg.strip_prefix("--dir=") {
            options.dirs.push(PathBuf::from(dir));
        } else if arg == "--no-stdlib" {
            options.no_stdlib = true;
        } else if arg.starts_with('-') {
            return Err(ArgError::UnknownFlag(arg.clone()));
        } else if file.is_none() {
            file = Some(PathBuf::from(arg));
        } else if needs_position && options.position.is_none() {
            options.position = Some(arg.parse()?);
        } else {
            return Err(ArgError::Unexpected(arg.clone()));
        }
        i += 1;
    }
    options.file = file.ok_or(ArgError::MissingFile)?;
    if needs_position && options.position.is_none() {
        return Err(ArgError::MissingPosition);
    }
    Ok(options)
}
