//! cbread: normalize line endings and print canonical buffer coordinates.

mod cli;
mod config;
mod error;
mod logging;
mod output;

use camino::Utf8Path;
use clap::Parser;
use cli::Args;
use config::{CbreadConfig, Settings, CONFIG_FILE};
use error::CliError;
use input_buffer::{read_split, LineIndex, SliceView};
use miette::Result;
use output::Formatter;
use source_pos::Position;
use std::io::{self, Write};
use tracing::{debug, info};

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let config_path = args
        .config
        .as_deref()
        .unwrap_or_else(|| Utf8Path::new(CONFIG_FILE));
    let config = CbreadConfig::load(config_path);
    let settings = Settings::resolve(&args, &config);
    debug!(?settings, "resolved settings");

    let source = read_input(&args)?;
    let (positions, chars) = read_split(source.chars());
    info!(input = %args.input, chars = chars.len(), "normalized input");

    let (positions, chars) = match settings.line {
        Some(line) => select_line(&positions, &chars, line)?,
        None => (positions, chars),
    };

    let rendered = Formatter::new(settings.output, settings.positions)
        .format(&chars, &positions)
        .map_err(CliError::from)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .or_else(ignore_broken_pipe)
        .map_err(CliError::WriteOutput)?;

    Ok(())
}

/// Reads the whole input as text.
fn read_input(args: &Args) -> Result<String, CliError> {
    let result = if args.reads_stdin() {
        io::read_to_string(io::stdin())
    } else {
        std::fs::read_to_string(&args.input)
    };

    result.map_err(|source| CliError::ReadInput {
        path: args.input.clone(),
        source,
    })
}

/// Narrows both views to one canonical line, terminator included.
fn select_line(
    positions: &SliceView<Position>,
    chars: &SliceView<char>,
    line: usize,
) -> Result<(SliceView<Position>, SliceView<char>), CliError> {
    let index = LineIndex::new(chars);
    let start = index.line_start(line).ok_or(CliError::LineOutOfRange {
        line,
        line_count: index.line_count(),
    })?;
    let end = line
        .checked_add(1)
        .and_then(|next| index.line_start(next))
        .unwrap_or(chars.len());

    Ok((positions.range(start..end), chars.range(start..end)))
}

/// Treats a closed stdout (e.g. piping into `head`) as success.
fn ignore_broken_pipe(error: io::Error) -> io::Result<()> {
    match error.kind() {
        io::ErrorKind::BrokenPipe => Ok(()),
        _ => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_line() {
        let (positions, chars) = read_split("one\r\ntwo\rthree".chars());

        let (pos, line) = select_line(&positions, &chars, 1).unwrap();
        assert_eq!(line, ['t', 'w', 'o', '\n']);
        assert_eq!(pos.get(0), Ok(Position::new(1, 0)));

        let (_, last) = select_line(&positions, &chars, 2).unwrap();
        assert_eq!(last.iter().collect::<String>(), "three");
    }

    #[test]
    fn test_select_line_out_of_range() {
        let (positions, chars) = read_split("a\nb".chars());
        let err = select_line(&positions, &chars, 2).unwrap_err();
        assert!(matches!(
            err,
            CliError::LineOutOfRange {
                line: 2,
                line_count: 2
            }
        ));
    }

    #[test]
    fn test_select_line_after_trailing_newline() {
        let (positions, chars) = read_split("a\n".chars());
        let (_, line) = select_line(&positions, &chars, 1).unwrap();
        assert!(line.is_empty());
    }
}
