//! Loading and recording of sample files.
//!
//! A sample file is plain text holding one number per line, appended to by the
//! benchmark suites after every run.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufReader, Read, Write as _},
    num::ParseFloatError,
    path::{Path, PathBuf},
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum LoadSampleError {
    #[display("sample file not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        source: io::Error,
    },
    #[display("failed to read sample file: {}", path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },
    #[display("invalid number {content:?} at {}:{line}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
        source: ParseFloatError,
    },
}

impl LoadSampleError {
    fn io(path: &Path, source: io::Error) -> Self {
        let path = path.to_owned();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path, source }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Measurements loaded from one sample file, in file order.
#[derive(Debug, Clone)]
pub(crate) struct SampleSet {
    pub path: PathBuf,
    pub values: Vec<f64>,
}

impl SampleSet {
    pub(crate) fn load<P>(path: P) -> Result<Self, LoadSampleError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LoadSampleError::io(path, e))?;
        let values = parse_samples(BufReader::new(file), path)?;
        log::debug!("loaded {} samples from {}", values.len(), path.display());
        Ok(Self {
            path: path.to_owned(),
            values,
        })
    }
}

/// Parses one number per line.
///
/// Surrounding whitespace is ignored and a final line terminator does not
/// produce an extra entry. Any other blank line is an error.
fn parse_samples<R>(mut reader: R, path: &Path) -> Result<Vec<f64>, LoadSampleError>
where
    R: Read,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| LoadSampleError::io(path, e))?;

    let mut values = vec![];
    for (i, line) in split_lines(&text).into_iter().enumerate() {
        let content = line.trim();
        let value = content
            .parse::<f64>()
            .map_err(|source| LoadSampleError::Parse {
                path: path.to_owned(),
                line: i + 1,
                content: content.to_owned(),
                source,
            })?;
        values.push(value);
    }
    Ok(values)
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits `text` at every line break, treating `\r\n` as one break.
///
/// A trailing break does not start a new line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = vec![];
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        let mut end = i + c.len_utf8();
        if c == '\r'
            && let Some(&(_, '\n')) = chars.peek()
        {
            chars.next();
            end += 1;
        }
        start = end;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Appends one measurement to a sample file, creating it and its directory
/// when missing.
pub(crate) fn append_sample<P>(path: P, value: f64) -> io::Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    // `Display` for f64 prints integral values without a fractional part
    writeln!(file, "{value}")?;
    Ok(())
}
