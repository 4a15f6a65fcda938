use memmap2::Mmap;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufRead};
use tracing::warn;

/// Numbers read from newline-delimited input, plus the lines that were rejected.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedInput {
    pub values: Vec<f64>,
    pub skipped: Vec<SkippedLine>,
}

/// A non-blank line that did not hold a finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number within the whole input.
    pub line: usize,
    pub text: String,
}

enum Line {
    Blank,
    Value(f64),
    Invalid,
}

/// Parses file using mmap.
/// Much faster than sequential buffered I/O for large files.
pub fn read_file_mmap(file: &File) -> io::Result<ParsedInput> {
    if file.metadata()?.len() == 0 {
        return Ok(ParsedInput::default());
    }

    // SAFETY: the map is read-only and dropped before returning
    let mmap = unsafe { Mmap::map(file)? };

    let num_threads = rayon::current_num_threads();
    let chunk_size = mmap.len().div_ceil(num_threads);

    // Chunk boundaries must align to line breaks to avoid splitting numbers mid-parse
    let mut boundaries = vec![0];
    for i in 1..num_threads {
        let mut pos = i * chunk_size;
        if pos >= mmap.len() {
            break;
        }
        while pos < mmap.len() && mmap[pos] != b'\n' {
            pos += 1;
        }
        if pos < mmap.len() {
            boundaries.push(pos + 1); // Start after the newline
        }
    }
    boundaries.push(mmap.len());

    let chunks: Vec<_> = boundaries.windows(2).map(|w| (w[0], w[1])).collect();

    let results: Vec<Chunk> = chunks
        .par_iter()
        .map(|&(start, end)| parse_chunk(&mmap[start..end]))
        .collect();

    // Chunk-local line numbers become global once earlier chunks are counted
    let mut parsed = ParsedInput::default();
    let mut offset = 0;
    for chunk in results {
        parsed.values.extend(chunk.values);
        parsed.skipped.extend(chunk.skipped.into_iter().map(|mut s| {
            s.line += offset;
            s
        }));
        offset += chunk.lines;
    }

    log_skipped(&parsed.skipped);
    Ok(parsed)
}

/// Reads newline-delimited numbers from a buffered reader (typically stdin).
pub fn read_lines<R: BufRead>(mut reader: R) -> io::Result<ParsedInput> {
    let mut parsed = ParsedInput::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        match parse_line(line) {
            Line::Blank => {}
            Line::Value(v) => parsed.values.push(v),
            Line::Invalid => parsed.skipped.push(SkippedLine {
                line: line_no,
                text: String::from_utf8_lossy(line).trim_end().to_string(),
            }),
        }
    }

    log_skipped(&parsed.skipped);
    Ok(parsed)
}

fn log_skipped(skipped: &[SkippedLine]) {
    for s in skipped {
        warn!("skipping invalid number on line {}: '{}'", s.line, s.text);
    }
}

struct Chunk {
    values: Vec<f64>,
    skipped: Vec<SkippedLine>,
    lines: usize,
}

/// Parses newline-delimited numbers from byte slice.
/// Line numbers in the result are relative to the start of the chunk.
fn parse_chunk(chunk: &[u8]) -> Chunk {
    let mut out = Chunk {
        values: Vec::new(),
        skipped: Vec::new(),
        lines: 0,
    };

    for line in chunk.split_inclusive(|&b| b == b'\n') {
        out.lines += 1;
        let line = line.strip_suffix(b"\n").unwrap_or(line);

        match parse_line(line) {
            Line::Blank => {}
            Line::Value(v) => out.values.push(v),
            Line::Invalid => out.skipped.push(SkippedLine {
                line: out.lines,
                text: String::from_utf8_lossy(line).trim_end().to_string(),
            }),
        }
    }

    out
}

/// Parses a single line as a finite decimal float.
/// Surrounding whitespace (including `\r`) is ignored.
fn parse_line(line: &[u8]) -> Line {
    let trimmed = line.trim_ascii();
    if trimmed.is_empty() {
        return Line::Blank;
    }

    let Ok(s) = std::str::from_utf8(trimmed) else {
        return Line::Invalid;
    };

    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Line::Value(v),
        _ => Line::Invalid,
    }
}
