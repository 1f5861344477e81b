use std::io::{BufRead, Write};

use crate::errors::Result;
use crate::sentence::Sentence;

/// Reads an evaluation fixture.
///
/// Each non-empty line is a JSON object `{"id": "...", "tokens": [...], "pos_tags": [...]}`.
///
/// # Errors
///
/// When reading fails, a line is not a valid record, or a record has mismatched tokens and
/// tags, an error variant will be returned.
pub fn read_fixture<R>(rdr: R) -> Result<Vec<Sentence>>
where
    R: BufRead,
{
    let mut sentences = vec![];
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        sentences.push(serde_json::from_str(&line)?);
    }
    Ok(sentences)
}

/// Writes sentences in the format read by [`read_fixture`].
pub fn write_fixture<'a, W, I>(mut wtr: W, sentences: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Sentence>,
{
    for sentence in sentences {
        serde_json::to_writer(&mut wtr, sentence)?;
        wtr.write_all(b"\n")?;
    }
    Ok(())
}
