use std::{fs::File, io::Read};

use crate::error::Error;

/// Read a source file into lines. Byte sequences that are not valid UTF-8
/// become U+FFFD instead of failing the read.
pub fn read(path: &str) -> Result<Vec<String>, Error> {
    let mut file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    let mut bytes = vec![];
    file.read_to_end(&mut bytes)
        .map_err(|e| Error::FileRead(path.to_string(), e))?;
    Ok(lines(&bytes))
}

/// Split on `\n` or `\r\n`. A final newline does not add an empty line.
pub fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}
