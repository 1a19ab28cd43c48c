use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::common::error::{Result, WriterError};

/// Read a whole source stream into memory, reporting failures as construction errors.
pub fn read_source<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(WriterError::Construction)?;
    Ok(data)
}

/// Open a file read-only and load it with [`read_source`].
pub fn read_source_path(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(WriterError::Construction)?;
    read_source(&mut file)
}

/// Replace the contents of `path` with `data`, creating the file if needed.
pub fn write_all_to_path(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}
