//! CSV plumbing for the batch surface: `Account` rows come in through
//! [`read_csv`] and `InterestRow` report lines go out through [`write_csv`].
//! Both are generic over any serde record.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Opens `path` and lazily deserializes each row into `T`.
/// Fields are trimmed, so `" acc-1 , 10"` reads the same as `"acc-1,10"`.
pub fn read_csv<T, P>(path: P) -> csv::Result<impl Iterator<Item = csv::Result<T>>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?
        .into_deserialize())
}

/// Serializes `records` to `writer` and flushes it.
/// The header row comes from the first record's field names.
pub fn write_csv<T, W>(writer: W, records: impl Iterator<Item = T>) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
