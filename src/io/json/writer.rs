use crate::analysis::Patent;
use crate::io::{error::Error, record::PatentRecord};
use std::io::Write;

pub fn write<W: Write>(mut writer: W, patent: &Patent) -> Result<(), Error> {
    let record = PatentRecord::from(patent);
    serde_json::to_writer_pretty(&mut writer, &record).map_err(Error::serialize)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn to_string(patent: &Patent) -> Result<String, Error> {
    let record = PatentRecord::from(patent);
    serde_json::to_string_pretty(&record).map_err(Error::serialize)
}
