//! Roster, ratings and season CSV files.
//!
//! Every reader has a `*_from_reader` variant that works on any
//! `std::io::Read`, so tests run on in-memory data.

use std::io::{Read, Write};
use std::path::Path;

use crate::error::{BbrError, Result};
use crate::types::{Player, RatingRecord, RatingsIndex, Record};

/// Read every row of a headed CSV into ordered records.
pub fn read_records_from_reader<R: Read>(rdr: R) -> std::result::Result<Vec<Record>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(headers.iter().zip(row.iter()).collect());
    }
    Ok(records)
}

pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path).map_err(|e| BbrError::io(path, e))?;
    read_records_from_reader(file).map_err(|e| BbrError::csv(path, e))
}

/// Load the player roster. Every row needs a resolvable `link`.
pub fn load_roster(path: &Path) -> Result<Vec<Player>> {
    read_records(path)?
        .into_iter()
        .map(Player::from_attributes)
        .collect()
}

pub fn load_ratings_from_reader<R: Read>(rdr: R) -> std::result::Result<RatingsIndex, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let records = reader
        .deserialize::<RatingRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(RatingsIndex::new(records))
}

/// Load the external ratings file, grouped by player.
pub fn load_ratings(path: &Path) -> Result<RatingsIndex> {
    let file = std::fs::File::open(path).map_err(|e| BbrError::io(path, e))?;
    load_ratings_from_reader(file).map_err(|e| BbrError::csv(path, e))
}

/// Field names across all rows, in order of first appearance.
pub fn union_headers(rows: &[Record]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for row in rows {
        for name in row.names() {
            if !headers.iter().any(|h| h == name) {
                headers.push(name.to_string());
            }
        }
    }
    headers
}

/// Write rows under the union of their field names. Missing and null
/// fields become empty cells. Zero rows produce an empty file.
pub fn write_records_to<W: Write>(wtr: W, rows: &[Record]) -> std::result::Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(wtr);
    if rows.is_empty() {
        writer.flush()?;
        return Ok(());
    }

    let headers = union_headers(rows);
    writer.write_record(&headers)?;
    for row in rows {
        writer.write_record(headers.iter().map(|h| row.get(h).unwrap_or_default()))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_records(path: &Path, rows: &[Record]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| BbrError::io(path, e))?;
    write_records_to(file, rows).map_err(|e| BbrError::csv(path, e))
}
