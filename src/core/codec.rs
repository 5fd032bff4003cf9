//! Row format: `name,length,location,detail,balance`.
//!
//! The detail column depends on the location: a slip or storage number, a
//! single bay letter, or a trailer license tag. Balances are written with
//! two decimals. Names and tags cannot contain commas; there is no quoting.

use crate::domain::model::{Boat, Location, LocationDetail, MAX_NAME_LEN, MAX_TAG_LEN};
use crate::utils::error::DecodeError;
use csv::StringRecord;

pub const FIELD_COUNT: usize = 5;

pub fn decode_row(line: &str) -> Result<Boat, DecodeError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split(',').collect();
    decode_fields(&fields)
}

pub fn decode_record(record: &StringRecord) -> Result<Boat, DecodeError> {
    let fields: Vec<&str> = record.iter().collect();
    decode_fields(&fields)
}

/// No trailing newline; line endings belong to the stream writer.
pub fn encode_boat(boat: &Boat) -> String {
    encode_fields(boat).join(",")
}

pub fn encode_record(boat: &Boat) -> StringRecord {
    StringRecord::from(encode_fields(boat).to_vec())
}

fn encode_fields(boat: &Boat) -> [String; FIELD_COUNT] {
    let detail = match &boat.detail {
        LocationDetail::Slip(number) | LocationDetail::Storage(number) => number.to_string(),
        LocationDetail::Land(bay) => bay.to_string(),
        LocationDetail::Trailor(tag) => tag.clone(),
        LocationDetail::Unknown => String::new(),
    };

    [
        boat.name.clone(),
        boat.length.to_string(),
        boat.location().to_string(),
        detail,
        format!("{:.2}", boat.balance),
    ]
}

/// Anything after the balance column is ignored.
fn decode_fields(fields: &[&str]) -> Result<Boat, DecodeError> {
    let name = field(fields, 0, "name")?;
    let name_len = name.chars().count();
    if name_len == 0 || name_len > MAX_NAME_LEN {
        return Err(DecodeError::InvalidName {
            len: name_len,
            max: MAX_NAME_LEN,
        });
    }

    let length_text = field(fields, 1, "length")?;
    let length = length_text
        .trim()
        .parse::<u32>()
        .map_err(|_| DecodeError::InvalidLength {
            value: length_text.to_string(),
        })?;

    let location_text = field(fields, 2, "location")?;
    let location = Location::parse(location_text);
    if location == Location::Unknown {
        return Err(DecodeError::UnknownLocation {
            value: location_text.to_string(),
        });
    }

    let detail = decode_detail(location, field(fields, 3, "detail")?)?;
    let balance = decode_balance(field(fields, 4, "balance")?)?;

    Ok(Boat::new(name, length, detail, balance))
}

fn field<'a>(fields: &[&'a str], index: usize, name: &'static str) -> Result<&'a str, DecodeError> {
    fields
        .get(index)
        .copied()
        .ok_or(DecodeError::MissingField { field: name })
}

fn decode_detail(location: Location, text: &str) -> Result<LocationDetail, DecodeError> {
    let invalid = || DecodeError::InvalidDetail {
        location: location.to_string(),
        value: text.to_string(),
    };

    match location {
        Location::Slip => text
            .trim()
            .parse()
            .map(LocationDetail::Slip)
            .map_err(|_| invalid()),
        Location::Storage => text
            .trim()
            .parse()
            .map(LocationDetail::Storage)
            .map_err(|_| invalid()),
        Location::Land => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(bay), None) if !bay.is_whitespace() => Ok(LocationDetail::Land(bay)),
                _ => Err(invalid()),
            }
        }
        Location::Trailor => {
            let len = text.chars().count();
            if len == 0 || len > MAX_TAG_LEN {
                return Err(invalid());
            }
            Ok(LocationDetail::Trailor(text.to_string()))
        }
        Location::Unknown => Err(DecodeError::UnknownLocation {
            value: location.to_string(),
        }),
    }
}

fn decode_balance(text: &str) -> Result<f64, DecodeError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|balance| balance.is_finite())
        .ok_or_else(|| DecodeError::InvalidBalance {
            value: text.to_string(),
        })
}
