// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! Object records: JSON rows describing the boxes of one frame
//!
//! A record is either the positional row produced by the tracking scripts,
//! `[x, y, length, width, height, angle, category]`, or an object with the
//! same names as keys.

use crate::error::{Result, VisualizerError};
use crate::geometry::OrientedBox;
use serde::Deserialize;
use serde_json::Value;

const ROW_FIELDS: [&str; 7] = ["x", "y", "length", "width", "height", "angle", "category"];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NamedRecord {
    x: f64,
    y: f64,
    length: f64,
    width: f64,
    height: f64,
    angle: f64,
    category: String,
}

/// Parse a JSON array of object records
pub fn parse_objects(source: &str) -> Result<Vec<OrientedBox>> {
    let value: Value = serde_json::from_str(source)
        .map_err(|e| VisualizerError::InvalidInput(format!("not valid JSON: {e}")))?;
    let Value::Array(records) = value else {
        return Err(VisualizerError::InvalidInput(
            "expected a JSON array of object records".into(),
        ));
    };

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            parse_record(record).map_err(|e| match e {
                VisualizerError::InvalidInput(msg) => {
                    VisualizerError::InvalidInput(format!("record {index}: {msg}"))
                }
                other => other,
            })
        })
        .collect()
}

/// Turn one record into a box. Dimensions are not checked here.
pub fn parse_record(record: &Value) -> Result<OrientedBox> {
    match record {
        Value::Array(row) => parse_row(row),
        Value::Object(_) => {
            let named = NamedRecord::deserialize(record)
                .map_err(|e| VisualizerError::InvalidInput(e.to_string()))?;
            let boxed = OrientedBox::new(
                named.x,
                named.y,
                named.length,
                named.width,
                named.height,
                named.angle,
                named.category,
            );
            ensure_finite(&boxed)?;
            Ok(boxed)
        }
        other => Err(VisualizerError::InvalidInput(format!(
            "expected an array or object, found {other}"
        ))),
    }
}

fn parse_row(row: &[Value]) -> Result<OrientedBox> {
    if row.len() != ROW_FIELDS.len() {
        return Err(VisualizerError::InvalidInput(format!(
            "expected {} fields [{}], found {}",
            ROW_FIELDS.len(),
            ROW_FIELDS.join(", "),
            row.len()
        )));
    }

    let mut numbers = [0.0; 6];
    for (i, slot) in numbers.iter_mut().enumerate() {
        *slot = row[i].as_f64().ok_or_else(|| {
            VisualizerError::InvalidInput(format!(
                "field `{}` must be a number, found {}",
                ROW_FIELDS[i], row[i]
            ))
        })?;
    }
    let category = row[6].as_str().ok_or_else(|| {
        VisualizerError::InvalidInput(format!(
            "field `category` must be a string, found {}",
            row[6]
        ))
    })?;

    let [x, y, length, width, height, angle] = numbers;
    let boxed = OrientedBox::new(x, y, length, width, height, angle, category);
    ensure_finite(&boxed)?;
    Ok(boxed)
}

fn ensure_finite(boxed: &OrientedBox) -> Result<()> {
    let fields = [
        ("x", boxed.center.x),
        ("y", boxed.center.y),
        ("length", boxed.length),
        ("width", boxed.width),
        ("height", boxed.height),
        ("angle", boxed.angle),
    ];
    match fields.iter().find(|(_, v)| !v.is_finite()) {
        Some((name, v)) => Err(VisualizerError::InvalidInput(format!(
            "field `{name}` must be finite, found {v}"
        ))),
        None => Ok(()),
    }
}
