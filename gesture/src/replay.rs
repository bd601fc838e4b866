//! Recorded landmark stream reader.
//!
//! One frame per line, as an s-expression plist:
//!
//! ```text
//! (:width 640 :height 480 :hands (((x0 y0 z0) (x1 y1 z1) ... (x20 y20 z20))))
//! ```
//!
//! `:hands` may be `()` or `nil` for a frame with no detection.  Blank lines
//! and lines starting with `;` are ignored.

use std::io::BufRead;

use lexpr::Value;

use crate::error::{GestureError, Result};
use crate::hand::Landmark;

/// One detector frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: i32,
    pub height: i32,
    pub hands: Vec<Vec<Landmark>>,
}

impl Frame {
    /// Format as a replay line.
    pub fn to_sexp(&self) -> String {
        let hands: Vec<String> = self
            .hands
            .iter()
            .map(|hand| {
                let pts: Vec<String> = hand
                    .iter()
                    .map(|p| format!("({} {} {:?})", p.x, p.y, p.z))
                    .collect();
                format!("({})", pts.join(" "))
            })
            .collect();
        format!(
            "(:width {} :height {} :hands ({}))",
            self.width,
            self.height,
            hands.join(" ")
        )
    }
}

/// Parse a single replay line.  `line` is 1-based and only used in errors.
pub fn parse_frame(line: usize, raw: &str) -> Result<Frame> {
    let value = lexpr::from_str(raw)
        .map_err(|e| GestureError::parse(line, format!("malformed s-expression: {}", e)))?;

    let width = plist_get(&value, "width")
        .and_then(as_int)
        .ok_or_else(|| GestureError::parse(line, "missing or non-integer :width"))?;
    let height = plist_get(&value, "height")
        .and_then(as_int)
        .ok_or_else(|| GestureError::parse(line, "missing or non-integer :height"))?;

    let hands_value = plist_get(&value, "hands")
        .ok_or_else(|| GestureError::parse(line, "missing :hands"))?;
    let hand_list = list_items(hands_value)
        .ok_or_else(|| GestureError::parse(line, ":hands must be a list"))?;

    let mut hands = Vec::with_capacity(hand_list.len());
    for (h, hand) in hand_list.into_iter().enumerate() {
        let points = list_items(hand)
            .ok_or_else(|| GestureError::parse(line, format!("hand {} must be a list", h)))?;
        let mut landmarks = Vec::with_capacity(points.len());
        for (i, point) in points.into_iter().enumerate() {
            landmarks.push(parse_point(point).ok_or_else(|| {
                GestureError::parse(line, format!("hand {} point {}: expected (x y z)", h, i))
            })?);
        }
        hands.push(landmarks);
    }

    let width = i32::try_from(width)
        .map_err(|_| GestureError::parse(line, format!(":width {} out of range", width)))?;
    let height = i32::try_from(height)
        .map_err(|_| GestureError::parse(line, format!(":height {} out of range", height)))?;

    Ok(Frame {
        width,
        height,
        hands,
    })
}

/// Iterate frames from a reader, skipping blank and comment lines.
pub fn read_frames<R: BufRead>(reader: R) -> impl Iterator<Item = Result<Frame>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line_no = i + 1;
            match line {
                Err(e) => Some(Err(GestureError::parse(line_no, e.to_string()))),
                Ok(text) => {
                    let trimmed = text.trim();
                    if trimmed.is_empty() || trimmed.starts_with(';') {
                        None
                    } else {
                        Some(parse_frame(line_no, trimmed))
                    }
                }
            }
        })
}

fn parse_point(value: &Value) -> Option<Landmark> {
    let items = list_items(value)?;
    if items.len() != 3 {
        return None;
    }
    let x = i32::try_from(as_int(items[0])?).ok()?;
    let y = i32::try_from(as_int(items[1])?).ok()?;
    let z = as_float(items[2])?;
    Some(Landmark::new(x, y, z as f32))
}

/// Elements of a proper list; `()` and `nil` are empty.
fn list_items(value: &Value) -> Option<Vec<&Value>> {
    let mut items = Vec::new();
    let mut current = value;
    loop {
        match current {
            Value::Cons(pair) => {
                items.push(pair.car());
                current = pair.cdr();
            }
            Value::Null | Value::Nil => return Some(items),
            Value::Symbol(s) if s.as_ref() == "nil" => return Some(items),
            _ => return None,
        }
    }
}

/// Value following `:key` in a plist.  Accepts both keyword and
/// colon-prefixed symbol spellings.
fn plist_get<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let prefixed = format!(":{}", key);
    let items = list_items(value)?;
    let mut iter = items.into_iter();
    while let Some(item) = iter.next() {
        let is_key = match item {
            Value::Keyword(k) => k.as_ref() == key,
            Value::Symbol(s) => s.as_ref() == prefixed,
            _ => false,
        };
        let val = iter.next()?;
        if is_key {
            return Some(val);
        }
    }
    None
}

fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
