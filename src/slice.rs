/// Negative-index, step-aware array slicing (`a[start:stop:step]`).
///
/// Mirrors the endpoint-adjustment algorithm used for Python-style slices:
/// a `None` endpoint defaults to "whole array in this direction", a
/// negative endpoint wraps once from the end, and an out-of-range endpoint
/// clamps to the nearest valid boundary for the slice's direction. `step`
/// is guaranteed non-zero by the parser (`CompileError::ZeroStep`).
use crate::value::Value;

fn adjust_endpoint(value: i64, len: i64, step: i64) -> i64 {
    if value < 0 {
        let adjusted = value + len;
        if adjusted < 0 {
            if step < 0 { -1 } else { 0 }
        } else {
            adjusted
        }
    } else if value >= len {
        if step < 0 { len - 1 } else { len }
    } else {
        value
    }
}

fn adjust_start(start: Option<i64>, len: i64, step: i64) -> i64 {
    match start {
        Some(s) => adjust_endpoint(s, len, step),
        None => {
            if step < 0 {
                len - 1
            } else {
                0
            }
        }
    }
}

fn adjust_stop(stop: Option<i64>, len: i64, step: i64) -> i64 {
    match stop {
        Some(s) => adjust_endpoint(s, len, step),
        None => {
            if step < 0 {
                -1
            } else {
                len
            }
        }
    }
}

/// Applies a slice to an array's elements, by value. `step` must be
/// non-zero — callers (the parser) reject `step == 0` at compile time, so
/// this function treats it as a precondition rather than a runtime check.
pub fn slice(items: &[Value], start: Option<i64>, stop: Option<i64>, step: i64) -> Vec<Value> {
    debug_assert_ne!(step, 0);
    let len = items.len() as i64;
    let start = adjust_start(start, len, step);
    let stop = adjust_stop(stop, len, step);

    let mut result = Vec::new();
    if step > 0 {
        let mut i = start;
        while i < stop {
            result.push(items[i as usize].clone());
            i += step;
        }
    } else {
        let mut i = start;
        while i > stop {
            result.push(items[i as usize].clone());
            i += step;
        }
    }
    result
}
