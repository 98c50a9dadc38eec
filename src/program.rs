//! The demo sequence: fixed bindings, two function calls, three branches.
//!
//! `run` never prints. It returns a [`Transcript`] whose lines are in
//! statement order, and the caller decides where they go.

use crate::arith::{add, check_positive};
use crate::value::{Value, format_line};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Not configurable.
pub const FLAG: bool = true;

/// Initial values of every non-constant variable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Bindings {
    pub a: i64,
    pub str: String,
    pub b: i64,
    pub g: String,
    pub h: bool,
    pub c: i64,
    pub j: Vec<i64>,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            a: 10,
            str: "Hello".into(),
            b: 42,
            g: "Grouped".into(),
            h: true,
            c: 100,
            j: vec![1, 2, 3, 4, 5],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub lines: Vec<String>,
    /// Value of `result` when the sequence ends.
    pub final_result: i64,
}

impl Transcript {
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

pub fn run(bindings: &Bindings) -> Transcript {
    let Bindings { a, str, b, g, h, c, j } = bindings;
    let (a, b, c, h) = (*a, *b, *c, *h);
    let j = j.as_slice();
    let mut lines = Vec::with_capacity(9);

    lines.push(format_line(
        "Initial values:",
        &[
            a.into(),
            str.as_str().into(),
            b.into(),
            g.as_str().into(),
            h.into(),
            c.into(),
            j.into(),
        ],
    ));

    let mut result = add(a, b);
    debug!(a, b, result, "computed add(a, b)");
    lines.push(format_line("Result of add(a, b):", &[result.into()]));

    if FLAG {
        lines.push(format_line("Flag is true, as expected:", &[FLAG.into()]));
    } else {
        lines.push(format_line("Flag is false, unexpected.", &[]));
    }

    if check_positive(result) {
        lines.push(format_line("Result is positive. Setting result to 10.", &[]));
        result = 10;
    } else {
        lines.push(format_line(
            "Result is not positive. Setting result to 20.",
            &[],
        ));
        result = 20;
    }
    debug!(result, "result reassigned by positivity branch");

    lines.push(format_line("Final value of result:", &[result.into()]));
    lines.push(format_line(
        "Values of multiple variables:",
        &[
            str.as_str().into(),
            b.into(),
            g.as_str().into(),
            h.into(),
            Value::from(j),
        ],
    ));

    result = add(c, b);
    debug!(c, b, result, "computed add(c, b)");
    lines.push(format_line("Result of add(c, b):", &[result.into()]));
    lines.push(format_line("Checking positivity of new result:", &[]));
    if check_positive(result) {
        lines.push(format_line("New result is positive.", &[]));
    } else {
        lines.push(format_line("New result is not positive.", &[]));
    }

    debug!(lines = lines.len(), final_result = result, "sequence complete");
    Transcript {
        lines,
        final_result: result,
    }
}
