use serde::Serialize;

/// A printable value. `Display` renders it the way the transcript shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Value {
    Int(i64),
    Text(String),
    Bool(bool),
    IntList(Vec<i64>),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::IntList(items) => {
                write!(f, "[")?;
                for (i, n) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{n}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<&[i64]> for Value {
    fn from(items: &[i64]) -> Self {
        Self::IntList(items.to_vec())
    }
}

/// Join a label and its operands with single spaces.
pub fn format_line(label: &str, values: &[Value]) -> String {
    let mut line = String::from(label);
    for value in values {
        line.push(' ');
        line.push_str(&value.to_string());
    }
    line
}
