use std::collections::HashMap;

/// Value produced by one widget binding.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A cleared or never-filled nullable widget.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Variant name, for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
        }
    }

    /// Human-readable form used for choice rows and reset tooltips.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(x) => x.to_string(),
            Self::Str(s) => s.clone(),
            Self::List(vs) => {
                let parts: Vec<String> = vs.iter().map(Self::display).collect();
                format!("[{}]", parts.join(", "))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}
impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}
impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}
impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}
impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}
impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

/// The name/value mapping produced when a dialog is accepted.
///
/// Contains exactly one entry per argument specification; iteration follows
/// declaration order. Grouping is cosmetic and does not appear here.
#[derive(Debug, Default)]
pub struct DialogValues {
    values: HashMap<String, Value>,
    order: Vec<String>,
}

impl DialogValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, name: &str, value: Value) {
        if !self.values.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.values.insert(name.to_string(), value);
    }

    /// Raw value for `name`, if that argument exists.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// True if the argument exists and resolved to [`Value::Null`].
    #[must_use]
    pub fn is_null(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(Value::Null))
    }

    /// String value, if `name` resolved to one.
    #[must_use]
    pub fn str(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(Value::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Integer value, if `name` resolved to one.
    #[must_use]
    pub fn int(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(Value::Int(i)) => Some(*i),
            _ => None,
        }
    }

    /// Float value, if `name` resolved to one.
    #[must_use]
    pub fn float(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(Value::Float(x)) => Some(*x),
            _ => None,
        }
    }

    /// Boolean value, if `name` resolved to one.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// List value as a slice, if `name` resolved to one.
    #[must_use]
    pub fn list(&self, name: &str) -> Option<&[Value]> {
        match self.values.get(name) {
            Some(Value::List(vs)) => Some(vs.as_slice()),
            _ => None,
        }
    }

    /// Number of entries (one per argument specification).
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.order.iter().filter_map(|k| self.values.get(k).map(|v| (k.as_str(), v)))
    }
}
