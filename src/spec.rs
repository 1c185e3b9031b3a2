use crate::Value;

/// Widget-relevant classification of one argument.
///
/// Resolved once when the schema is built; the factory dispatches on this
/// tag instead of re-inspecting defaults or choices per access.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgKind {
    /// Free text.
    Str,
    /// Integer, optionally bounded. Unset bounds fall back to the spin range.
    Int { min: Option<i64>, max: Option<i64> },
    /// Float, optionally bounded.
    Float { min: Option<f64>, max: Option<f64> },
    /// Declared boolean value type.
    Bool,
    /// Store-true / store-false action. `stores` is the value presence sets.
    Flag { stores: bool },
    /// Store-const action.
    Const { value: Value },
    /// Finite choice set, declaration order preserved.
    Choice { options: Vec<Value> },
    /// Multiple values of one element kind.
    List { element: Box<ArgKind> },
    /// A type with no widget mapping; rejected by the factory.
    Custom { type_name: String },
}

impl ArgKind {
    /// Short type name, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Str => "str",
            Self::Int { .. } => "int",
            Self::Float { .. } => "float",
            Self::Bool => "bool",
            Self::Flag { .. } => "flag",
            Self::Const { .. } => "const",
            Self::Choice { .. } => "choice",
            Self::List { .. } => "list",
            Self::Custom { type_name } => type_name,
        }
    }
}

/// One configurable input: name, kind, default and help text.
///
/// Immutable once built; owned by the [`Schema`] and borrowed by the widget
/// factory.
#[derive(Clone, Debug)]
pub struct ArgSpec {
    name: String,
    kind: ArgKind,
    default: Option<Value>,
    help: Option<String>,
}

impl ArgSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ArgKind) -> Self {
        Self { name: name.into(), kind, default: None, help: None }
    }

    /// Free-text argument.
    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Str)
    }

    /// Unbounded integer argument.
    #[must_use]
    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Int { min: None, max: None })
    }

    /// Unbounded float argument.
    #[must_use]
    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Float { min: None, max: None })
    }

    /// Declared boolean value type.
    #[must_use]
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Bool)
    }

    /// Store-true flag.
    #[must_use]
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Flag { stores: true })
    }

    /// Store-false flag.
    #[must_use]
    pub fn flag_false(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Flag { stores: false })
    }

    /// Store-const argument.
    #[must_use]
    pub fn constant(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(name, ArgKind::Const { value: value.into() })
    }

    /// Single selection out of a finite choice set.
    #[must_use]
    pub fn choice(name: impl Into<String>, options: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self::new(name, ArgKind::Choice { options: options.into_iter().map(Into::into).collect() })
    }

    /// Repeatable argument holding values of `element`.
    #[must_use]
    pub fn list(name: impl Into<String>, element: ArgKind) -> Self {
        Self::new(name, ArgKind::List { element: Box::new(element) })
    }

    /// A type the factory cannot map; construction fails unless the dialog
    /// enables the text fallback.
    #[must_use]
    pub fn custom(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Custom { type_name: type_name.into() })
    }

    // --- builders ---
    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
    #[must_use]
    pub fn help(mut self, h: impl Into<String>) -> Self {
        self.help = Some(h.into());
        self
    }

    // --- getters ---
    #[must_use]
    pub fn get_name(&self) -> &str {
        &self.name
    }
    #[must_use]
    pub const fn get_kind(&self) -> &ArgKind {
        &self.kind
    }
    #[must_use]
    pub const fn get_default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
    #[must_use]
    pub fn get_help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

/// A titled, ordered set of argument specifications.
///
/// Grouping is cosmetic: it controls how the form is laid out, never how
/// values are collected.
#[derive(Clone, Debug)]
pub struct ArgGroup {
    title: String,
    description: Option<String>,
    args: Vec<ArgSpec>,
}

impl ArgGroup {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), description: None, args: Vec::new() }
    }
    // builders
    #[must_use]
    pub fn desc(mut self, d: impl Into<String>) -> Self {
        self.description = Some(d.into());
        self
    }
    #[must_use]
    pub fn arg(mut self, a: ArgSpec) -> Self {
        self.args.push(a);
        self
    }
    #[must_use]
    pub fn args(mut self, it: impl IntoIterator<Item = ArgSpec>) -> Self {
        self.args.extend(it);
        self
    }
    // getters
    #[must_use]
    pub fn get_title(&self) -> &str {
        &self.title
    }
    #[must_use]
    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    #[must_use]
    pub fn get_args(&self) -> &[ArgSpec] {
        &self.args
    }
}

/// The full argument schema a dialog is built from: ungrouped top-level
/// arguments plus declared groups. Read-only from the dialog's perspective.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    description: Option<String>,
    args: Vec<ArgSpec>,
    groups: Vec<ArgGroup>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    // builders
    #[must_use]
    pub fn desc(mut self, d: impl Into<String>) -> Self {
        self.description = Some(d.into());
        self
    }
    /// Add an ungrouped top-level argument.
    #[must_use]
    pub fn arg(mut self, a: ArgSpec) -> Self {
        self.args.push(a);
        self
    }
    #[must_use]
    pub fn group(mut self, g: ArgGroup) -> Self {
        self.groups.push(g);
        self
    }
    // getters
    #[must_use]
    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    #[must_use]
    pub fn get_args(&self) -> &[ArgSpec] {
        &self.args
    }
    #[must_use]
    pub fn get_groups(&self) -> &[ArgGroup] {
        &self.groups
    }

    /// All specifications, ungrouped first then group by group, in
    /// declaration order.
    pub fn all_args(&self) -> impl Iterator<Item = &ArgSpec> {
        self.args.iter().chain(self.groups.iter().flat_map(|g| g.args.iter()))
    }
}
