use crate::{ArgKind, ArgSpec, Error, Result, Value};
use egui::{ComboBox, DragValue, Ui};

/// Spin-box range applied when a numeric argument declares no bounds.
pub const SPIN_BOUND: i64 = 1 << 30;

/// Editable state behind one form row.
///
/// Chosen once per argument by the factory, then mutated by the UI until the
/// dialog is resolved.
#[derive(Clone, Debug)]
pub enum WidgetState {
    /// Single-line text field.
    Text { buf: String },
    /// Integer spin box, clamped to `min..=max`.
    Int { value: i64, min: i64, max: i64 },
    /// Decimal spin box, clamped to `min..=max`.
    Float { value: f64, min: f64, max: f64 },
    /// Checkbox. `base` is the value an untouched/cleared box reads as.
    Toggle { on: bool, base: bool },
    /// Store-const checkbox; reads as `value` while on, null while off.
    ConstToggle { on: bool, value: Value },
    /// Single-selection dropdown with a leading unset row.
    Choice { options: Vec<Value>, selected: Option<usize> },
    /// Repeatable rows of one element kind.
    List { element: ArgKind, items: Vec<WidgetState> },
}

/// Dispatch an argument kind onto a widget state, or `None` when the kind
/// has no mapping.
fn state_for(kind: &ArgKind) -> Option<WidgetState> {
    match kind {
        ArgKind::Str => Some(WidgetState::Text { buf: String::new() }),
        ArgKind::Int { min, max } => Some(WidgetState::Int {
            value: 0,
            min: min.unwrap_or(-SPIN_BOUND),
            max: max.unwrap_or(SPIN_BOUND),
        }),
        #[allow(clippy::cast_precision_loss)]
        ArgKind::Float { min, max } => Some(WidgetState::Float {
            value: 0.0,
            min: min.unwrap_or(-SPIN_BOUND as f64),
            max: max.unwrap_or(SPIN_BOUND as f64),
        }),
        ArgKind::Bool => Some(WidgetState::Toggle { on: false, base: false }),
        ArgKind::Flag { stores } => Some(WidgetState::Toggle { on: !stores, base: !stores }),
        ArgKind::Const { value } => Some(WidgetState::ConstToggle { on: true, value: value.clone() }),
        ArgKind::Choice { options } if !options.is_empty() => {
            Some(WidgetState::Choice { options: options.clone(), selected: None })
        }
        ArgKind::Choice { .. } | ArgKind::Custom { .. } => None,
        ArgKind::List { element } => match element.as_ref() {
            el @ (ArgKind::Str
            | ArgKind::Int { .. }
            | ArgKind::Float { .. }
            | ArgKind::Bool
            | ArgKind::Choice { .. }) => {
                state_for(el).map(|_| WidgetState::List { element: el.clone(), items: Vec::new() })
            }
            _ => None,
        },
    }
}

/// Whether a state distinguishes "no value" from its edited value.
const fn nullable(state: &WidgetState) -> bool {
    !matches!(state, WidgetState::Toggle { .. } | WidgetState::ConstToggle { .. })
}

/// Read a state back as a [`Value`], validating bounds and selection range.
fn read_state(arg: &str, state: &WidgetState) -> Result<Value> {
    match state {
        WidgetState::Text { buf } => Ok(Value::Str(buf.clone())),
        WidgetState::Int { value, min, max } => {
            if value < min || value > max {
                return Err(Error::resolution(arg, format!("value {value} outside bounds {min}..={max}")));
            }
            Ok(Value::Int(*value))
        }
        WidgetState::Float { value, min, max } => {
            if value < min || value > max {
                return Err(Error::resolution(arg, format!("value {value} outside bounds {min}..={max}")));
            }
            Ok(Value::Float(*value))
        }
        WidgetState::Toggle { on, .. } => Ok(Value::Bool(*on)),
        WidgetState::ConstToggle { on, value } => {
            Ok(if *on { value.clone() } else { Value::Null })
        }
        WidgetState::Choice { options, selected } => match selected {
            None => Ok(Value::Null),
            Some(i) => options
                .get(*i)
                .cloned()
                .ok_or_else(|| Error::resolution(arg, format!("selected row {i} out of range"))),
        },
        WidgetState::List { items, .. } => {
            let vs: Result<Vec<Value>> = items.iter().map(|s| read_state(arg, s)).collect();
            Ok(Value::List(vs?))
        }
    }
}

/// Write a value into a state. Returns false when the value has no sensible
/// representation there (the caller then clears the row instead).
fn apply_state(state: &mut WidgetState, v: &Value) -> bool {
    match (state, v) {
        (WidgetState::Text { buf }, Value::Str(s)) => {
            buf.clone_from(s);
            true
        }
        (WidgetState::Text { buf }, other) => {
            *buf = other.display();
            true
        }
        (WidgetState::Int { value, min, max }, Value::Int(i)) => {
            *value = (*i).clamp(*min, *max);
            true
        }
        (WidgetState::Float { value, min, max }, Value::Float(x)) => {
            *value = x.clamp(*min, *max);
            true
        }
        #[allow(clippy::cast_precision_loss)]
        (WidgetState::Float { value, min, max }, Value::Int(i)) => {
            *value = (*i as f64).clamp(*min, *max);
            true
        }
        (WidgetState::Toggle { on, .. }, Value::Bool(b)) => {
            *on = *b;
            true
        }
        (WidgetState::ConstToggle { on, value }, other) => {
            *on = other == value;
            true
        }
        (WidgetState::Choice { options, selected }, other) => {
            *selected = options.iter().position(|o| o == other);
            selected.is_some()
        }
        (WidgetState::List { element, items }, Value::List(vs)) => {
            items.clear();
            for item in vs {
                if let Some(mut st) = state_for(element) {
                    apply_state(&mut st, item);
                    items.push(st);
                }
            }
            true
        }
        _ => false,
    }
}

/// Return a state to its no-input form.
fn clear_state(state: &mut WidgetState) {
    match state {
        WidgetState::Text { buf } => buf.clear(),
        WidgetState::Int { value, min, max } => *value = 0i64.clamp(*min, *max),
        WidgetState::Float { value, min, max } => *value = 0f64.clamp(*min, *max),
        WidgetState::Toggle { on, base } => *on = *base,
        // store-const rows stay armed so an untouched form carries the const
        WidgetState::ConstToggle { on, .. } => *on = true,
        WidgetState::Choice { selected, .. } => *selected = None,
        WidgetState::List { items, .. } => items.clear(),
    }
}

/// One live form row: a widget state paired with the specification it was
/// built from, readable back as a [`Value`] of the declared kind.
#[derive(Clone, Debug)]
pub struct Binding {
    name: String,
    help: Option<String>,
    default: Option<Value>,
    state: WidgetState,
    nulled: bool,
}

impl Binding {
    /// Widget factory: map one argument specification onto a configured
    /// editable state seeded with the declared default.
    ///
    /// # Errors
    /// [`Error::UnsupportedType`] when the kind has no widget mapping.
    pub fn build(spec: &ArgSpec) -> Result<Self> {
        Self::build_with_fallback(spec, false)
    }

    pub(crate) fn build_with_fallback(spec: &ArgSpec, text_fallback: bool) -> Result<Self> {
        let state = match state_for(spec.get_kind()) {
            Some(s) => s,
            None if text_fallback => {
                log::debug!("no widget mapping for '{}', using text fallback", spec.get_name());
                WidgetState::Text { buf: String::new() }
            }
            None => {
                return Err(Error::UnsupportedType {
                    arg: spec.get_name().to_string(),
                    type_name: spec.get_kind().type_name().to_string(),
                })
            }
        };
        let mut binding = Self {
            name: spec.get_name().to_string(),
            help: spec.get_help().map(str::to_string),
            default: spec.get_default().cloned(),
            state,
            nulled: true,
        };
        binding.reset();
        Ok(binding)
    }

    /// Restore the declared default (or clear, when there is none).
    pub fn reset(&mut self) {
        match self.default.clone() {
            Some(v) => self.set_value(&v),
            None => self.clear(),
        }
    }

    /// Drop any entered value; nullable rows will read back as null.
    pub fn clear(&mut self) {
        clear_state(&mut self.state);
        self.nulled = true;
    }

    /// Overwrite the row with `value`. A value the state cannot represent
    /// clears the row instead.
    pub fn set_value(&mut self, value: &Value) {
        if value.is_null() {
            self.clear();
            return;
        }
        if apply_state(&mut self.state, value) {
            self.nulled = false;
        } else {
            self.clear();
        }
    }

    /// Current value, coerced to the declared kind.
    ///
    /// # Errors
    /// [`Error::Resolution`] when the state violates its bounds or holds an
    /// out-of-range selection.
    pub fn value(&self) -> Result<Value> {
        if self.nulled && nullable(&self.state) {
            return Ok(Value::Null);
        }
        read_state(&self.name, &self.state)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[must_use]
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
    #[must_use]
    pub const fn state(&self) -> &WidgetState {
        &self.state
    }
    pub fn state_mut(&mut self) -> &mut WidgetState {
        self.nulled = false;
        &mut self.state
    }
    #[must_use]
    pub const fn is_nulled(&self) -> bool {
        self.nulled
    }

    /// Render the editor plus the reset control for this row.
    pub fn show(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if show_state(ui, &self.name, &mut self.state) {
                self.nulled = false;
            }
            let tooltip = match &self.default {
                Some(d) => format!("Set default: {}", d.display()),
                None => "Clear".to_string(),
            };
            if ui.small_button("↶").on_hover_text(tooltip).clicked() {
                self.reset();
            }
        });
    }
}

/// Render one widget state; returns true when the user changed it.
fn show_state(ui: &mut Ui, salt: &str, state: &mut WidgetState) -> bool {
    match state {
        WidgetState::Text { buf } => ui.text_edit_singleline(buf).changed(),
        WidgetState::Int { value, min, max } => {
            ui.add(DragValue::new(value).range(*min..=*max)).changed()
        }
        WidgetState::Float { value, min, max } => {
            ui.add(DragValue::new(value).range(*min..=*max).speed(0.1)).changed()
        }
        WidgetState::Toggle { on, .. } => ui.checkbox(on, "").changed(),
        WidgetState::ConstToggle { on, value } => ui.checkbox(on, value.display()).changed(),
        WidgetState::Choice { options, selected } => {
            let mut changed = false;
            let current =
                selected.and_then(|i| options.get(i)).map(Value::display).unwrap_or_default();
            ComboBox::from_id_salt(salt.to_string()).selected_text(current).show_ui(ui, |ui| {
                if ui.selectable_value(selected, None, " ").changed() {
                    changed = true;
                }
                for i in 0..options.len() {
                    let label = options[i].display();
                    if ui.selectable_value(selected, Some(i), label).changed() {
                        changed = true;
                    }
                }
            });
            changed
        }
        WidgetState::List { element, items } => {
            let mut changed = false;
            let mut remove = None;
            ui.vertical(|ui| {
                for (i, item) in items.iter_mut().enumerate() {
                    ui.horizontal(|ui| {
                        if ui.small_button("✕").clicked() {
                            remove = Some(i);
                        }
                        if show_state(ui, &format!("{salt}#{i}"), item) {
                            changed = true;
                        }
                    });
                }
                if ui.small_button("➕ Add item").clicked() {
                    if let Some(st) = state_for(element) {
                        items.push(st);
                        changed = true;
                    }
                }
            });
            if let Some(i) = remove {
                items.remove(i);
                changed = true;
            }
            changed
        }
    }
}
