use crate::{Binding, DialogValues, Error, GroupPane, Result, Schema};
use egui::Ui;
use std::collections::HashSet;

/// Presentation options for a dialog.
#[derive(Clone, Debug)]
pub struct DialogOptions {
    /// Window title.
    pub title: String,
    /// Title of the implicit pane holding ungrouped arguments.
    pub orphan_title: String,
    /// Render unsupported argument kinds as plain text fields instead of
    /// failing construction.
    pub text_fallback: bool,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self { title: "Settings".to_string(), orphan_title: "Main".to_string(), text_fallback: false }
    }
}

/// How a presented dialog ended.
#[derive(Debug)]
pub enum DialogOutcome {
    /// The user accepted; every argument resolved to a value.
    Accepted(DialogValues),
    /// The user cancelled or dismissed the dialog. Not an error.
    Cancelled,
}

impl DialogOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The collected values, if the dialog was accepted.
    #[must_use]
    pub fn values(self) -> Option<DialogValues> {
        match self {
            Self::Accepted(v) => Some(v),
            Self::Cancelled => None,
        }
    }
}

/// A settings form built from one [`Schema`]: one pane per declared group,
/// plus an implicit pane for ungrouped arguments.
#[derive(Debug)]
pub struct ArgDialog {
    title: String,
    panes: Vec<GroupPane>,
    selected: usize,
}

impl ArgDialog {
    /// Build the form with default [`DialogOptions`].
    ///
    /// # Errors
    /// [`Error::DuplicateArg`] for repeated argument names, and factory
    /// errors for unmapped kinds.
    pub fn new(schema: &Schema) -> Result<Self> {
        Self::with_options(schema, &DialogOptions::default())
    }

    /// Build the form. The schema is only borrowed here; the dialog owns its
    /// widget state afterwards.
    ///
    /// # Errors
    /// See [`ArgDialog::new`].
    pub fn with_options(schema: &Schema, options: &DialogOptions) -> Result<Self> {
        let mut seen = HashSet::new();
        for spec in schema.all_args() {
            if !seen.insert(spec.get_name()) {
                return Err(Error::DuplicateArg(spec.get_name().to_string()));
            }
        }

        let mut panes = Vec::new();
        if !schema.get_args().is_empty() {
            panes.push(GroupPane::build(
                options.orphan_title.clone(),
                schema.get_description(),
                schema.get_args(),
                options.text_fallback,
            )?);
        }
        for group in schema.get_groups() {
            panes.push(GroupPane::build(
                group.get_title(),
                group.get_description(),
                group.get_args(),
                options.text_fallback,
            )?);
        }
        log::debug!(
            "built dialog '{}': {} panes, {} rows",
            options.title,
            panes.len(),
            panes.iter().map(|p| p.bindings().len()).sum::<usize>()
        );
        Ok(Self { title: options.title.clone(), panes, selected: 0 })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
    #[must_use]
    pub fn panes(&self) -> &[GroupPane] {
        &self.panes
    }
    pub fn panes_mut(&mut self) -> &mut [GroupPane] {
        &mut self.panes
    }

    /// Find a row by argument name across all panes.
    pub fn binding_mut(&mut self, name: &str) -> Option<&mut Binding> {
        self.panes.iter_mut().find_map(|p| p.binding_mut(name))
    }

    /// Overlay previously obtained values onto the form. Names absent from
    /// `values` keep their current state.
    pub fn set_values(&mut self, values: &DialogValues) {
        for pane in &mut self.panes {
            for binding in pane.bindings_mut() {
                if let Some(v) = values.get(binding.name()) {
                    binding.set_value(v);
                }
            }
        }
    }

    /// Walk every row and assemble the result mapping.
    ///
    /// Any row that fails to read aborts the whole resolution; no partial
    /// mapping is returned.
    ///
    /// # Errors
    /// [`Error::Resolution`] from the first failing row.
    pub fn resolve(&self) -> Result<DialogValues> {
        let mut out = DialogValues::new();
        for pane in &self.panes {
            for binding in pane.bindings() {
                out.insert(binding.name(), binding.value()?);
            }
        }
        log::debug!("resolved {} values", out.len());
        Ok(out)
    }

    /// Render the form body: a pane list on the left when there is more than
    /// one pane, the active pane on the right.
    pub fn show(&mut self, ui: &mut Ui) {
        if self.panes.len() > 1 {
            let titles: Vec<String> = self.panes.iter().map(|p| p.title().to_string()).collect();
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    ui.set_max_width(100.0);
                    for (i, title) in titles.iter().enumerate() {
                        if ui.selectable_label(self.selected == i, title.as_str()).clicked() {
                            self.selected = i;
                        }
                    }
                });
                ui.separator();
                ui.vertical(|ui| {
                    if let Some(pane) = self.panes.get_mut(self.selected) {
                        pane.show(ui);
                    }
                });
            });
        } else if let Some(pane) = self.panes.first_mut() {
            pane.show(ui);
        }
    }
}

#[cfg(feature = "native")]
impl ArgDialog {
    /// Show the form as a blocking modal window.
    ///
    /// Suspends the caller inside the host event loop until the user
    /// accepts, cancels or dismisses the window; dismissal counts as
    /// cancel.
    ///
    /// # Errors
    /// Resolution errors from an accepted form, and [`Error::Host`] when
    /// the window cannot be opened.
    pub fn present(self) -> Result<DialogOutcome> {
        use std::sync::{Arc, Mutex};

        let title = self.title.clone();
        let slot: Arc<Mutex<Option<Result<DialogOutcome>>>> = Arc::new(Mutex::new(None));

        let app = DialogApp { dialog: self, slot: Arc::clone(&slot) };
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([800.0, 400.0])
                .with_title(title.clone()),
            ..Default::default()
        };
        eframe::run_native(&title, native_options, Box::new(move |_cc| Ok(Box::new(app))))
            .map_err(|e| Error::Host(e.to_string()))?;

        let taken =
            slot.lock().map_err(|_| Error::Host("outcome slot poisoned".to_string()))?.take();
        match taken {
            Some(outcome) => outcome,
            // window dismissed without a button press
            None => Ok(DialogOutcome::Cancelled),
        }
    }
}

/// Build and present `schema` as a modal dialog with default options.
///
/// # Errors
/// Construction and resolution errors, plus [`Error::Host`] when the window
/// cannot be opened.
#[cfg(feature = "native")]
pub fn present(schema: &Schema) -> Result<DialogOutcome> {
    ArgDialog::new(schema)?.present()
}

/// Build and present `schema` as a modal dialog.
///
/// # Errors
/// See [`present`].
#[cfg(feature = "native")]
pub fn present_with(schema: &Schema, options: &DialogOptions) -> Result<DialogOutcome> {
    ArgDialog::with_options(schema, options)?.present()
}

#[cfg(feature = "native")]
struct DialogApp {
    dialog: ArgDialog,
    slot: std::sync::Arc<std::sync::Mutex<Option<Result<DialogOutcome>>>>,
}

#[cfg(feature = "native")]
impl DialogApp {
    fn finish(&self, ctx: &egui::Context, outcome: Result<DialogOutcome>) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(outcome);
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

#[cfg(feature = "native")]
impl eframe::App for DialogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("dialog_buttons").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Cancel").clicked() {
                    self.finish(ctx, Ok(DialogOutcome::Cancelled));
                }
                if ui.button("Ok").clicked() {
                    let outcome = self.dialog.resolve().map(DialogOutcome::Accepted);
                    self.finish(ctx, outcome);
                }
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.dialog.show(ui);
            });
        });
    }
}
