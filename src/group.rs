use crate::{ArgSpec, Binding, Result};
use egui::Ui;

/// A titled pane of argument rows, one [`Binding`] per specification in
/// declaration order.
///
/// A pane with zero arguments still renders its title, mirroring the source
/// schema's grouping.
#[derive(Debug)]
pub struct GroupPane {
    title: String,
    description: Option<String>,
    bindings: Vec<Binding>,
}

impl GroupPane {
    /// Build a pane by running every specification through the widget
    /// factory.
    ///
    /// # Errors
    /// Propagates [`crate::Error::UnsupportedType`] from the factory unless
    /// `text_fallback` is set.
    pub fn build(
        title: impl Into<String>,
        description: Option<&str>,
        specs: &[ArgSpec],
        text_fallback: bool,
    ) -> Result<Self> {
        let mut bindings = Vec::with_capacity(specs.len());
        for spec in specs {
            bindings.push(Binding::build_with_fallback(spec, text_fallback)?);
        }
        let title = title.into();
        log::trace!("built pane '{}' with {} rows", title, bindings.len());
        Ok(Self { title, description: description.map(str::to_string), bindings })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }
    pub fn bindings_mut(&mut self) -> &mut [Binding] {
        &mut self.bindings
    }

    /// Find a row by argument name.
    pub fn binding_mut(&mut self, name: &str) -> Option<&mut Binding> {
        self.bindings.iter_mut().find(|b| b.name() == name)
    }

    /// Render the title, description and the two-column form.
    pub fn show(&mut self, ui: &mut Ui) {
        ui.heading(self.title.as_str());
        if let Some(desc) = &self.description {
            ui.label(desc.clone());
        }
        ui.add_space(8.0);
        egui::Grid::new(self.title.clone()).num_columns(2).spacing([32.0, 6.0]).show(ui, |ui| {
            for binding in &mut self.bindings {
                let label = ui.label(binding.name());
                if let Some(help) = binding.help() {
                    label.on_hover_text(help.to_string());
                }
                binding.show(ui);
                ui.end_row();
            }
        });
    }
}
