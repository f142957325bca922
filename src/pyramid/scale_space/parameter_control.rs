use tracing::debug;

use crate::filter::BorderMode;
use crate::{Float,Result};
use super::scale_space_runtime_parameters::ScaleSpaceRuntimeParameters;

/// Receives the new parameter set whenever a [`ScaleSpaceParameterControl`] changes.
pub trait ParameterListener {
    fn parameters_changed(&mut self, parameters: &ScaleSpaceRuntimeParameters);
}

impl<F> ParameterListener for F where F: FnMut(&ScaleSpaceRuntimeParameters) {
    fn parameters_changed(&mut self, parameters: &ScaleSpaceRuntimeParameters) {
        self(parameters)
    }
}

/// Owns a validated parameter set for interactive tuning. Every accepted change is pushed to all listeners.
/// Rejected values leave the parameters untouched and notify no one.
pub struct ScaleSpaceParameterControl {
    parameters: ScaleSpaceRuntimeParameters,
    listeners: Vec<Box<dyn ParameterListener>>
}

impl ScaleSpaceParameterControl {

    pub fn new(parameters: ScaleSpaceRuntimeParameters) -> Result<ScaleSpaceParameterControl> {
        parameters.validate()?;
        Ok(ScaleSpaceParameterControl {parameters, listeners: Vec::new()})
    }

    pub fn parameters(&self) -> &ScaleSpaceRuntimeParameters {
        &self.parameters
    }

    pub fn add_listener<L: ParameterListener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn set_num_scales(&mut self, num_scales: usize) -> Result<()> {
        self.update(ScaleSpaceRuntimeParameters {num_scales, ..self.parameters.clone()})
    }

    pub fn set_base_sigma(&mut self, base_sigma: Float) -> Result<()> {
        self.update(ScaleSpaceRuntimeParameters {base_sigma, ..self.parameters.clone()})
    }

    pub fn set_double_input_image(&mut self, double_input_image: bool) -> Result<()> {
        self.update(ScaleSpaceRuntimeParameters {double_input_image, ..self.parameters.clone()})
    }

    pub fn set_border(&mut self, border: BorderMode) -> Result<()> {
        self.update(ScaleSpaceRuntimeParameters {border, ..self.parameters.clone()})
    }

    pub fn set_parameters(&mut self, parameters: ScaleSpaceRuntimeParameters) -> Result<()> {
        self.update(parameters)
    }

    fn update(&mut self, candidate: ScaleSpaceRuntimeParameters) -> Result<()> {
        candidate.validate()?;
        if candidate == self.parameters {
            return Ok(());
        }

        debug!(?candidate, listeners = self.listeners.len(), "scale space parameters changed");
        self.parameters = candidate;
        for listener in self.listeners.iter_mut() {
            listener.parameters_changed(&self.parameters);
        }
        Ok(())
    }
}
