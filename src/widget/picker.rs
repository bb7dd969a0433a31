use crate::widget::binding::{ElementScope, IdAllocator, PickerLayout, WidgetError, resolve};
use tracing::debug;

/// Setup calls of the color picker widget. The color model itself lives in the widget.
pub trait ColorPicker {
    fn set_rgb_range_controls(&mut self, red: &str, green: &str, blue: &str);
    fn set_hsl_range_controls(&mut self, hue: &str, saturation: &str, lightness: &str);
    fn set_hsl_input(&mut self, id: &str);
    fn set_rgb_input(&mut self, id: &str);
}

/// Wires a picker to the elements of `scope`. `create` receives the hue, saturation/lightness and
/// result well ids.
pub fn bind_picker<P, F>(scope: &mut ElementScope, layout: &PickerLayout, ids: &IdAllocator, create: F) -> Result<P, WidgetError>
where
    P: ColorPicker,
    F: FnOnce(&str, &str, &str) -> P,
{
    let binding = resolve(scope, layout, ids)?;
    debug!(?binding, "Binding color picker");

    let mut picker = create(&binding.hue_well, &binding.sl_well, &binding.result_well);
    let [red, green, blue] = &binding.rgb_ranges;
    picker.set_rgb_range_controls(red, green, blue);
    let [hue, saturation, lightness] = &binding.hsl_ranges;
    picker.set_hsl_range_controls(hue, saturation, lightness);
    picker.set_hsl_input(&binding.hsl_input);
    picker.set_rgb_input(&binding.rgb_input);

    Ok(picker)
}
