mod binding;
mod picker;

pub use binding::{Element, ElementScope, IdAllocator, PickerBinding, PickerLayout, WidgetError, resolve};
pub use picker::{ColorPicker, bind_picker};
