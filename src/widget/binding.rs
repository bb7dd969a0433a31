use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Class names of the sub-elements a color picker is wired to.
#[derive(Clone, PartialEq, Debug)]
pub struct PickerLayout {
    pub hue_well: String,
    pub sl_well: String,
    pub result_well: String,
    pub red: String,
    pub green: String,
    pub blue: String,
    pub hue: String,
    pub saturation: String,
    pub lightness: String,
    pub hsl_input: String,
    pub rgb_input: String,
}

impl Default for PickerLayout {
    fn default() -> Self {
        PickerLayout {
            hue_well: "huewell".to_string(),
            sl_well: "slwell".to_string(),
            result_well: "resultwell".to_string(),
            red: "red".to_string(),
            green: "green".to_string(),
            blue: "blue".to_string(),
            hue: "hue".to_string(),
            saturation: "saturation".to_string(),
            lightness: "lightness".to_string(),
            hsl_input: "hslval".to_string(),
            rgb_input: "rgbval".to_string(),
        }
    }
}

/// Element ids resolved from a [`PickerLayout`].
#[derive(Clone, PartialEq, Debug)]
pub struct PickerBinding {
    pub hue_well: String,
    pub sl_well: String,
    pub result_well: String,
    pub rgb_ranges: [String; 3],
    pub hsl_ranges: [String; 3],
    pub hsl_input: String,
    pub rgb_input: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Element {
    pub classes: Vec<String>,
    pub id: Option<String>,
}

impl Element {
    pub fn new(class: impl Into<String>, id: Option<&str>) -> Self {
        Element {
            classes: vec![class.into()],
            id: id.map(str::to_string),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// The elements below one bound element, in document order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ElementScope {
    pub elements: Vec<Element>,
}

impl ElementScope {
    pub fn new(elements: Vec<Element>) -> Self {
        ElementScope { elements }
    }

    /// Returns the id of the first element with `class`, assigning a fresh one if it has none.
    pub fn id_of(&mut self, class: &str, ids: &IdAllocator) -> Result<String, WidgetError> {
        let element = self
            .elements
            .iter_mut()
            .find(|element| element.has_class(class))
            .ok_or_else(|| WidgetError::MissingElement { class: class.to_string() })?;

        Ok(element.id.get_or_insert_with(|| ids.next_id()).clone())
    }
}

/// Hands out `ui-id-<n>` identifiers, unique per allocator.
#[derive(Debug, Default)]
pub struct IdAllocator {
    counter: AtomicUsize,
}

impl IdAllocator {
    pub fn next_id(&self) -> String {
        format!("ui-id-{}", self.counter.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

pub fn resolve(scope: &mut ElementScope, layout: &PickerLayout, ids: &IdAllocator) -> Result<PickerBinding, WidgetError> {
    Ok(PickerBinding {
        hue_well: scope.id_of(&layout.hue_well, ids)?,
        sl_well: scope.id_of(&layout.sl_well, ids)?,
        result_well: scope.id_of(&layout.result_well, ids)?,
        rgb_ranges: [scope.id_of(&layout.red, ids)?, scope.id_of(&layout.green, ids)?, scope.id_of(&layout.blue, ids)?],
        hsl_ranges: [
            scope.id_of(&layout.hue, ids)?,
            scope.id_of(&layout.saturation, ids)?,
            scope.id_of(&layout.lightness, ids)?,
        ],
        hsl_input: scope.id_of(&layout.hsl_input, ids)?,
        rgb_input: scope.id_of(&layout.rgb_input, ids)?,
    })
}

#[derive(Error, PartialEq, Debug)]
pub enum WidgetError {
    #[error("no element with class '{class}'")]
    MissingElement { class: String },
}
