//! Retained models for the form controls the egui renderer draws.
//!
//! egui is immediate mode, so each control's value, bounds and enabled flag
//! live here between frames and the renderer reads them back every frame.

/// Single-line text field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextFieldState {
    /// Current text.
    pub text: String,
    /// Whether the user may edit the field.
    pub enabled: bool,
}

/// Push button that only tracks whether it can be clicked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub enabled: bool,
}

/// Item of a [`ComboState`]: a display label plus the value it stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComboItem {
    pub label: String,
    pub value: String,
}

/// Drop-down selector with labelled values.
///
/// The first item added becomes the current one; afterwards the selection
/// only changes through [`ComboState::set_current_index`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComboState {
    items: Vec<ComboItem>,
    current: Option<usize>,
    /// Whether the user may change the selection.
    pub enabled: bool,
}

impl ComboState {
    /// Append an item.
    pub fn add_item(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.push(ComboItem {
            label: label.into(),
            value: value.into(),
        });
        if self.current.is_none() {
            self.current = Some(0);
        }
    }

    pub fn items(&self) -> &[ComboItem] {
        &self.items
    }

    /// Index of the first item carrying `value`.
    pub fn find_value(&self, value: &str) -> Option<usize> {
        self.items.iter().position(|item| item.value == value)
    }

    /// Select the item at `index`; out-of-range indices are ignored.
    pub fn set_current_index(&mut self, index: usize) {
        if index < self.items.len() {
            self.current = Some(index);
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_item(&self) -> Option<&ComboItem> {
        self.current.and_then(|index| self.items.get(index))
    }

    /// Value of the selected item.
    pub fn current_value(&self) -> Option<&str> {
        self.current_item().map(|item| item.value.as_str())
    }
}

/// Bounded integer input. Values are always kept inside `min..=max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinState {
    value: u32,
    min: u32,
    max: u32,
}

impl SpinState {
    /// Create a spin control with the given bounds, starting at `min`.
    pub fn new(min: u32, max: u32) -> Self {
        let max = max.max(min);
        Self {
            value: min,
            min,
            max,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Set the value, clamped into the current bounds.
    pub fn set_value(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Move the upper bound, pulling `min` and the value down with it when needed.
    pub fn set_maximum(&mut self, max: u32) {
        self.max = max;
        self.min = self.min.min(max);
        self.value = self.value.min(max);
    }
}

/// Two-state checkbox.
///
/// A locked checkbox is disabled and stays unchecked whatever it is told.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckState {
    checked: bool,
    enabled: bool,
}

impl Default for CheckState {
    fn default() -> Self {
        Self {
            checked: false,
            enabled: true,
        }
    }
}

impl CheckState {
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Update the checked state; returns `true` when it actually changed.
    pub fn set_checked(&mut self, checked: bool) -> bool {
        let checked = checked && self.enabled;
        let changed = self.checked != checked;
        self.checked = checked;
        changed
    }

    /// Uncheck and disable for good.
    pub fn lock_unchecked(&mut self) {
        self.checked = false;
        self.enabled = false;
    }
}
