//! Font store resource.
//!
//! Fonts are referenced by key from
//! [`DynamicText`](crate::components::dynamictext::DynamicText). This is a
//! non-send resource: raylib fonts must stay on the main thread.

use raylib::prelude::Font;
use rustc_hash::FxHashMap;

/// Insert with `insert_non_send_resource`, access via `NonSend<FontStore>`.
#[derive(Default)]
pub struct FontStore {
    fonts: FxHashMap<String, Font>,
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: impl Into<String>, font: Font) {
        self.fonts.insert(id.into(), font);
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&Font> {
        self.fonts.get(id.as_ref())
    }
}
