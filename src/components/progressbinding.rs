//! Binds a [`DynamicText`](super::dynamictext::DynamicText) to a field of
//! [`LevelProgress`](crate::resources::progress::LevelProgress).
//!
//! ```ignore
//! commands.spawn((
//!     DynamicText::new("", "nosifer", 35.0, Color::YELLOW),
//!     ProgressBinding::new(ProgressField::Score).with_format("Score: {}"),
//! ));
//! ```
//!
//! The text is refreshed by `update_progress_binding_system` whenever the
//! resource changes.

use bevy_ecs::prelude::Component;

use crate::resources::progress::LevelProgress;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressField {
    Score,
    Level,
}

impl ProgressField {
    pub fn read(self, progress: &LevelProgress) -> u32 {
        match self {
            ProgressField::Score => progress.score,
            ProgressField::Level => progress.level,
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct ProgressBinding {
    pub field: ProgressField,
    /// Format with a `{}` placeholder for the value.
    pub format: Option<String>,
}

impl ProgressBinding {
    pub fn new(field: ProgressField) -> Self {
        Self {
            field,
            format: None,
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Text for the bound field of `progress`.
    pub fn render(&self, progress: &LevelProgress) -> String {
        let value = self.field.read(progress).to_string();
        match &self.format {
            Some(format) => format.replace("{}", &value),
            None => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_bound_field() {
        let mut progress = LevelProgress::default();
        progress.score = 42;
        progress.level = 3;
        let score = ProgressBinding::new(ProgressField::Score).with_format("Score: {}");
        let level = ProgressBinding::new(ProgressField::Level).with_format("Level: {}");
        assert_eq!(score.render(&progress), "Score: 42");
        assert_eq!(level.render(&progress), "Level: 3");
        assert_eq!(ProgressBinding::new(ProgressField::Level).render(&progress), "3");
    }
}
