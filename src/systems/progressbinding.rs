//! Keeps bound labels in sync with [`LevelProgress`].

use bevy_ecs::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::progressbinding::ProgressBinding;
use crate::resources::progress::LevelProgress;

/// Rewrite every bound [`DynamicText`] when the progress resource changed or
/// a binding was just added.
pub fn update_progress_binding_system(
    progress: Res<LevelProgress>,
    mut query: Query<(Ref<ProgressBinding>, &mut DynamicText)>,
) {
    for (binding, mut text) in query.iter_mut() {
        if !progress.is_changed() && !binding.is_added() {
            continue;
        }
        let rendered = binding.render(&progress);
        // only touch the text (and its cached size) on a real change
        if text.text != rendered {
            text.set_text(&rendered);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::progressbinding::ProgressField;
    use raylib::prelude::Color;

    #[test]
    fn label_follows_score() {
        let mut world = World::new();
        world.insert_resource(LevelProgress::default());
        let e = world
            .spawn((
                DynamicText::new("", "nosifer", 35.0, Color::YELLOW),
                ProgressBinding::new(ProgressField::Score).with_format("Score: {}"),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(update_progress_binding_system);

        schedule.run(&mut world);
        assert_eq!(world.get::<DynamicText>(e).map(|t| t.text.clone()), Some("Score: 0".into()));

        world.resource_mut::<LevelProgress>().score = 7;
        schedule.run(&mut world);
        assert_eq!(world.get::<DynamicText>(e).map(|t| t.text.clone()), Some("Score: 7".into()));
    }
}
