//! Group tag used to route collisions and find entities by role.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group(pub &'static str);

impl Group {
    pub fn name(&self) -> &'static str {
        self.0
    }
}
