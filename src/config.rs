//! Serializable scene descriptions

use crate::entity::{EntityKind, MassAttributes, MassEntity};
use crate::float_types::Real;
use crate::group::{GroupDisplay, MassObjectGroup};
use crate::scene::{Scene, SceneSettings};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub settings: SceneSettings,
    pub groups: Vec<GroupDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDescription {
    pub name: String,
    #[serde(default)]
    pub display: GroupDisplay,
    /// Omitted means no collection is assigned to the group
    #[serde(default)]
    pub members: Option<Vec<EntityDescription>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDescription {
    pub name: String,
    pub position: [Real; 3],
    #[serde(default)]
    pub kind: EntityKind,
    /// Omitted means the entity is untagged
    #[serde(default)]
    pub mass: Option<MassAttributes>,
}

impl EntityDescription {
    pub fn build<S: Clone + Debug>(&self) -> MassEntity<S> {
        let [x, y, z] = self.position;
        let mut entity = MassEntity::new(self.name.clone(), Point3::new(x, y, z), None);
        entity.kind = self.kind;
        entity.attributes = self.mass;
        entity
    }
}

impl SceneDescription {
    /// Build a scene with one group per description, in order.
    /// An empty description yields the usual single default group.
    pub fn build<S: Clone + Debug>(&self) -> Scene<MassEntity<S>> {
        let groups = self.groups.iter().map(|desc| {
            let mut group = MassObjectGroup::new(desc.name.clone()).with_display(desc.display);
            group.members = desc
                .members
                .as_ref()
                .map(|members| members.iter().map(|m| m.build()).collect());
            group
        });
        Scene::from_groups(self.settings, groups)
    }
}
