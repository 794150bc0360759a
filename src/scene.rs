//! `Scene`: owns the mass object groups and drives the update and render ticks

use crate::aggregate::compute_total_mass;
use crate::errors::MassError;
use crate::float_types::Real;
use crate::group::MassObjectGroup;
use crate::marker::MarkerBatch;
use crate::traits::MassBody;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use tracing::{debug, trace, warn};

/// Stable handle of a group inside a [`Scene`]. Ids grow with creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(pub usize);

impl Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Scene-wide switches. Missing fields deserialize to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Recompute centroids on [`Scene::update`]
    pub tracking_enabled: bool,
    /// Produce marker batches on [`Scene::render`]
    pub drawing_enabled: bool,
    pub line_width: Real,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            tracking_enabled: true,
            drawing_enabled: false,
            line_width: 2.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scene<B> {
    pub settings: SceneSettings,
    groups: BTreeMap<GroupId, MassObjectGroup<B>>,
    next_id: usize,
}

impl<B> Default for Scene<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Scene<B> {
    /// A scene holding a single default group.
    pub fn new() -> Self {
        Self::with_settings(SceneSettings::default())
    }

    pub fn with_settings(settings: SceneSettings) -> Self {
        Self::from_groups(settings, std::iter::empty())
    }

    /// A scene holding `groups` in order, or a single default group if there are none.
    pub fn from_groups<I>(settings: SceneSettings, groups: I) -> Self
    where
        I: IntoIterator<Item = MassObjectGroup<B>>,
    {
        let mut scene = Self {
            settings,
            groups: BTreeMap::new(),
            next_id: 0,
        };
        for group in groups {
            scene.insert_group(group);
        }
        if scene.groups.is_empty() {
            scene.add_group();
        }
        scene
    }

    /// Drop every group and start over with one default group.
    pub fn reset(&mut self) {
        self.groups.clear();
        self.add_group();
    }

    pub fn add_group(&mut self) -> GroupId {
        self.insert_group(MassObjectGroup::default())
    }

    pub fn insert_group(&mut self, group: MassObjectGroup<B>) -> GroupId {
        let id = GroupId(self.next_id);
        self.next_id += 1;
        self.groups.insert(id, group);
        id
    }

    /// Remove the most recently added group. The last remaining group is never removed.
    pub fn remove_last_group(&mut self) -> Option<(GroupId, MassObjectGroup<B>)> {
        if self.groups.len() <= 1 {
            return None;
        }
        self.groups.pop_last()
    }

    pub fn group(&self, id: GroupId) -> Result<&MassObjectGroup<B>, MassError> {
        self.groups.get(&id).ok_or(MassError::UnknownGroup(id))
    }

    pub fn group_mut(&mut self, id: GroupId) -> Result<&mut MassObjectGroup<B>, MassError> {
        self.groups.get_mut(&id).ok_or(MassError::UnknownGroup(id))
    }

    /// Groups in creation order.
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &MassObjectGroup<B>)> {
        self.groups.iter().map(|(id, group)| (*id, group))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn toggle_drawing(&mut self) -> bool {
        self.settings.drawing_enabled = !self.settings.drawing_enabled;
        self.settings.drawing_enabled
    }

    pub fn toggle_tracking(&mut self) -> bool {
        self.settings.tracking_enabled = !self.settings.tracking_enabled;
        self.settings.tracking_enabled
    }

    /// One marker batch per visible group, or nothing while drawing is disabled.
    pub fn render(&self) -> Vec<MarkerBatch> {
        if !self.settings.drawing_enabled {
            return Vec::new();
        }
        self.groups
            .iter()
            .filter(|(_, group)| group.display.visible)
            .map(|(id, group)| {
                let batch = MarkerBatch::new(*id, group, self.settings.line_width);
                trace!(group = %id, segments = batch.segment_count(), "marker batch built");
                batch
            })
            .collect()
    }
}

impl<B: MassBody> Scene<B> {
    /// Recompute the centroid of every group that has members assigned.
    /// Returns how many groups were updated; `0` while tracking is disabled.
    ///
    /// ## Errors
    /// The first aggregation fault aborts the tick. Groups visited before the
    /// fault keep their new centroid, later ones keep their old one.
    pub fn update(&mut self) -> Result<usize, MassError> {
        if !self.settings.tracking_enabled {
            return Ok(0);
        }
        let mut updated = 0;
        for (id, group) in self.groups.iter_mut() {
            match group.update_center_of_mass() {
                Ok(Some(summary)) => {
                    debug!(
                        group = %id,
                        name = %group.name,
                        total_mass = summary.total_mass,
                        active = summary.active_count,
                        com = ?summary.center_of_mass,
                        "center of mass updated"
                    );
                    updated += 1;
                },
                Ok(None) => {},
                Err(err) => {
                    warn!(group = %id, name = %group.name, error = %err, "update tick aborted");
                    return Err(err);
                },
            }
        }
        Ok(updated)
    }
}

/// Total mass of an arbitrary selection of entities, e.g. for a property readout.
pub fn selection_total_mass<I>(selection: I) -> Result<Real, MassError>
where
    I: IntoIterator,
    I::Item: MassBody,
{
    compute_total_mass(selection)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entity::MassEntity;

    #[test]
    fn new_scene_has_one_group() {
        let scene = Scene::<MassEntity<()>>::new();
        assert_eq!(scene.len(), 1);
        assert!(scene.group(GroupId(0)).is_ok());
    }

    #[test]
    fn last_group_is_never_removed() {
        let mut scene = Scene::<MassEntity<()>>::new();
        assert!(scene.remove_last_group().is_none());
        let id = scene.add_group();
        let (removed, _) = scene.remove_last_group().unwrap();
        assert_eq!(removed, id);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut scene = Scene::<MassEntity<()>>::new();
        let a = scene.add_group();
        scene.remove_last_group();
        let b = scene.add_group();
        assert_ne!(a, b);
        assert_eq!(scene.group(a).unwrap_err(), MassError::UnknownGroup(a));
    }

    #[test]
    fn settings_parse_with_defaults() {
        let settings: SceneSettings = serde_json::from_str(r#"{ "drawing_enabled": true }"#).unwrap();
        assert!(settings.tracking_enabled);
        assert!(settings.drawing_enabled);
        assert_eq!(settings.line_width, 2.0);
    }
}
