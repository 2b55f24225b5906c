//! Collision resolution
//!
//! Two passes couple the whole game together: group-vs-point (rocks against
//! the ship) and group-vs-group (missiles against rocks). Both mutate the
//! groups they scan, so both walk id snapshots taken at pass start. Every
//! destruction spawns an explosion effect and queues an audio trigger.

use glam::Vec2;

use super::group::SpriteGroup;
use super::sprite::{ShapeProfile, Sprite};
use super::state::AudioEvent;

/// Destroy every member of `group` overlapping the target circle.
///
/// Each casualty leaves an explosion effect behind, offset by `-3 * radius`
/// per axis from its center so the larger burst sprite lands centered on it.
/// Returns the number of members removed.
pub fn group_collide(
    group: &mut SpriteGroup,
    target_center: Vec2,
    target_radius: f32,
    explosions: &mut SpriteGroup,
    events: &mut Vec<AudioEvent>,
) -> usize {
    let mut removed = 0;
    for id in group.ids() {
        let hit = group
            .get(id)
            .is_some_and(|sprite| sprite.collide(target_center, target_radius));
        if !hit {
            continue;
        }
        if let Some(victim) = group.remove(id) {
            let burst_pos = victim.pos - Vec2::splat(3.0 * victim.radius);
            explosions.insert(Sprite::new(
                burst_pos,
                Vec2::ZERO,
                0.0,
                0.0,
                &ShapeProfile::EXPLOSION,
                events,
            ));
            removed += 1;
        }
    }
    removed
}

/// Resolve `attackers` against `targets`: an attacker destroying at least one
/// target is itself removed. Returns the total number of targets destroyed
/// (score is awarded per destroyed target, not per attacker).
pub fn group_group_collide(
    attackers: &mut SpriteGroup,
    targets: &mut SpriteGroup,
    explosions: &mut SpriteGroup,
    events: &mut Vec<AudioEvent>,
) -> usize {
    let mut destroyed = 0;
    for id in attackers.ids() {
        let Some((center, radius)) = attackers.get(id).map(|s| (s.pos, s.radius)) else {
            continue;
        };
        let hits = group_collide(targets, center, radius, explosions, events);
        if hits > 0 {
            attackers.remove(id);
            destroyed += hits;
        }
    }
    destroyed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::distance;
    use proptest::prelude::*;

    fn insert_rock(group: &mut SpriteGroup, center: Vec2) -> u32 {
        let mut events = Vec::new();
        group.insert(Sprite::new(
            center - Vec2::splat(ROCK_RADIUS),
            Vec2::ZERO,
            0.0,
            0.0,
            &ShapeProfile::ROCK,
            &mut events,
        ))
    }

    fn insert_missile(group: &mut SpriteGroup, center: Vec2) -> u32 {
        let mut events = Vec::new();
        group.insert(Sprite::new(
            center - Vec2::splat(MISSILE_RADIUS),
            Vec2::ZERO,
            0.0,
            0.0,
            &ShapeProfile::MISSILE,
            &mut events,
        ))
    }

    #[test]
    fn test_group_collide_removes_overlaps_only() {
        let mut rocks = SpriteGroup::new();
        let mut explosions = SpriteGroup::new();
        let mut events = Vec::new();

        insert_rock(&mut rocks, Vec2::new(100.0, 100.0));
        let far = insert_rock(&mut rocks, Vec2::new(600.0, 500.0));

        let removed = group_collide(
            &mut rocks,
            Vec2::new(110.0, 100.0),
            SHIP_RADIUS,
            &mut explosions,
            &mut events,
        );
        assert_eq!(removed, 1);
        assert_eq!(rocks.len(), 1);
        assert!(rocks.contains(far));
        assert_eq!(explosions.len(), 1);
        assert_eq!(events, vec![AudioEvent::Explosion]);
    }

    #[test]
    fn test_explosion_spawns_at_offset_center() {
        let mut rocks = SpriteGroup::new();
        let mut explosions = SpriteGroup::new();
        let mut events = Vec::new();

        let rock_center = Vec2::new(200.0, 200.0);
        insert_rock(&mut rocks, rock_center);
        group_collide(&mut rocks, rock_center, SHIP_RADIUS, &mut explosions, &mut events);

        let burst = explosions.iter().next().unwrap();
        // Spawn position center - 3r, plus the constructor's own radius offset
        let expected =
            rock_center - Vec2::splat(3.0 * ROCK_RADIUS) + Vec2::splat(EXPLOSION_RADIUS);
        assert!((burst.pos - expected).length() < 1e-4);
    }

    #[test]
    fn test_group_group_destroys_both_sides() {
        let mut missiles = SpriteGroup::new();
        let mut rocks = SpriteGroup::new();
        let mut explosions = SpriteGroup::new();
        let mut events = Vec::new();

        insert_missile(&mut missiles, Vec2::new(100.0, 100.0));
        insert_rock(&mut rocks, Vec2::new(120.0, 100.0));
        let survivor = insert_missile(&mut missiles, Vec2::new(700.0, 500.0));

        let destroyed =
            group_group_collide(&mut missiles, &mut rocks, &mut explosions, &mut events);
        assert_eq!(destroyed, 1);
        assert!(rocks.is_empty());
        assert_eq!(missiles.len(), 1);
        assert!(missiles.contains(survivor));
    }

    #[test]
    fn test_one_missile_destroys_every_overlapping_rock() {
        let mut missiles = SpriteGroup::new();
        let mut rocks = SpriteGroup::new();
        let mut explosions = SpriteGroup::new();
        let mut events = Vec::new();

        // Two rocks both overlapping a single missile
        insert_missile(&mut missiles, Vec2::new(300.0, 300.0));
        insert_rock(&mut rocks, Vec2::new(310.0, 300.0));
        insert_rock(&mut rocks, Vec2::new(290.0, 300.0));

        let destroyed =
            group_group_collide(&mut missiles, &mut rocks, &mut explosions, &mut events);
        // Scored per destroyed rock, not per missile
        assert_eq!(destroyed, 2);
        assert!(missiles.is_empty());
        assert_eq!(explosions.len(), 2);
    }

    proptest! {
        /// The set of rocks destroyed is exactly the set overlapping at least
        /// one missile, independent of iteration order.
        #[test]
        fn prop_destroyed_rocks_match_overlap_union(
            rock_xs in proptest::collection::vec(0.0f32..800.0, 1..6),
            missile_xs in proptest::collection::vec(0.0f32..800.0, 1..6),
        ) {
            let mut missiles = SpriteGroup::new();
            let mut rocks = SpriteGroup::new();
            let mut explosions = SpriteGroup::new();
            let mut events = Vec::new();

            let rock_centers: Vec<Vec2> =
                rock_xs.iter().map(|&x| Vec2::new(x, 300.0)).collect();
            let missile_centers: Vec<Vec2> =
                missile_xs.iter().map(|&x| Vec2::new(x, 300.0)).collect();

            for &c in &rock_centers {
                insert_rock(&mut rocks, c);
            }
            for &c in &missile_centers {
                insert_missile(&mut missiles, c);
            }

            let expected = rock_centers
                .iter()
                .filter(|&&rock| {
                    missile_centers.iter().any(|&missile| {
                        distance(rock, missile) <= ROCK_RADIUS + MISSILE_RADIUS
                    })
                })
                .count();

            let destroyed =
                group_group_collide(&mut missiles, &mut rocks, &mut explosions, &mut events);
            prop_assert_eq!(destroyed, expected);
            prop_assert_eq!(rocks.len(), rock_centers.len() - expected);
            prop_assert_eq!(explosions.len(), expected);
        }
    }
}
