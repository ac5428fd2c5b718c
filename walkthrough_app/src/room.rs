//! Static geometry for the demo house
//!
//! The walls are a single containment box. Furniture comes in as vertex
//! groups in model units, one group per model part, and is turned into solid
//! bounding boxes at the model's draw scale.

use std::sync::Arc;

use collision_engine::foundation::math::Vec3;
use collision_engine::physics::{BoxBatchSource, BoxMesh, BoxOrientation, CollisionError, AABB};

/// Interior of the room in world units
pub fn room_bounds() -> AABB {
    AABB::new(Vec3::new(-10.0, 0.0, -10.0), Vec3::new(10.0, 4.0, 10.0))
}

/// Furniture parts in model units
pub fn furniture_parts() -> Vec<Vec<Vec3>> {
    vec![
        // Table in the middle of the room
        part([-100.0, 0.0, -50.0], [100.0, 75.0, 50.0]),
        // Cabinet against the north-east corner
        part([350.0, 0.0, -450.0], [450.0, 100.0, -300.0]),
        // Chair seat and back by the west wall
        part([-400.0, 0.0, 100.0], [-350.0, 45.0, 150.0]),
        part([-400.0, 45.0, 145.0], [-350.0, 100.0, 150.0]),
    ]
}

/// Every vertex of a box-shaped model part
fn part(min: [f32; 3], max: [f32; 3]) -> Vec<Vec3> {
    AABB::new(Vec3::from(min), Vec3::from(max)).corners().to_vec()
}

/// Walls followed by furniture, in tracking order
pub fn build_house(model_scale: f32) -> Result<Vec<Arc<dyn BoxBatchSource>>, CollisionError> {
    let walls = BoxMesh::from_aabbs(vec![room_bounds()], BoxOrientation::Containment);
    let furniture = BoxMesh::from_vertex_groups(&furniture_parts(), model_scale, BoxOrientation::Solid)?;

    log::info!(
        "House built: {} wall box, {} furniture boxes",
        walls.len(),
        furniture.len()
    );
    Ok(vec![Arc::new(walls), Arc::new(furniture)])
}

#[cfg(test)]
mod tests {
    use collision_engine::core::ResolverConfig;
    use collision_engine::physics::CollisionResolver;

    use super::*;
    use crate::config::Movement;
    use crate::player::Player;

    fn house_resolver() -> CollisionResolver {
        let mut resolver = CollisionResolver::new(ResolverConfig::default());
        for source in build_house(0.02).unwrap() {
            resolver.track(source);
        }
        resolver
    }

    #[test]
    fn test_house_layout() {
        let sources = build_house(0.02).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].orientation(), BoxOrientation::Containment);
        assert_eq!(sources[1].orientation(), BoxOrientation::Solid);
        assert_eq!(sources[1].box_batches().len(), 4);

        // Furniture sits inside the room
        let bounds = room_bounds();
        for aabb in sources[1].box_batches() {
            assert!(bounds.contains_point(&aabb.min) && bounds.contains_point(&aabb.max));
        }
    }

    #[test]
    fn test_walking_into_table_stops_in_front_of_it() {
        let resolver = house_resolver();
        let mut player = Player::new(Vec3::new(0.0, 1.0, 6.0), Vec3::repeat(1.0), -90.0, 4.5);
        for _ in 0..180 {
            player.process_movement(&resolver, Movement::Forward, 1.0 / 60.0);
        }
        // Table front face is at z = 1
        assert!(player.position.z >= 2.0 - 1e-3, "{:?}", player.position);
        assert!(player.position.z < 2.1, "{:?}", player.position);
    }
}
