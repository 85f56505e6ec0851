//! Entity overlay
//!
//! The last painting stage: entity markers replace whatever is under them.

use tracing::{debug, trace};

use crate::consts::BOSS_MARKER;
use crate::description::Entity;
use crate::error::{Feature, RenderError};
use crate::grid::Grid;
use crate::room::out_of_bounds;
use crate::tile::Tile;

/// Symbol for an entity: the boss marker for bosses, otherwise the
/// upper-cased first character of its type
pub fn entity_symbol(entity: &Entity) -> Option<char> {
    if entity.is_boss {
        return Some(BOSS_MARKER);
    }
    entity.kind.chars().next().and_then(|c| c.to_uppercase().next())
}

pub fn paint_entities(grid: &mut Grid, entities: &[Entity]) -> Result<(), RenderError> {
    debug!(entities = entities.len(), "painting entities");

    for entity in entities {
        let symbol = entity_symbol(entity).ok_or_else(|| {
            RenderError::MalformedDescription(format!(
                "entity at {} has an empty type",
                entity.position
            ))
        })?;
        trace!(kind = %entity.kind, boss = entity.is_boss, %symbol, "entity");

        if !grid.set(entity.position, Tile::EntityMarker(symbol)) {
            return Err(out_of_bounds(grid, Feature::Entity, &entity.kind, entity.position));
        }
    }
    Ok(())
}
