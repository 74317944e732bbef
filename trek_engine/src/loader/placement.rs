//! Placement helper for populating locations with their starting items.

use anyhow::{Context, Result};
use log::info;

use crate::item::ItemHolder;
use crate::{ItemId, LocationId, World};

/// Put every item into its home location, in item-file order.
///
/// # Errors
/// - if an item's home location is not in the world
pub fn place_items(world: &mut World) -> Result<()> {
    let placements: Vec<(LocationId, ItemId)> = world.items.iter().map(|item| (item.home_position, item.id)).collect();

    info!("placing {} items into locations", placements.len());
    for (location_id, item_id) in placements {
        let location = world
            .locations
            .get_mut(&location_id)
            .with_context(|| format!("location {location_id} for {item_id} not found in world.locations"))?;
        location.add_item(item_id);
    }
    Ok(())
}
