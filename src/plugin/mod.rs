use std::env;
use std::fs;
use std::path::PathBuf;

use crate::document::{self, BlockEntity};
use crate::resource;
use crate::world::block::{self, Material};
use crate::world::position::{Position, Region};
use crate::world::world::World;

// lifecycle hooks invoked by the hosting server; no state survives between
// calls
pub trait Plugin {
    fn on_enable(&mut self, server: &mut Server) -> eyre::Result<()>;

    fn on_disable(&mut self) {}
}

// minimal stand-in for the hosting server: an ordered world list
#[derive(Debug, Default)]
pub struct Server {
    worlds: Vec<World>,
}

impl Server {
    pub fn new(worlds: Vec<World>) -> Self {
        Self { worlds }
    }

    pub fn first_world(&self) -> eyre::Result<&World> {
        self.worlds
            .first()
            .ok_or_else(|| eyre::eyre!("server has no worlds"))
    }

    pub fn first_world_mut(&mut self) -> eyre::Result<&mut World> {
        self.worlds
            .first_mut()
            .ok_or_else(|| eyre::eyre!("server has no worlds"))
    }
}

// the bundled placement document
pub const BLOCK_RESOURCE_PATH: &str = "blocks.xml";

const SCRATCH_FILE_NAME: &str = "block-set-blocks.xml";

// solid stone floor up to this height, air above
const CLEAR_FLOOR_Y: i32 = 59;

fn spawn_region() -> Region {
    Region::new(-100..100, 40..255, -100..100)
}

// sets every position in the region, stone at or below the floor, air above;
// idempotent, the iteration order only drives progress logging
pub fn clear_region(world: &mut World, region: &Region, floor_y: i32) {
    for y in region.y.clone() {
        tracing::info!("clearing y = {y}");
        for x in region.x.clone() {
            for z in region.z.clone() {
                let material = if y <= floor_y {
                    Material::Stone
                } else {
                    Material::Air
                };
                world.set_block(Position(x, y, z), material);
            }
        }
    }
}

// resolves each entity's tag once and sets every parsed point, returning the
// running count; placements that degraded to air are still counted
pub fn place_entities(world: &mut World, entities: &[BlockEntity]) -> usize {
    let mut blocks_set = 0;
    for entity in entities {
        let material = block::find_material_from_tag(&entity.model_name);
        for &position in &entity.positions {
            world.set_block(position, material);
            blocks_set += 1;
        }
    }

    blocks_set
}

// clears the spawn area of the first world on enable, then repopulates it
// from the bundled xml document
pub struct BlockSetPlugin {
    clear_region: Region,
    floor_y: i32,
    scratch_dir: PathBuf,
}

impl BlockSetPlugin {
    pub fn new() -> Self {
        Self {
            clear_region: spawn_region(),
            floor_y: CLEAR_FLOOR_Y,
            scratch_dir: env::temp_dir(),
        }
    }

    pub fn with_clear_region(mut self, region: Region, floor_y: i32) -> Self {
        self.clear_region = region;
        self.floor_y = floor_y;
        self
    }

    pub fn with_scratch_dir(mut self, scratch_dir: PathBuf) -> Self {
        self.scratch_dir = scratch_dir;
        self
    }

    fn place_from_document(&self, world: &mut World) -> eyre::Result<usize> {
        let scratch_file = self.scratch_dir.join(SCRATCH_FILE_NAME);
        resource::copy_resource_to_file(BLOCK_RESOURCE_PATH, &scratch_file)?;

        let text = fs::read_to_string(&scratch_file)?;
        let entities = document::parse_block_entities(&text)?;

        Ok(place_entities(world, &entities))
    }
}

impl Default for BlockSetPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for BlockSetPlugin {
    fn on_enable(&mut self, server: &mut Server) -> eyre::Result<()> {
        let world = server.first_world_mut()?;
        tracing::info!("editing world '{}'", world.name());

        tracing::info!("clearing spawn area");
        clear_region(world, &self.clear_region, self.floor_y);

        tracing::info!("loading xml resource");
        // extraction or parse failures abandon placement; the applied clear
        // persists
        match self.place_from_document(world) {
            Ok(blocks_set) => tracing::info!("set {blocks_set} blocks from xml"),
            Err(report) => tracing::error!("failed to load xml resource: {report:?}"),
        }

        Ok(())
    }
}
