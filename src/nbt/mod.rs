use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::world::position::Position;
use crate::world::world::World;

// gzip-compressed Minecraft structure format
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct NBTRoot {
    // (x, y, z)
    size: (i32, i32, i32),

    blocks: Vec<NBTBlock>,
    palette: Vec<NBTPalette>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct NBTBlock {
    state: i32,
    // (x, y, z)
    pos: (i32, i32, i32),
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct NBTPalette {
    #[serde(rename = "Name")]
    name: String,
}

pub trait ToNBT {
    fn to_nbt(&self) -> NBTRoot;
}

impl ToNBT for World {
    fn to_nbt(&self) -> NBTRoot {
        self.into()
    }
}

impl NBTRoot {
    pub fn load(path: &Path) -> eyre::Result<NBTRoot> {
        let file = File::open(path)?;
        let mut decoder = GzDecoder::new(file);

        let mut bytes = vec![];
        decoder.read_to_end(&mut bytes)?;

        Ok(fastnbt::from_bytes(&bytes)?)
    }

    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        let bytes = fastnbt::to_bytes(self)?;
        let outfile = File::create(path)?;
        let mut encoder = GzEncoder::new(outfile, Compression::best());
        encoder.write_all(&bytes)?;

        Ok(())
    }
}

impl From<&World> for NBTRoot {
    fn from(world: &World) -> Self {
        let Some((min, max)) = bounding_box(world) else {
            return NBTRoot {
                size: (0, 0, 0),
                blocks: Vec::new(),
                palette: Vec::new(),
            };
        };

        // make palette
        let mut palette: Vec<NBTPalette> = Vec::new();
        let mut palette_index: HashMap<&str, usize> = HashMap::new();
        for (_, material) in world.iter_blocks() {
            let name = material.palette_name();
            if !palette_index.contains_key(name) {
                palette.push(NBTPalette {
                    name: name.to_owned(),
                });
                palette_index.insert(name, palette.len() - 1);
            }
        }

        // make blocks, offset so the minimum corner is the origin
        let blocks = world
            .iter_blocks()
            .map(|(pos, material)| NBTBlock {
                state: palette_index[material.palette_name()] as i32,
                pos: (pos.0 - min.0, pos.1 - min.1, pos.2 - min.2),
            })
            .collect_vec();

        NBTRoot {
            size: (
                max.0 - min.0 + 1,
                max.1 - min.1 + 1,
                max.2 - min.2 + 1,
            ),
            blocks,
            palette,
        }
    }
}

// bounding box over non-air blocks
fn bounding_box(world: &World) -> Option<(Position, Position)> {
    world
        .iter_blocks()
        .map(|(pos, _)| pos)
        .fold(None, |bounds, pos| {
            let (min, max) = bounds.unwrap_or((pos, pos));
            Some((
                Position(min.0.min(pos.0), min.1.min(pos.1), min.2.min(pos.2)),
                Position(max.0.max(pos.0), max.1.max(pos.1), max.2.max(pos.2)),
            ))
        })
}

#[cfg(test)]
mod tests {
    use crate::world::block::Material;

    use super::*;

    #[test]
    fn unittest_world_to_nbt_dedups_palette_and_offsets_positions() {
        let mut world = World::new("test");
        world.set_block(Position(-2, 5, 3), Material::Stone);
        world.set_block(Position(0, 5, 3), Material::Stone);
        world.set_block(Position(0, 7, 4), Material::GoldBlock);

        let nbt = world.to_nbt();

        assert_eq!(nbt.size, (3, 3, 2));
        assert_eq!(nbt.palette.len(), 2);
        assert_eq!(nbt.blocks.len(), 3);

        // blocks come out in position order, offset against (-2, 5, 3)
        assert_eq!(nbt.blocks[0].pos, (0, 0, 0));
        assert_eq!(nbt.blocks[1].pos, (2, 0, 0));
        assert_eq!(nbt.blocks[2].pos, (2, 2, 1));
        assert_eq!(nbt.blocks[0].state, nbt.blocks[1].state);
        assert_ne!(nbt.blocks[0].state, nbt.blocks[2].state);
    }

    #[test]
    fn unittest_empty_world_exports_empty_structure() {
        let nbt = World::new("test").to_nbt();

        assert_eq!(nbt.size, (0, 0, 0));
        assert!(nbt.blocks.is_empty());
        assert!(nbt.palette.is_empty());
    }

    #[test]
    fn unittest_nbt_file_save_and_load() -> eyre::Result<()> {
        let mut world = World::new("test");
        world.set_block(Position(0, 60, 0), Material::DiamondBlock);
        world.set_block(Position(1, 60, 0), Material::GoldBlock);

        let path = std::env::temp_dir().join("block-set-unittest-roundtrip.nbt");
        let nbt = world.to_nbt();
        nbt.save(&path)?;

        assert_eq!(NBTRoot::load(&path)?, nbt);

        Ok(())
    }
}
