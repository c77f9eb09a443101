use std::collections::BTreeMap;

use super::block::Material;
use super::position::Position;

// sparse block grid owned by the hosting server; air is the absent default
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    name: String,
    blocks: BTreeMap<Position, Material>,
}

impl World {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn block_at(&self, pos: Position) -> Material {
        self.blocks.get(&pos).copied().unwrap_or(Material::Air)
    }

    pub fn set_block(&mut self, pos: Position, material: Material) {
        if material.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, material);
        }
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    // non-air blocks in position order
    pub fn iter_blocks(&self) -> impl Iterator<Item = (Position, Material)> + '_ {
        self.blocks.iter().map(|(pos, material)| (*pos, *material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unittest_air_is_default_and_erases() {
        let mut world = World::new("test");
        assert_eq!(world.block_at(Position(1, 2, 3)), Material::Air);

        world.set_block(Position(1, 2, 3), Material::Stone);
        assert_eq!(world.block_at(Position(1, 2, 3)), Material::Stone);
        assert_eq!(world.block_count(), 1);

        world.set_block(Position(1, 2, 3), Material::Air);
        assert_eq!(world.block_at(Position(1, 2, 3)), Material::Air);
        assert_eq!(world.block_count(), 0);
    }

    #[test]
    fn unittest_overwrite_keeps_single_entry() {
        let mut world = World::new("test");
        world.set_block(Position(0, 60, 0), Material::GoldBlock);
        world.set_block(Position(0, 60, 0), Material::DiamondBlock);

        assert_eq!(world.block_at(Position(0, 60, 0)), Material::DiamondBlock);
        assert_eq!(world.block_count(), 1);
    }
}
