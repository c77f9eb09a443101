use strum_macros::EnumIter;

// block types known at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Material {
    Air,
    Stone,
    DiamondBlock,
    GoldBlock,
    IronBlock,
    EmeraldBlock,
    Glass,
}

impl Material {
    pub fn is_air(&self) -> bool {
        matches!(self, Material::Air)
    }

    pub fn palette_name(&self) -> &'static str {
        match self {
            Material::Air => "minecraft:air",
            Material::Stone => "minecraft:stone",
            Material::DiamondBlock => "minecraft:diamond_block",
            Material::GoldBlock => "minecraft:gold_block",
            Material::IronBlock => "minecraft:iron_block",
            Material::EmeraldBlock => "minecraft:emerald_block",
            Material::Glass => "minecraft:glass",
        }
    }
}

// xml tag -> material, checked in declaration order, first match wins
pub const TAG_MAPPINGS: &[(&str, Material)] = &[
    ("diamond", Material::DiamondBlock),
    ("gold", Material::GoldBlock),
    ("iron", Material::IronBlock),
    ("emerald", Material::EmeraldBlock),
    ("stone", Material::Stone),
    ("glass", Material::Glass),
];

pub fn find_material_from_tag(tag: &str) -> Material {
    for (mapped_tag, material) in TAG_MAPPINGS {
        if *mapped_tag == tag {
            return *material;
        }
    }

    tracing::warn!("couldn't find material for xml tag '{tag}'");
    Material::Air
}
