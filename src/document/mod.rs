use eyre::WrapErr;

use crate::world::position::Position;

// one parsed <entity>: a material tag plus its placement points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockEntity {
    pub model_name: String,
    pub positions: Vec<Position>,
}

// expected shape: <game> holding <entitySet> groups of <entity> elements,
// each carrying a "Position" property whose children hold "x, y, z" values
pub fn parse_block_entities(text: &str) -> eyre::Result<Vec<BlockEntity>> {
    let document = roxmltree::Document::parse(text).wrap_err("malformed block document")?;
    let root = document.root_element();

    let mut entities = Vec::new();
    for entity_set in root.children().filter(|node| node.has_tag_name("entitySet")) {
        for entity in entity_set.children().filter(|node| node.is_element()) {
            let Some(model_name) = entity.attribute("modelName") else {
                tracing::warn!("skipping entity without a modelName attribute");
                continue;
            };

            let positions = entity
                .children()
                .filter(|node| {
                    node.has_tag_name("property") && node.attribute("name") == Some("Position")
                })
                .flat_map(|property| property.children().filter(|node| node.is_element()))
                .filter_map(|value| parse_point(value.attribute("value").unwrap_or_default()))
                .collect();

            entities.push(BlockEntity {
                model_name: model_name.to_owned(),
                positions,
            });
        }
    }

    Ok(entities)
}

// decimal integers separated by a comma and a single space; entries with
// fewer than three components are skipped, not corrected
pub fn parse_point(value: &str) -> Option<Position> {
    let point = try_parse_point(value);
    if point.is_none() {
        tracing::debug!("skipping malformed position value '{value}'");
    }

    point
}

fn try_parse_point(value: &str) -> Option<Position> {
    let mut components = value.split(", ");
    let x = components.next()?.parse().ok()?;
    let y = components.next()?.parse().ok()?;
    let z = components.next()?.parse().ok()?;

    Some(Position(x, y, z))
}
