use std::path::PathBuf;

use structopt::StructOpt;

pub mod document;
pub mod nbt;
pub mod plugin;
pub mod resource;
pub mod world;

use crate::nbt::ToNBT;
use crate::plugin::{BlockSetPlugin, Plugin, Server};
use crate::world::world::World;

/// Runs the block-set plugin against an in-memory world, standing in for the
/// hosting server's enable hook.
#[derive(Debug, StructOpt)]
#[structopt(name = "block-set")]
struct Opt {
    /// Name of the world the host would report.
    #[structopt(long, default_value = "world")]
    world_name: String,

    /// Save the edited world as a gzip-compressed structure nbt file.
    #[structopt(long, parse(from_os_str))]
    output: Option<PathBuf>,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();

    let opt = Opt::from_args();
    let mut server = Server::new(vec![World::new(opt.world_name.as_str())]);

    let mut plugin = BlockSetPlugin::new();
    plugin.on_enable(&mut server)?;
    plugin.on_disable();

    if let Some(path) = opt.output {
        server.first_world()?.to_nbt().save(&path)?;
        tracing::info!("saved edited world to {}", path.display());
    }

    Ok(())
}
