use anyhow::{Context, Result, bail};
use clap::Parser;
use game_core::{Pos, TileKind, World, load_journal_from_file, reconstruct};
use std::path::PathBuf;

/// Dump a generated map to stdout, or verify that a save file replays
/// deterministically.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed to generate (ignored when --save is given)
    #[arg(short, long, default_value_t = 42)]
    seed: i32,
    /// Save file to load, replay twice, and verify
    #[arg(long)]
    save: Option<PathBuf>,
    #[arg(long, default_value_t = 80)]
    width: usize,
    #[arg(long, default_value_t = 40)]
    height: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let world = match &args.save {
        Some(path) => {
            let journal = load_journal_from_file(path)
                .with_context(|| format!("failed to load save file: {}", path.display()))?;

            let first = reconstruct(args.width, args.height, &journal)
                .map_err(|e| anyhow::anyhow!("replay failed: {e}"))?;
            let second = reconstruct(args.width, args.height, &journal)
                .map_err(|e| anyhow::anyhow!("replay failed: {e}"))?;
            if first.snapshot_hash() != second.snapshot_hash() {
                bail!("replay is not deterministic: hashes differ");
            }

            println!("Save verified: {} moves replayed.", journal.tokens.len());
            first
        }
        None => {
            let mut world = World::new(args.width, args.height, args.seed)
                .map_err(|e| anyhow::anyhow!("generation failed: {e}"))?;
            world.initialize_avatar();
            world
        }
    };

    print!("{}", render_ascii(&world));
    println!("Seed: {}", world.seed());
    println!("Rooms: {}", world.room_centers().len());
    match world.avatar_position() {
        Some(pos) => println!("Avatar: ({},{})", pos.x, pos.y),
        None => println!("Avatar: unplaced"),
    }
    println!("Snapshot Hash: 0x{:016x}", world.snapshot_hash());

    Ok(())
}

/// Top line of output is the highest row, matching the on-screen view.
fn render_ascii(world: &World) -> String {
    let grid = world.grid();
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());

    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            let tile = grid.tile_at(Pos { y: y as i32, x: x as i32 });
            out.push(match tile {
                TileKind::Nothing => ' ',
                TileKind::Wall => '#',
                TileKind::Floor => '.',
                TileKind::Avatar => '@',
                TileKind::Sand => '~',
            });
        }
        out.push('\n');
    }
    out
}
