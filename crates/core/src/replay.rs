//! Deterministic reconstruction of a world from its seed and move record.

use crate::journal::MoveJournal;
use crate::types::WorldError;
use crate::world::World;

/// Rebuild the exact world a recorded session ended on: construct from the
/// seed, place the avatar, then feed every token through `record_input`
/// followed by `move_avatar`, in order. Identical seed and tokens produce
/// an identical grid and avatar position, bit for bit.
///
/// Pacing (for a timed replay) and cancellation belong to the caller; this
/// runs the whole record in one shot.
pub fn reconstruct(
    width: usize,
    height: usize,
    journal: &MoveJournal,
) -> Result<World, WorldError> {
    let mut world = World::new(width, height, journal.seed)?;
    world.initialize_avatar();
    for &token in &journal.tokens {
        world.record_input(token);
        world.move_avatar(token);
    }
    Ok(world)
}
