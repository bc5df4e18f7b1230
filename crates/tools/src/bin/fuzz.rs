use anyhow::Result;
use clap::Parser;
use game_core::{MoveJournal, TileKind, World, reconstruct};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

const MOVE_TOKENS: [char; 4] = ['W', 'A', 'S', 'D'];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the fuzzer's own randomness
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of worlds to exercise
    #[arg(short, long, default_value_t = 100)]
    runs: u32,
    /// Moves per world
    #[arg(short, long, default_value_t = 500)]
    moves: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Fuzzing {} worlds, {} moves each, fuzzer seed {}...", args.runs, args.moves, args.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for run in 0..args.runs {
        let world_seed = (rng.next_u64() & 0x7fff_ffff) as i32;
        let mut world = World::new(80, 40, world_seed).expect("default dimensions are valid");
        world.initialize_avatar();
        assert!(world.avatar_position().is_some(), "run {run}: no spawn for seed {world_seed}");

        for _ in 0..args.moves {
            let token = choose(&mut rng, &MOVE_TOKENS);
            world.record_input(token);
            world.move_avatar(token);

            let pos = world.avatar_position().expect("avatar stays placed");
            assert_eq!(
                world.grid().tile_at(pos),
                TileKind::Avatar,
                "run {run}: avatar cell out of sync for seed {world_seed}"
            );
        }

        assert_eq!(world.input_record().len(), args.moves as usize);

        // Replaying the recorded session must land on a bit-identical state.
        let journal = MoveJournal::from_world(&world);
        let restored = reconstruct(80, 40, &journal)
            .map_err(|e| anyhow::anyhow!("run {run}: replay failed: {e}"))?;
        assert_eq!(
            restored.snapshot_hash(),
            world.snapshot_hash(),
            "run {run}: replay diverged for seed {world_seed}"
        );
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
