use std::path::Path;

use log::error;
use rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use speckle_noise::{NoiseGenerator, NoiseParams, PngWriter, DEFAULT_OUTPUT_PATH};

fn main() -> Result<(), speckle_noise::Error> {
    env_logger::init();

    let rng = Xoshiro256Plus::from_entropy();
    let mut generator = NoiseGenerator::new(NoiseParams::default(), rng);

    let path = Path::new(DEFAULT_OUTPUT_PATH);
    if let Err(e) = generator.write_to(&PngWriter, path) {
        error!("failed to write {}: {}", path.display(), e);
        return Err(e);
    }

    println!("Noise texture created at {}", path.display());
    Ok(())
}
