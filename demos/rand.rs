/*!
Random byte generation with each available source.
*/

use pqc_mechanisms::rand::{RandomAlgorithm, randombytes, randombytes_into, switch_algorithm};
use pqc_mechanisms::{Result, hex_chop};

fn custom_rng(dest: &mut [u8]) {
    for (i, byte) in dest.iter_mut().enumerate() {
        *byte = (i % 256) as u8;
    }
}

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let mut seed = [0u8; 32];
    seed[0] = 100;
    seed[20] = 200;
    seed[31] = 31;
    switch_algorithm(RandomAlgorithm::Seeded(seed));
    println!("{:<18}{}", "Seeded: ", hex_chop(&randombytes(32), 32, 32));

    switch_algorithm(RandomAlgorithm::Custom(custom_rng));
    let mut custom_bytes = [0u8; 32];
    randombytes_into(&mut custom_bytes, 32)?;
    println!("{:<18}{}", "Custom: ", hex_chop(&custom_bytes, 32, 32));

    switch_algorithm(RandomAlgorithm::System);
    println!("{:<18}{}", "System: ", hex_chop(&randombytes(32), 32, 32));
    Ok(())
}
