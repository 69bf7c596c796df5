/*!
Signing a message and verifying the signature.
*/

use std::time::Instant;

use pqc_mechanisms::{DEFAULT_SIGNATURE, Mechanisms, Provider, Result, Signature, VERSION, hex_chop};

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let mechanisms = Mechanisms::native();
    println!("Provider: {} {}", mechanisms.provider().name(), mechanisms.provider().version());
    println!("pqc-mechanisms version: {}", VERSION);
    println!("Enabled signatures: {}", mechanisms.signatures().enabled()?.join(", "));

    let message = b"This is the message to sign";

    let mut signer = Signature::new(mechanisms.signatures(), DEFAULT_SIGNATURE)?;
    println!("\nSignature details:\n{}", signer.details());

    let start = Instant::now();
    let signer_public_key = signer.generate_keypair()?;
    println!("\nSigner public key:\n{}", hex_chop(&signer_public_key, 8, 8));
    println!("\nIt took {:?} to generate the key pair", start.elapsed());

    let start = Instant::now();
    let signature = signer.sign(message)?;
    println!("It took {:?} to sign the message", start.elapsed());
    println!("\nSignature:\n{}", hex_chop(&signature, 8, 8));

    let verifier = Signature::new(mechanisms.signatures(), DEFAULT_SIGNATURE)?;
    let start = Instant::now();
    let is_valid = verifier.verify(message, &signature, &signer_public_key)?;
    println!("\nIt took {:?} to verify the signature", start.elapsed());
    println!("Valid signature? {}", is_valid);

    if !is_valid {
        std::process::exit(1);
    }
    Ok(())
}
