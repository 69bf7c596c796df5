/*!
Key encapsulation between a client and a server.

Run with `RUST_LOG=debug cargo run --example kem` to see registry logging.
*/

use std::time::Instant;

use pqc_mechanisms::{DEFAULT_KEM, KeyEncapsulation, Mechanisms, Provider, Result, VERSION, hex_chop};

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let mechanisms = Mechanisms::native();
    println!("Provider: {} {}", mechanisms.provider().name(), mechanisms.provider().version());
    println!("pqc-mechanisms version: {}", VERSION);
    println!("Enabled KEMs: {}", mechanisms.kems().enabled()?.join(", "));

    let mut client = KeyEncapsulation::new(mechanisms.kems(), DEFAULT_KEM)?;
    println!("\nKEM details:\n{}", client.details());

    let start = Instant::now();
    let client_public_key = client.generate_keypair()?;
    println!("\nClient public key:\n{}", hex_chop(&client_public_key, 8, 8));
    println!("\nIt took {:?} to generate the key pair", start.elapsed());

    let server = KeyEncapsulation::new(mechanisms.kems(), DEFAULT_KEM)?;
    let start = Instant::now();
    let (ciphertext, shared_secret_server) = server.encap_secret(&client_public_key)?;
    println!("It took {:?} to encapsulate the secret", start.elapsed());

    let start = Instant::now();
    let shared_secret_client = client.decap_secret(&ciphertext)?;
    println!("It took {:?} to decapsulate the secret", start.elapsed());

    println!("\nClient shared secret:\n{}", hex_chop(&shared_secret_client, 8, 8));
    println!("\nServer shared secret:\n{}", hex_chop(&shared_secret_server, 8, 8));

    let coincide = shared_secret_client == shared_secret_server;
    println!("\nShared secrets coincide? {}", coincide);

    if !coincide {
        std::process::exit(1);
    }
    Ok(())
}
