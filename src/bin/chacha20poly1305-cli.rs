//! Command-line front-end for the ChaCha20 keystream.
//!
//! This binary is a thin marshaling layer: it decodes hex arguments,
//! invokes [`chachapoly::chacha20::chacha20_apply`], and hex-encodes the
//! result. It carries no cryptographic logic and is not part of the
//! library's public surface.
//!
//! Argument format is fixed for byte-for-byte compatibility with
//! `original_source/c/chacha20/src/main.c`:
//!
//! ```text
//! chacha20poly1305-cli <key-hex> <nonce-hex> <counter-hex> <plaintext-hex>
//!   key:       64 hex characters (32 bytes)
//!   nonce:     24 hex characters (12 bytes)
//!   counter:   8 hex characters  (4 bytes, little-endian)
//!   plaintext: hex-encoded plaintext (even length)
//! ```

use chachapoly::chacha20::chacha20_apply;

fn print_usage(prog: &str) {
    println!("Usage: {prog} <key-hex> <nonce-hex> <counter-hex> <plaintext-hex>");
    println!("  key:       64 hex characters (32 bytes)");
    println!("  nonce:     24 hex characters (12 bytes)");
    println!("  counter:   8 hex characters  (4 bytes, little-endian)");
    println!("  plaintext: hex-encoded plaintext");
}

fn decode_fixed<const N: usize>(arg: &str, label: &str) -> Result<[u8; N], String> {
    let bytes = hex_decode(arg).map_err(|_| format!("invalid hex in {label}"))?;
    bytes
        .try_into()
        .map_err(|_| format!("{label} must be {} hex characters ({N} bytes)", N * 2))
}

// Local re-implementation of the crate's internal hex helper: the crate's
// `hex` module is private, and this binary is an external collaborator of
// the library, not a consumer of its internals.
fn hex_decode(s: &str) -> Result<Vec<u8>, ()> {
    fn nibble(c: u8) -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    }

    let bytes = s.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(());
    }

    let mut out = Vec::with_capacity(bytes.len() / 2);
    for pair in bytes.chunks_exact(2) {
        let high = nibble(pair[0]).ok_or(())?;
        let low = nibble(pair[1]).ok_or(())?;
        out.push((high << 4) | low);
    }
    Ok(out)
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let prog = args.first().map(String::as_str).unwrap_or("chacha20poly1305-cli");

    if args.len() != 5 || args[1] == "-h" || args[1] == "--help" {
        print_usage(prog);
        return;
    }

    let key: [u8; 32] = match decode_fixed(&args[1], "key") {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let nonce: [u8; 12] = match decode_fixed(&args[2], "nonce") {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let counter_bytes: [u8; 4] = match decode_fixed(&args[3], "counter") {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let counter = u32::from_le_bytes(counter_bytes);

    let plaintext = match hex_decode(&args[4]) {
        Ok(v) => v,
        Err(_) => {
            eprintln!("invalid hex in plaintext");
            std::process::exit(1);
        }
    };

    match chacha20_apply(&key, counter, &nonce, &plaintext) {
        Ok(ciphertext) => println!("{}", hex_encode(&ciphertext)),
        Err(_) => {
            eprintln!("input too long");
            std::process::exit(1);
        }
    }
}
