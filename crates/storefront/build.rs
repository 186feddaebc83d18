//! Fingerprints the storefront stylesheet.
//!
//! `static/css/main.css` is copied to `static/css/derived/main.<hash>.css` and
//! the hash is exported to the crate as `GREENTHUMB_CSS_HASH`. The layout links
//! the fingerprinted copy, so its URL changes whenever the stylesheet does.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::{env, fs, io};

use sha2::{Digest, Sha256};

/// Leading digest bytes kept in the file name (eight hex characters).
const FINGERPRINT_BYTES: usize = 4;

fn main() -> io::Result<()> {
    let crate_dir = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("CARGO_MANIFEST_DIR is not set"))?;
    let css_dir = crate_dir.join("static").join("css");
    let source = css_dir.join("main.css");

    println!("cargo:rerun-if-changed={}", source.display());

    let Ok(stylesheet) = fs::read(&source) else {
        println!("cargo:warning=no stylesheet at {}", source.display());
        println!("cargo:rustc-env=GREENTHUMB_CSS_HASH=");
        return Ok(());
    };

    let fingerprint = fingerprint(&stylesheet);
    println!("cargo:rustc-env=GREENTHUMB_CSS_HASH={fingerprint}");

    let derived = css_dir.join("derived");
    fs::create_dir_all(&derived)?;
    fs::write(derived.join(format!("main.{fingerprint}.css")), &stylesheet)
}

fn fingerprint(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .take(FINGERPRINT_BYTES)
        .fold(String::new(), |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        })
}
