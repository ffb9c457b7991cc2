//! Build script validating routes.toml
//!
//! Compiles the route table schema and validation rules from src/navigation
//! and refuses to build a crate whose embedded table breaks them.

use std::fs;

#[allow(dead_code)]
#[path = "src/navigation/error.rs"]
mod error;
#[allow(dead_code)]
#[path = "src/navigation/link.rs"]
mod link;
#[allow(dead_code)]
#[path = "src/navigation/path.rs"]
mod path;
#[allow(dead_code)]
#[path = "src/navigation/redirect.rs"]
mod redirect;
#[allow(dead_code)]
#[path = "src/navigation/types.rs"]
mod types;
#[allow(dead_code)]
#[path = "src/navigation/config.rs"]
mod config;

fn main() {
    println!("cargo:rerun-if-changed=routes.toml");
    println!("cargo:rerun-if-changed=src/navigation");

    let source = fs::read_to_string("routes.toml").expect("Failed to read routes.toml");

    let table = match config::parse(&source) {
        Ok(table) => table,
        Err(e) => panic!("Invalid routes.toml: {}", e),
    };

    if let Err(e) = config::validate(&table) {
        panic!("Invalid routes.toml: {}", e);
    }
}
