//! Common test utilities
//!
//! Provides shared helper functions for:
//! - Building small pronouncing dictionaries
//! - Writing config fixtures into temp directories
//! - Deterministic random number generators

#![allow(dead_code)]

use artofmemory::CmuDict;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tempfile::TempDir;

/// A handful of entries covering variants, r-coloured vowels and silent letters.
pub const TINY_DICT: &str = "\
;;; test dictionary
FAME  F EY1 M
FOAM  F OW1 M
FOAMS  F OW1 M Z
HER  HH ER0
KNIFE  N AY1 F
OFFICE  AO1 F AH0 S
OFTEN  AO1 F AH0 N
OFTEN(2)  AO1 F T AH0 N
READ  R IY1 D
READ(2)  R EH1 D
VASE  V EY1 S
";

pub fn tiny_dict() -> CmuDict {
    CmuDict::parse(TINY_DICT).expect("Failed to parse test dictionary")
}

/// Write `content` to a file named `name` in a fresh temp dir.
pub fn write_fixture(name: &str, content: &str) -> (PathBuf, TempDir) {
    let tmp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = tmp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    (path, tmp_dir)
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
