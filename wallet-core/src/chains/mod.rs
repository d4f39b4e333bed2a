// src/chains/mod.rs
pub mod solana;
