//! CatWorld - a terminal page all about cats
//!
//! This is the binary entry point. All logic lives in the library.

use catworld::Args;
use catworld_core::prelude::*;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    catworld::run(Args::parse()).await
}
