use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pbu")]
#[command(about = "Packed arbitrary-base unsigned integers", long_about = None)]
pub struct Cli {
    /// Log growth and carry events (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sum values in the given base and print the result
    Add {
        /// Radix, 2 <= base <= 2^63 - 1
        #[arg(short, long, default_value_t = 10)]
        base: u64,
        /// Print the digits (least significant first) instead of powers
        #[arg(long)]
        digits: bool,
        /// Values to add, in decimal
        #[arg(required = true)]
        values: Vec<u64>,
    },
    /// Read a bit range from a byte buffer (bit 0 = lowest bit of the last byte)
    Bits {
        /// Buffer bytes (comma-separated, decimal)
        #[arg(value_delimiter = ',', required = true)]
        bytes: Vec<u8>,
        /// First bit of the range
        #[arg(long)]
        start: usize,
        /// One past the last bit of the range
        #[arg(long)]
        end: usize,
    },
}
