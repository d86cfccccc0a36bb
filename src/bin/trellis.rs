// Trellis command-line entry point.
// Usage: cargo run --bin trellis -- check <file-or-directory>

fn main() {
    trellis::cli::run();
}
