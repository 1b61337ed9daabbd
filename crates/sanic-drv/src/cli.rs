//! Command-line surface, parsed with `clap`'s derive API.

use clap::Parser;

/// The `sanic` compiler driver.
#[derive(Parser, Debug)]
#[command(name = "sanic")]
#[command(about = "Compiles Sanity source to a native executable or LLVM IR", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Source file to compile, or `-` to read from standard input.
    pub input: String,

    /// Output path. Defaults to the input file's stem (or `a.out` for stdin).
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Print textual LLVM IR to stdout instead of linking an executable.
    #[arg(short = 'S', long = "emit-llvm")]
    pub emit_llvm: bool,

    /// Stop after producing an object file; do not invoke the linker.
    #[arg(short = 'c')]
    pub object_only: bool,

    /// Target triple for cross-compilation. Defaults to `$TARGET` or the host triple.
    #[arg(long)]
    pub target: Option<String>,

    /// Optimization level: attach directly, e.g. `-O2` or `-Os`.
    #[arg(short = 'O', value_name = "LEVEL", default_value = "0")]
    pub opt_level: String,

    /// Request debug info. Accepted but currently a no-op beyond recording the flag.
    #[arg(short = 'g')]
    pub debug_info: bool,

    /// Raise log verbosity from `warn` to `debug`.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
