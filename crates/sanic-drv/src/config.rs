//! Compiler configuration, built once from parsed CLI arguments.

use inkwell::targets::TargetMachine;
use inkwell::OptimizationLevel;

use crate::cli::Cli;

/// Optimization level requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptLevel {
    O0,
    O1,
    O2,
    O3,
    /// Optimize for size. `inkwell`'s `TargetMachine` has no dedicated size
    /// tier, so this maps to `OptimizationLevel::Default` (see DESIGN.md).
    Os,
}

impl OptLevel {
    fn parse(text: &str) -> anyhow::Result<Self> {
        match text {
            "0" => Ok(OptLevel::O0),
            "1" => Ok(OptLevel::O1),
            "2" => Ok(OptLevel::O2),
            "3" => Ok(OptLevel::O3),
            "s" => Ok(OptLevel::Os),
            other => anyhow::bail!("invalid optimization level `-O{other}`, expected one of 0,1,2,3,s"),
        }
    }

    pub fn to_llvm(self) -> OptimizationLevel {
        match self {
            OptLevel::O0 => OptimizationLevel::None,
            OptLevel::O1 => OptimizationLevel::Less,
            OptLevel::O2 => OptimizationLevel::Default,
            OptLevel::O3 => OptimizationLevel::Aggressive,
            OptLevel::Os => OptimizationLevel::Default,
        }
    }
}

impl Default for OptLevel {
    fn default() -> Self {
        OptLevel::O0
    }
}

/// What the driver should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitKind {
    /// Textual LLVM IR, written to stdout.
    LlvmIr,
    /// An object file, left unlinked.
    Object,
    /// A linked, runnable executable (the default).
    Executable,
}

/// Fully resolved configuration for one compilation.
#[derive(Debug, Clone)]
pub struct Config {
    /// `-` selects standard input.
    pub input: String,
    pub output: Option<String>,
    pub emit: EmitKind,
    pub target: String,
    pub opt_level: OptLevel,
    pub debug_info: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let emit = if cli.emit_llvm {
            EmitKind::LlvmIr
        } else if cli.object_only {
            EmitKind::Object
        } else {
            EmitKind::Executable
        };

        let target = cli
            .target
            .or_else(|| std::env::var("TARGET").ok())
            .unwrap_or_else(|| TargetMachine::get_default_triple().as_str().to_string_lossy().into_owned());

        Ok(Config {
            input: cli.input,
            output: cli.output,
            emit,
            target,
            opt_level: OptLevel::parse(&cli.opt_level)?,
            debug_info: cli.debug_info,
            verbose: cli.verbose,
        })
    }

    /// The path statements are written to when no `-o` was given.
    pub fn default_output_path(&self) -> String {
        if self.input == "-" {
            return "a.out".to_string();
        }
        std::path::Path::new(&self.input)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "a.out".to_string())
    }
}
