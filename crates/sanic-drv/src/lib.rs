//! `sanic-drv` — the compiler driver.
//!
//! Wires the pipeline together (read source → lex → parse → emit IR) and
//! owns every piece of I/O the compiler performs: reading the input,
//! writing an object file via `inkwell`'s target-machine APIs, and
//! optionally shelling out to the system linker. This is the only crate
//! in the workspace allowed to touch the filesystem or spawn processes.

pub mod cli;
pub mod config;

use std::io::Read as _;
use std::path::Path;
use std::process::Command;

use inkwell::context::Context;
use inkwell::targets::{CodeModel, FileType, InitializationConfig, RelocMode, Target, TargetTriple};

use sanic_gen::Emitter;
use sanic_lex::Lexer;
use sanic_par::Parser;
use sanic_util::span::SourceMap;
use sanic_util::{CompileError, CompileResult};

pub use cli::Cli;
pub use config::{Config, EmitKind, OptLevel};

/// Runs one compilation end to end and returns the process exit code.
/// A `CompileError` (any stage) is rendered to stderr and mapped to 1;
/// success is 0.
pub fn run(config: &Config) -> i32 {
    match compile(config) {
        Ok(()) => {
            log::info!("compilation succeeded");
            0
        }
        Err(err) => {
            let _ = sanic_util::diagnostic::emit(&err, &mut std::io::stderr());
            1
        }
    }
}

fn compile(config: &Config) -> CompileResult<()> {
    let source = read_source(&config.input)?;

    let mut source_map = SourceMap::new();
    let file_id = source_map.add(config.input.clone(), source);
    let source_file = source_map.get(file_id).expect("just registered");

    let tokens = Lexer::new(source_file.content(), file_id).tokenize()?;
    log::debug!("lexed {} tokens", tokens.len());

    let file = Parser::parse(tokens)?;
    log::debug!(
        "parsed {} statement(s), {} extern(s)",
        file.statements.len(),
        file.externs.len()
    );

    let context = Context::create();
    let mut emitter = Emitter::new(&context, module_name(&config.input));
    emitter.emit_file(&file)?;
    log::debug!("emitted LLVM IR");

    match config.emit {
        EmitKind::LlvmIr => {
            print!("{}", emitter.emit_to_string());
            Ok(())
        }
        EmitKind::Object => {
            let out = config.output.clone().unwrap_or_else(|| format!("{}.o", config.default_output_path()));
            write_object_file(&emitter, config, Path::new(&out))
        }
        EmitKind::Executable => {
            let out = config.output.clone().unwrap_or_else(|| config.default_output_path());
            let obj_path = format!("{out}.o");
            write_object_file(&emitter, config, Path::new(&obj_path))?;
            link_executable(Path::new(&obj_path), Path::new(&out))?;
            let _ = std::fs::remove_file(&obj_path);
            Ok(())
        }
    }
}

fn module_name(input: &str) -> &str {
    if input == "-" {
        "stdin"
    } else {
        Path::new(input).file_stem().and_then(|s| s.to_str()).unwrap_or("module")
    }
}

fn read_source(input: &str) -> CompileResult<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CompileError::illegal_state(format!("failed to read stdin: {e}")))?;
        return Ok(buf);
    }

    std::fs::read_to_string(input).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CompileError::FileNotFound { path: input.to_string() }
        } else {
            CompileError::illegal_state(format!("failed to read {input}: {e}"))
        }
    })
}

fn write_object_file(emitter: &Emitter<'_>, config: &Config, path: &Path) -> CompileResult<()> {
    Target::initialize_all(&InitializationConfig::default());

    let triple = TargetTriple::create(&config.target);
    let target = Target::from_triple(&triple)
        .map_err(|e| CompileError::illegal_state(format!("unsupported target `{}`: {e}", config.target)))?;

    let target_machine = target
        .create_target_machine(
            &triple,
            "generic",
            "",
            config.opt_level.to_llvm(),
            RelocMode::Default,
            CodeModel::Default,
        )
        .ok_or_else(|| CompileError::illegal_state(format!("could not create target machine for `{}`", config.target)))?;

    target_machine
        .write_to_file(emitter.module(), FileType::Object, path)
        .map_err(|e| CompileError::illegal_state(format!("failed to write object file: {e}")))
}

fn link_executable(object: &Path, output: &Path) -> CompileResult<()> {
    let status = Command::new("cc")
        .arg(object)
        .arg("-o")
        .arg(output)
        .status()
        .map_err(|e| CompileError::illegal_state(format!("failed to invoke system linker: {e}")))?;

    if !status.success() {
        return Err(CompileError::illegal_state(format!(
            "linker exited with status {status}"
        )));
    }
    Ok(())
}
