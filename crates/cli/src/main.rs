use std::env;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use ast::{Program, ProgramData};
use codegen::{Emitter, JsWriter};
use compiler::diagnostics::{CheckLevel, CollectingReporter};
use compiler::{ProcessCommonJsModules, TransformAMDToCJSModule};
use global_common::{SourceMap, DUMMY_SP};
use parser::Parser;

use crate::config::{load_config, Config};

mod config;

fn main() -> Result<()> {
    let mut config_path = None;
    let mut inputs = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_path = Some(
                args.next()
                    .context("--config requires a path argument")?,
            );
        } else {
            inputs.push(arg);
        }
    }

    if inputs.is_empty() {
        bail!("usage: cli [--config config.json] file.js...");
    }

    let config = match config_path {
        Some(path) => load_config(Path::new(&path))?,
        None => Config::default(),
    };

    let cm = SourceMap::default();
    let mut program_data = ProgramData::default();
    let mut scripts = Vec::new();

    for input in &inputs {
        let fm = cm
            .load_file(Path::new(input))
            .with_context(|| format!("failed to load {}", input))?;

        let mut parser = Parser::new(&fm, &mut program_data);
        match parser.parse_script() {
            Ok(script) => scripts.push(script),
            Err(err) => {
                bail!("{}: {}", cm.span_to_string(err.span), err);
            }
        }
        for err in parser.take_errors() {
            eprintln!("{}: {}", cm.span_to_string(err.span), err);
        }
    }

    let mut program = Program {
        node_id: program_data.new_id(DUMMY_SP),
        scripts,
    };

    let mut reporter = CollectingReporter::default();
    if config.transform_amd_modules {
        TransformAMDToCJSModule::process(&mut program, &mut program_data, &cm, &mut reporter);
    }

    let mut cjs = ProcessCommonJsModules::new(
        &config.common_js_module_path_prefix,
        config.report_dependencies,
    );
    if config.process_common_js_modules {
        cjs.process(&mut program, &mut program_data, &cm);
    }

    for diagnostic in &reporter.diagnostics {
        let level = match diagnostic.level() {
            CheckLevel::Error => "ERROR",
            CheckLevel::Warning => "WARNING",
        };
        eprintln!(
            "{} {}: {} {}",
            level,
            diagnostic.diagnostic.key,
            cm.span_to_string(diagnostic.span),
            diagnostic.description
        );
    }

    if config.report_dependencies && config.process_common_js_modules {
        for input in cjs.inputs() {
            let provides: Vec<&str> = input.provides.iter().map(|p| &**p).collect();
            let requires: Vec<&str> = input.requires.iter().map(|r| &**r).collect();
            eprintln!(
                "{}: provides [{}] requires [{}]",
                input.name,
                provides.join(", "),
                requires.join(", ")
            );
        }
    }

    if reporter.has_errors() {
        bail!("compilation failed");
    }

    let mut buf = Vec::new();
    {
        let mut emitter = Emitter::new(JsWriter::new("\n", &mut buf));
        emitter.emit_program(&program)?;
    }
    std::io::stdout().write_all(&buf)?;

    Ok(())
}
