//! Transform-test harness: parse input and expected sources with the real
//! parser, run the pass, strip node ids and compare the trees. On mismatch
//! both sides are printed for eyeballing.

use ast::*;
use codegen::{Emitter, JsWriter};
use ecma_visit::{Visit, VisitMut, VisitMutWith, VisitWith};
use global_common::{FileName, SourceMap};
use parser::Parser;

use crate::diagnostics::CollectingReporter;

pub(crate) struct TransformOutput {
    pub program: Program,
    pub program_data: ProgramData,
    pub cm: SourceMap,
    pub reporter: CollectingReporter,
}

fn parse(cm: &SourceMap, program_data: &mut ProgramData, name: &str, src: &str) -> Program {
    let fm = cm.new_source_file(FileName::Real(name.into()), src.to_string());
    let mut p = Parser::new(&fm, program_data);
    let script = match p.parse_script() {
        Ok(script) => script,
        Err(err) => panic!("failed to parse {}: {}\n{}", name, err, src),
    };
    let errors = p.take_errors();
    assert!(errors.is_empty(), "parse errors in {}: {:?}", name, errors);
    Program {
        node_id: program_data.new_id(fm.span()),
        scripts: vec![script],
    }
}

pub(crate) fn run_transform<F>(name: &str, tr: F, input: &str) -> TransformOutput
where
    F: FnOnce(&mut Program, &mut ProgramData, &SourceMap, &mut CollectingReporter),
{
    let cm = SourceMap::default();
    let mut program_data = ProgramData::default();
    let mut program = parse(&cm, &mut program_data, name, input);
    let mut reporter = CollectingReporter::default();
    tr(&mut program, &mut program_data, &cm, &mut reporter);
    TransformOutput {
        program,
        program_data,
        cm,
        reporter,
    }
}

pub(crate) fn test_transform_with_name<F>(
    name: &str,
    tr: F,
    input: &str,
    expected: &str,
    expected_diagnostics: &[&str],
) where
    F: FnOnce(&mut Program, &mut ProgramData, &SourceMap, &mut CollectingReporter),
{
    let mut out = run_transform(name, tr, input);

    let keys: Vec<&str> = out
        .reporter
        .diagnostics
        .iter()
        .map(|d| d.diagnostic.key)
        .collect();
    assert_eq!(
        keys, expected_diagnostics,
        "diagnostics mismatch for input:\n{}",
        input
    );

    let mut expected_data = ProgramData::default();
    let mut expected_program = parse(&out.cm, &mut expected_data, "expected.js", expected);

    out.program.visit_mut_with(&mut DropNodeId);
    expected_program.visit_mut_with(&mut DropNodeId);

    if out.program == expected_program {
        return;
    }

    let actual_src = print(&out.program);
    let expected_src = print(&expected_program);
    if actual_src == expected_src {
        return;
    }

    panic!(
        ">>>>> Input <<<<<\n{}\n>>>>> Output <<<<<\n{}\n>>>>> Expected <<<<<\n{}",
        input, actual_src, expected_src
    );
}

pub(crate) fn print(program: &Program) -> String {
    let mut buf = Vec::new();
    {
        let mut emitter = Emitter::new(JsWriter::new("\n", &mut buf));
        emitter.emit_program(program).unwrap();
    }
    String::from_utf8(buf).unwrap()
}

/// Every node of the transformed tree must still map to a real source file;
/// synthesized nodes get there by donor-copying spans.
pub(crate) fn assert_synthesized_spans(out: &TransformOutput) {
    struct SpanChecker<'a> {
        program_data: &'a ProgramData,
        cm: &'a SourceMap,
        missing: Vec<NodeId>,
    }

    impl Visit for SpanChecker<'_> {
        fn visit_node_id(&mut self, n: NodeId) {
            let span = self.program_data.get_span(n);
            if span.is_dummy() || self.cm.span_to_filename(span).is_none() {
                self.missing.push(n);
            }
        }
    }

    let mut checker = SpanChecker {
        program_data: &out.program_data,
        cm: &out.cm,
        missing: Vec::new(),
    };
    out.program.visit_with(&mut checker);
    assert!(
        checker.missing.is_empty(),
        "nodes without source info: {:?}",
        checker.missing
    );
}

struct DropNodeId;

impl VisitMut for DropNodeId {
    fn visit_mut_node_id(&mut self, n: &mut NodeId) {
        *n = NodeId::DUMMY;
    }
}
