use std::collections::HashMap;

use barebones::{
    ast::Instruction,
    error::{Error, RuntimeError},
    interpreter::{executor::while_loop::matching_end, segmenter::segment},
    parse, run_source,
};
use proptest::prelude::*;

const NAMES: [&str; 3] = ["a", "b", "c"];

#[derive(Debug, Clone, Copy)]
enum Op {
    Clear,
    Incr,
    Decr,
}

#[derive(Debug, PartialEq, Eq)]
enum Expected {
    Store(HashMap<String, u64>),
    Undefined(usize),
    Negative(usize),
}

fn op() -> impl Strategy<Value = (Op, usize)> {
    (prop_oneof![Just(Op::Clear), Just(Op::Incr), Just(Op::Decr)], 0..NAMES.len())
}

fn render(ops: &[(Op, usize)]) -> String {
    ops.iter()
       .map(|(op, var)| {
           let keyword = match op {
               Op::Clear => "clear",
               Op::Incr => "incr",
               Op::Decr => "decr",
           };
           format!("{keyword} {};\n", NAMES[*var])
       })
       .collect()
}

/// Applies the operations left to right on an empty map.
fn reference(ops: &[(Op, usize)]) -> Expected {
    let mut store = HashMap::new();

    for (index, (op, var)) in ops.iter().enumerate() {
        let line = index + 1;
        let name = NAMES[*var].to_string();
        match op {
            Op::Clear => {
                store.insert(name, 0);
            },
            Op::Incr => match store.get_mut(&name) {
                Some(value) => *value += 1,
                None => return Expected::Undefined(line),
            },
            Op::Decr => match store.get_mut(&name) {
                Some(0) => return Expected::Negative(line),
                Some(value) => *value -= 1,
                None => return Expected::Undefined(line),
            },
        }
    }

    Expected::Store(store)
}

/// Builds a balanced body from a sequence of choices: `Some(true)` opens a
/// loop, `Some(false)` closes one if any is open, `None` is a plain
/// statement.
fn balanced_body(choices: &[Option<bool>]) -> String {
    let mut body = String::new();
    let mut depth = 0;

    for choice in choices {
        match choice {
            Some(true) => {
                body.push_str("while a not 0 do;\n");
                depth += 1;
            },
            Some(false) if depth > 0 => {
                body.push_str("end;\n");
                depth -= 1;
            },
            _ => body.push_str("incr a;\n"),
        }
    }
    for _ in 0..depth {
        body.push_str("end;\n");
    }

    body
}

proptest! {
    #[test]
    fn straight_line_programs_match_reference(ops in prop::collection::vec(op(), 0..40)) {
        let source = render(&ops);

        let actual = match run_source(&source) {
            Ok(store) => Expected::Store(store.to_map()),
            Err(Error::Runtime(RuntimeError::UndefinedVariable { line, .. })) => {
                Expected::Undefined(line)
            },
            Err(Error::Runtime(RuntimeError::IllegalOperation { line, .. })) => {
                Expected::Negative(line)
            },
            Err(e) => panic!("unexpected error: {e}"),
        };

        prop_assert_eq!(actual, reference(&ops));
    }

    #[test]
    fn loop_bodies_are_rewound_every_iteration(iterations in 0u64..20, body in 1usize..6) {
        let mut source = String::from("clear i;\nclear n;\n");
        for _ in 0..iterations {
            source.push_str("incr n;\n");
        }
        source.push_str("while i not n do;\nincr i;\n");
        for _ in 1..body {
            source.push_str("clear z;\n");
        }
        source.push_str("end;\n");

        let (store, report) = parse(&source).unwrap().run().unwrap();

        prop_assert_eq!(store.get("i"), Some(iterations));
        prop_assert_eq!(report.iterations, iterations);
        prop_assert_eq!(report.statements, 3 + iterations + body as u64 * iterations);
    }

    #[test]
    fn loop_body_extraction_is_balanced(
        choices in prop::collection::vec(prop::option::of(any::<bool>()), 0..30)
    ) {
        let body = balanced_body(&choices);
        let statements = segment(&format!("{body}end;\nclear z;\n")).unwrap();

        let length = matching_end(&statements);
        let body_length = body.lines().count();
        prop_assert_eq!(length, Some(body_length));

        let inner = &statements[..body_length];
        let opened = inner.iter().filter(|s| s.instruction.opens_block()).count();
        let closed = inner.iter().filter(|s| s.instruction == Instruction::End).count();
        prop_assert_eq!(opened, closed);
    }
}
