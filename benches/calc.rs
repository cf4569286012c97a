//! Benchmarks for the expression compiler and evaluator
//!
//! Run with: cargo bench --bench calc

use tabcalc::calc::{compile, Program};
use tabcalc::glyph;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn program(source: &str) -> Program {
    match compile(&glyph::from_text(source)) {
        Ok(program) => program,
        Err(err) => panic!("{source}: {err}"),
    }
}

// ============================================================================
// Compiler
// ============================================================================

#[divan::bench(args = [
    "2+3*4",
    "(2+3)*4^2/7",
    "sin(x)^2+cos(x)^2",
    "-x^3+2*x^2-x/4+1",
    "asin(x/10)+atan(x)*log(x+1)",
])]
fn compile_expression(bencher: divan::Bencher, source: &str) {
    let bytes = glyph::from_text(source);
    bencher.bench(|| compile(divan::black_box(&bytes)));
}

/// Sixteen terms is the longest sum that fits the program stack
#[divan::bench]
fn compile_longest_sum(bencher: divan::Bencher) {
    let bytes = glyph::from_text(&vec!["1"; 16].join("+"));
    bencher.bench(|| compile(divan::black_box(&bytes)));
}

// ============================================================================
// Evaluator
// ============================================================================

#[divan::bench(args = [
    "2+3*4",
    "(2+3)*4^2/7",
    "sin(x)^2+cos(x)^2",
    "-x^3+2*x^2-x/4+1",
    "asin(x/10)+atan(x)*log(x+1)",
])]
fn evaluate_expression(bencher: divan::Bencher, source: &str) {
    let program = program(source);
    bencher.bench(|| program.evaluate(divan::black_box(0.5)));
}

#[divan::bench]
fn compile_and_evaluate(bencher: divan::Bencher) {
    let bytes = glyph::from_text("sin(x)^2+cos(x)^2");
    bencher.bench(|| compile(divan::black_box(&bytes)).and_then(|p| p.evaluate(30.0)));
}
