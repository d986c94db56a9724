mod incomplete_tests;
mod synchronize_tests;
mod unexpected_tests;

use crate::Program;

/// Surviving statements, then the diagnostics that explain the dropped ones.
fn recovered(src: &str) -> String {
    let program = Program::try_from(src).unwrap();
    format!(
        "{}---\n{}",
        program.render(),
        program.diagnostics().render()
    )
}
