use std::path::Path;

use flowscope::Program;

pub fn run(path: &Path) -> anyhow::Result<()> {
    let program = Program::from_file(path)?;
    log::info!(
        "built graph with {} instructions from {}",
        program.graph().len(),
        path.display()
    );

    print!("{}", program.graph().to_dot());
    Ok(())
}
