use std::path::Path;

use flowscope::{
    interpreter::{ExecutionLimits, Interpreter},
    Program,
};

use crate::app::GlobalOptions;

pub fn run(path: &Path, max_steps: Option<u64>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let program = Program::from_file(path)?;
    log::info!(
        "built graph with {} instructions from {}",
        program.graph().len(),
        path.display()
    );

    let mut limits = ExecutionLimits::none();
    if let Some(max) = max_steps {
        limits = limits.with_max_steps(max);
    }

    let (mut env, graph) = program.into_parts();
    let mut interpreter = Interpreter::with_limits(limits);
    interpreter.run(&graph, &mut env)?;
    log::debug!("executed {} instructions", interpreter.steps());

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&env)?);
    } else {
        for (name, value) in env.iter() {
            println!("{name} = {value}");
        }
    }
    Ok(())
}
