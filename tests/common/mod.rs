use runvm::mach::{Config, Event, Program, Runner};

pub fn runner(source: &str) -> Runner {
    runner_n(source, 64)
}

pub fn runner_n(source: &str, stack_size: usize) -> Runner {
    let program = match Program::assemble(source) {
        Ok(program) => program,
        Err(error) => panic!("{}", error),
    };
    let config = Config {
        stack_size,
        ..Config::default()
    };
    Runner::new(program, &config)
}

pub fn exec(runner: &mut Runner) -> String {
    exec_n(runner, 5000)
}

pub fn exec_n(runner: &mut Runner, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runner.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Errors(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Break(addr) => {
                s.push_str(&format!("BREAK AT {:04}\n", addr));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) | Event::Trace(ps) => {
                s.push_str(ps);
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}

#[allow(dead_code)]
pub fn assemble_err(source: &str) -> String {
    match Program::assemble(source) {
        Ok(program) => panic!("assembled:\n{}", program),
        Err(error) => error.to_string(),
    }
}
