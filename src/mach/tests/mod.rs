use crate::mach::{Config, Event, Program, Runner};

mod runner_test;
mod stack_test;

fn runner(source: &str, stack_size: usize) -> Runner {
    let program = Program::assemble(source).unwrap();
    let config = Config {
        stack_size,
        ..Config::default()
    };
    Runner::new(program, &config)
}

fn run(runner: &mut Runner) -> String {
    run_cycles(runner, 5000)
}

fn run_cycles(runner: &mut Runner, cycles: usize) -> String {
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
