#[macro_use]
extern crate clap;

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Arg;

use vm_cli::Interpreter;
use vm_core::VMConfig;

fn main() {
    env_logger::init();

    let matches = app_from_crate!()
        .about("Assembles and runs a single stack-machine program, then prints its final state.")
        .arg(
            Arg::with_name("INPUT")
                .help("Path to a source file")
                .required(true)
                .index(1),
        )
        .get_matches();

    let path = PathBuf::from(matches.value_of("INPUT").unwrap());

    let source = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: could not read {}: {}", path.display(), e);
            process::exit(1);
        }
    };

    let mut interpreter = Interpreter::new(VMConfig::default());
    match interpreter.run(&source) {
        Ok(()) => {
            let snapshot = interpreter.dump_state();
            println!("data_stack: {:?}", snapshot.data_stack);
            println!("control_stack: {:?}", snapshot.control_stack);
            println!("memory: {:?}", snapshot.memory);
            println!("program_counter: {}", snapshot.program_counter);
            println!("execution_steps: {}", snapshot.execution_steps);
            println!("memory_usage: {}", snapshot.memory_usage);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
