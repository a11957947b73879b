use sil::lang::Error;
use sil::mach::{Console, Program, Runtime};

/// Console scripted with canned input lines, capturing all output.
pub struct TestConsole {
    input: Vec<String>,
    pub output: String,
}

impl TestConsole {
    pub fn new(input: &[&str]) -> TestConsole {
        TestConsole {
            input: input.iter().rev().map(|s| s.to_string()).collect(),
            output: String::new(),
        }
    }
}

impl Console for TestConsole {
    fn read_line(&mut self) -> Option<String> {
        self.input.pop()
    }
    fn print(&mut self, text: &str) {
        self.output.push_str(text);
    }
    fn println(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }
}

/// Loads and runs a program with scripted input, returning captured output.
pub fn run(source: &str, input: &[&str]) -> Result<String, Error> {
    let program = Program::load(source.lines())?;
    let mut console = TestConsole::new(input);
    let mut runtime = Runtime::new(program);
    runtime.run(&mut console)?;
    Ok(console.output)
}

/// Runs a program expected to fail, returning the rendered diagnostic.
#[allow(dead_code)]
pub fn run_err(source: &str, input: &[&str]) -> String {
    match run(source, input) {
        Err(error) => error.to_string(),
        Ok(output) => panic!("expected an error, got output {:?}", output),
    }
}
