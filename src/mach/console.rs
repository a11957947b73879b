use std::io::Write;

/// The console collaborator of the runtime. `INPUT` blocks on `read_line`
/// until a line is available; `None` means the input source is exhausted.
pub trait Console {
    fn read_line(&mut self) -> Option<String>;
    fn print(&mut self, text: &str);
    fn println(&mut self, text: &str);
}

/// Console bound to the process standard input and output. Output is
/// flushed after every `print` so prompts without a line terminator appear
/// before input is read.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> StdConsole {
        StdConsole::default()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match std::io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Some(line)
            }
        }
    }

    fn print(&mut self, text: &str) {
        print!("{}", text);
        let _ = std::io::stdout().flush();
    }

    fn println(&mut self, text: &str) {
        println!("{}", text);
    }
}
