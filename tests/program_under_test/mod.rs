use std::io::{Read, Write};

/// A wrapper to run the codeblocker program with some arguments. It provides functions to
/// write to stdin and get output from stdout and stderr.
pub struct Codeblocker {
    process: std::process::Child,
}

impl Drop for Codeblocker {
    fn drop(&mut self) {
        if self.process.try_wait().unwrap().is_none() {
            eprintln!("Codeblocker process left by test. Attempting to kill!");
            self.process.kill().unwrap();
            for _ in 0..100 {
                if self.process.try_wait().unwrap().is_some() {
                    eprintln!("Codeblocker process killed successfully!");
                    return;
                }
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
            eprintln!("Failed to kill codeblocker process");
        }
    }
}

// Not all methods are used in all integration test files
#[allow(dead_code)]
impl Codeblocker {
    /// Runs codeblocker with the provided arguments
    pub fn run(arguments: &[&str]) -> Self {
        let process = std::process::Command::new(env!("CARGO_BIN_EXE_codeblocker"))
            .args(arguments)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .spawn()
            .expect("Should be able to run codeblocker");
        Self { process }
    }

    /// Writes to the program's stdin and closes it
    pub fn write_stdin(&mut self, text: &str) {
        let mut stdin = self
            .process
            .stdin
            .take()
            .expect("Codeblocker stdin has already been used");
        stdin
            .write_all(text.as_bytes())
            .expect("Could not write to codeblocker stdin");
    }

    /// Closes the program's stdin without writing anything
    pub fn close_stdin(&mut self) {
        drop(self.process.stdin.take());
    }

    pub fn read_stdout(&mut self) -> Result<String, std::io::Error> {
        let mut stdout = self
            .process
            .stdout
            .take()
            .expect("Codeblocker stdout has already been used");
        Self::read(&mut stdout, "stdout")
    }

    pub fn read_stderr(&mut self) -> Result<String, std::io::Error> {
        let mut stderr = self
            .process
            .stderr
            .take()
            .expect("Codeblocker stderr has already been used");
        Self::read(&mut stderr, "stderr")
    }

    /// Reads the program's stdout and checks that it matches the expected text, otherwise
    /// it returns an error
    pub fn expect_stdout(&mut self, expected_text: &str) -> Result<(), std::io::Error> {
        let read_text = self.read_stdout()?;
        if read_text == expected_text {
            Ok(())
        } else {
            Err(std::io::Error::other(format!(
                "Expected to read:\n'{expected_text}'\nfrom stdout but read:\n'{read_text}'"
            )))
        }
    }

    /// Waits for program to end and checks that nothing more can be read from its stdout and
    /// stderr
    pub fn wait(&mut self) -> std::process::ExitStatus {
        self.close_stdin();
        if let Some(mut stdout) = self.process.stdout.take() {
            let text = Self::read(&mut stdout, "stdout").unwrap();
            if !text.is_empty() {
                panic!("Nothing should be left on codeblocker stdout, but found '{text}'");
            }
        }
        if let Some(mut stderr) = self.process.stderr.take() {
            let text = Self::read(&mut stderr, "stderr").unwrap();
            if !text.is_empty() {
                panic!("Nothing should be left on codeblocker stderr, but found '{text}'");
            }
        }

        self.process
            .wait()
            .expect("Could not wait for codeblocker process to exit")
    }

    fn read<R>(reader: &mut R, reader_name: &str) -> Result<String, std::io::Error>
    where
        R: Read,
    {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap_or_else(|error| {
            panic!("Read from codeblocker {reader_name} but could not convert to UTF-8: {error}")
        }))
    }
}
