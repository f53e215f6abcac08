/*!
## Rust Emitter Module

Accumulates the generated C program in two regions. The header holds the
prologue and variable declarations; the body holds translated statements.
Nothing reaches the disk until [`Emitter::write_file`] is called, which the
driver does only after a fully successful parse.

*/

use crate::error;
use crate::lang::Error;
use log::debug;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the generated C file.
pub const OUTPUT_FILE: &str = "out.c";

#[derive(Debug)]
pub struct Emitter {
    path: PathBuf,
    header: String,
    code: String,
}

impl Default for Emitter {
    fn default() -> Emitter {
        Emitter::new(OUTPUT_FILE)
    }
}

impl Emitter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Emitter {
        Emitter {
            path: path.into(),
            header: String::new(),
            code: String::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn emit(&mut self, code: &str) {
        self.code.push_str(code);
    }

    pub fn emit_line(&mut self, code: &str) {
        self.code.push_str(code);
        self.code.push('\n');
    }

    pub fn header_line(&mut self, code: &str) {
        self.header.push_str(code);
        self.header.push('\n');
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// The full program, header first.
    pub fn source(&self) -> String {
        let mut s = String::with_capacity(self.header.len() + self.code.len());
        s.push_str(&self.header);
        s.push_str(&self.code);
        s
    }

    pub fn write_file(&self) -> Result<(), Error> {
        let mut file = match File::create(&self.path) {
            Ok(file) => file,
            Err(error) => return Err(error!(DiskIoError; "{}: {}", self.path.display(), error)),
        };
        if let Err(error) = file.write_all(self.source().as_bytes()) {
            return Err(error!(DiskIoError; "{}: {}", self.path.display(), error));
        }
        debug!(
            "wrote {} header and {} body bytes to {}",
            self.header.len(),
            self.code.len(),
            self.path.display()
        );
        Ok(())
    }
}
