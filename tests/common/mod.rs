#![allow(dead_code)]
use fishy::lang::Error;

pub fn compile(s: &str) -> String {
    match fishy::compile(s) {
        Ok(c) => c,
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

pub fn compile_err(s: &str) -> Error {
    match fishy::compile(s) {
        Ok(c) => panic!("{:?} compiled to:\n{}", s, c),
        Err(e) => e,
    }
}

/// The complete C text expected for the given declarations and statements.
pub fn program(decls: &[&str], body: &[&str]) -> String {
    let mut s = String::from("#include <stdio.h>\nint main(void){\n");
    for line in decls.iter().chain(body.iter()) {
        s.push_str(line);
        s.push('\n');
    }
    s.push_str("return 0;\n}\n");
    s
}

/// A scratch directory unique to this process and test.
pub fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("fishy-{}-{}", std::process::id(), name));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
