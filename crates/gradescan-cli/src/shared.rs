use std::io::Read;
use std::path::Path;

/// Read the whole input, treating `-` as stdin.
///
/// Errors are reported on stderr and mapped to a process exit code.
pub fn read_input(file: &Path) -> Result<String, i32> {
    if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(|e| {
            eprintln!("Error reading stdin: {e}");
            1
        })?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file).map_err(|e| {
            eprintln!("Error reading {}: {e}", file.display());
            1
        })
    }
}
