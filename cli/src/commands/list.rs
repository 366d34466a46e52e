//! The `list` command - show the Array functions.

use arrkit_core::{Loose, Package, build_array_package};

/// Run the list command.
pub fn run() {
    let package: Package<Loose> = build_array_package();
    for line in render(&package) {
        println!("{}", line);
    }
}

/// One line per function: `Name/arity`, padded, then the summary.
pub fn render(package: &Package<Loose>) -> Vec<String> {
    let signatures: Vec<String> = package
        .iter()
        .map(|function| format!("{}/{}", function.name, function.arity))
        .collect();
    let width = signatures.iter().map(String::len).max().unwrap_or(0);

    signatures
        .iter()
        .zip(package.iter())
        .map(|(signature, function)| format!("{signature:<width$}  {}", function.summary))
        .collect()
}
