//! Build script to generate the embedded category catalog
//!
//! Reads the catalog text file and generates Rust source code with a const table.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_catalog(
        "data/categories.txt",
        &Path::new(&out_dir).join("catalog.rs"),
        "BUILTIN",
        "Built-in puzzle categories",
    );

    // Rebuild if the catalog changes
    println!("cargo:rerun-if-changed=data/categories.txt");
}

fn generate_catalog(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated category catalog").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[RawCategory] = &[").unwrap();

    let mut count = 0;
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        assert!(
            fields.len() == 5 || fields.len() == 6,
            "{input_path}:{}: expected 5 or 6 fields, got {}",
            index + 1,
            fields.len()
        );

        let words: Vec<&str> = fields[4].split(',').map(str::trim).collect();
        assert!(
            words.len() == 4,
            "{input_path}:{}: expected 4 words, got {}",
            index + 1,
            words.len()
        );

        let weight: u8 = fields[3]
            .parse()
            .unwrap_or_else(|e| panic!("{input_path}:{}: bad weight: {e}", index + 1));
        let pinned = fields.get(5).is_some_and(|flag| *flag == "pinned");

        writeln!(output, "    RawCategory {{").unwrap();
        writeln!(output, "        id: {:?},", fields[0]).unwrap();
        writeln!(output, "        name: {:?},", fields[1]).unwrap();
        writeln!(output, "        tag: {:?},", fields[2]).unwrap();
        writeln!(output, "        weight: {weight},").unwrap();
        writeln!(
            output,
            "        words: [{:?}, {:?}, {:?}, {:?}],",
            words[0], words[1], words[2], words[3]
        )
        .unwrap();
        writeln!(output, "        pinned: {pinned},").unwrap();
        writeln!(output, "    }},").unwrap();
        count += 1;
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of categories in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
