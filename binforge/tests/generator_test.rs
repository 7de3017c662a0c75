//! Full-run tests of the generator against on-disk trees.

use std::fs;
use std::path::Path;

use binforge::{Generator, GeneratorConfig, GeneratorError};
use tempfile::TempDir;

fn build_tree(root: &Path, files: &[(&str, &[u8])]) {
    for (rel, bytes) in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, bytes).unwrap();
    }
}

fn run(config: GeneratorConfig) -> binforge::GenerationSummary {
    Generator::new(config).run().unwrap()
}

#[test]
fn writes_one_module_per_file_and_a_header() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("root");
    let output = temp.path().join("out");
    build_tree(&input, &[("a/f1.bin", &[1, 2, 255]), ("b/f2.bin", &[])]);

    let mut config = GeneratorConfig::new(&input, &output);
    config.root_namespace = "Game".to_string();
    let summary = run(config);

    assert_eq!(summary.modules_written, 2);
    assert_eq!(summary.files_skipped, 0);
    assert_eq!(summary.bytes_embedded, 3);

    let module = fs::read_to_string(output.join("a").join("f1.bin.cpp")).unwrap();
    let expected = "\
// AUTOGENERATED

#include <array>
#include <cstdint>

namespace Game {
namespace a {

std::array<uint8_t, 3> f1_bin = {

    001, 002, 255

};

} // end of namespace a
} // end of namespace Game
";
    assert_eq!(module, expected);

    let empty = fs::read_to_string(output.join("b").join("f2.bin.cpp")).unwrap();
    assert!(empty.contains("std::array<uint8_t, 0> f2_bin = {"));

    let header = fs::read_to_string(output.join("bin.h")).unwrap();
    assert!(header.starts_with("// AUTOGENERATED"));
    assert!(header.contains("#pragma once"));
    assert!(header.contains("extern std::array<uint8_t, 3> f1_bin;"));
    assert!(header.contains("extern std::array<uint8_t, 0> f2_bin;"));
    assert_eq!(header.matches('{').count(), header.matches('}').count());
}

#[test]
fn header_reuses_namespaces_across_sibling_files() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("root");
    let output = temp.path().join("out");
    build_tree(
        &input,
        &[("a/x.bin", b"x"), ("a/y.bin", b"y"), ("b/z.bin", b"z")],
    );

    run(GeneratorConfig::new(&input, &output));

    let header = fs::read_to_string(output.join("bin.h")).unwrap();
    assert_eq!(header.matches("namespace a {").count(), 1);
    assert_eq!(header.matches("namespace b {").count(), 1);

    let y = header.find("extern std::array<uint8_t, 1> y;").unwrap();
    let b_open = header.find("namespace b {").unwrap();
    assert!(y < b_open, "namespace a must close after y, before b opens");
}

#[test]
fn deep_nesting_stays_balanced() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("root");
    let output = temp.path().join("out");
    build_tree(
        &input,
        &[
            ("x/y/z/deep.bin", &[9u8; 25]),
            ("x/mid.bin", b"m"),
            ("top.bin", b"t"),
        ],
    );

    run(GeneratorConfig::new(&input, &output));

    let header = fs::read_to_string(output.join("bin.h")).unwrap();
    for ns in ["x", "y", "z"] {
        assert_eq!(
            header.matches(&format!("namespace {ns} {{")).count(),
            1,
            "namespace {ns} should open exactly once"
        );
    }
    assert!(header.contains("extern std::array<uint8_t, 25> deep_bin;"));
    assert!(header.contains("extern std::array<uint8_t, 1> top_bin;"));
    assert_eq!(header.matches('{').count(), header.matches('}').count());
}

#[test]
fn empty_input_tree_still_produces_the_header() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("root");
    let output = temp.path().join("out");
    fs::create_dir_all(&input).unwrap();

    let summary = run(GeneratorConfig::new(&input, &output));

    assert_eq!(summary.modules_written, 0);
    assert!(summary.output_files.is_empty());

    let header = fs::read_to_string(output.join("bin.h")).unwrap();
    assert!(header.contains("namespace Bin {"));
    assert!(!header.contains("extern"));
    assert_eq!(header.matches('{').count(), 1);
    assert_eq!(header.matches('}').count(), 1);
}

#[test]
fn file_at_the_input_root_gets_an_empty_namespace_path() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("root");
    let output = temp.path().join("out");
    build_tree(&input, &[("logo.png", &[0, 128, 64])]);

    run(GeneratorConfig::new(&input, &output));

    let module = fs::read_to_string(output.join("logo.png.cpp")).unwrap();
    assert!(module.contains("namespace Bin {\n\nstd::array<uint8_t, 3> logo_png = {"));

    let header = fs::read_to_string(output.join("bin.h")).unwrap();
    assert!(header.contains("extern std::array<uint8_t, 3> logo_png;"));
    assert_eq!(header.matches('{').count(), 1);
}

#[test]
fn declared_lengths_match_byte_counts_at_wrap_boundaries() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("root");
    let output = temp.path().join("out");
    build_tree(
        &input,
        &[
            ("eleven.bin", &[1u8; 11] as &[u8]),
            ("twelve.bin", &[2u8; 12]),
            ("thirteen.bin", &[3u8; 13]),
        ],
    );

    run(GeneratorConfig::new(&input, &output));

    let header = fs::read_to_string(output.join("bin.h")).unwrap();
    for (name, len) in [("eleven_bin", 11), ("twelve_bin", 12), ("thirteen_bin", 13)] {
        assert!(header.contains(&format!("extern std::array<uint8_t, {len}> {name};")));
        let module =
            fs::read_to_string(output.join(format!("{}.bin.cpp", name.trim_end_matches("_bin"))))
                .unwrap();
        assert!(module.contains(&format!("std::array<uint8_t, {len}> {name} = {{")));
    }
}

#[test]
fn unusable_file_name_aborts_the_run() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("root");
    let output = temp.path().join("out");
    build_tree(&input, &[("---", b"x")]);

    let result = Generator::new(GeneratorConfig::new(&input, &output)).run();
    assert!(matches!(result, Err(GeneratorError::UnusableName { .. })));
}

#[test]
fn unusable_root_namespace_aborts_before_walking() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("root");
    let output = temp.path().join("out");
    fs::create_dir_all(&input).unwrap();

    let mut config = GeneratorConfig::new(&input, &output);
    config.root_namespace = "***".to_string();
    let result = Generator::new(config).run();
    assert!(matches!(result, Err(GeneratorError::UnusableName { .. })));
}

#[test]
fn output_paths_are_absolute_and_in_traversal_order() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("root");
    let output = temp.path().join("out");
    build_tree(&input, &[("b/late.bin", b"l"), ("a/early.bin", b"e")]);

    let summary = run(GeneratorConfig::new(&input, &output));

    assert_eq!(summary.output_files.len(), 2);
    assert!(summary.output_files.iter().all(|p| p.is_absolute()));
    assert!(summary.output_files[0].ends_with("a/early.bin.cpp"));
    assert!(summary.output_files[1].ends_with("b/late.bin.cpp"));
    assert!(summary.header_path.is_absolute());
}
