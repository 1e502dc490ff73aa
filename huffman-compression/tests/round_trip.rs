use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
    process::Command,
};

use huffman_compression::{Container, FrequencyTable, HuffmanCode};

const LOREM: &[u8] = include_bytes!("lorem.txt");

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "huffman-compression-{}-{}",
        name,
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run(args: &[&str]) {
    let status = Command::new(env!("CARGO_BIN_EXE_huffman-compression"))
        .args(args)
        .status()
        .unwrap();
    assert!(status.success(), "{args:?} exited with {status}");
}

#[test]
fn test_table_and_container_files() {
    let dir = scratch_dir("library");
    let code_path = dir.join("lorem.code");
    let short_path = dir.join("lorem.short");

    let code = HuffmanCode::from_frequencies(&FrequencyTable::from_bytes(LOREM)).unwrap();
    code.save(&mut File::create(&code_path).unwrap()).unwrap();
    code.compress(LOREM)
        .unwrap()
        .write_to(&mut File::create(&short_path).unwrap())
        .unwrap();

    let reloaded = HuffmanCode::load(BufReader::new(File::open(&code_path).unwrap()))
        .unwrap()
        .unwrap();
    let container = Container::read_from(&mut File::open(&short_path).unwrap()).unwrap();
    let mut output = Vec::new();
    reloaded.decompress(&container, &mut output).unwrap();

    assert_eq!(output, LOREM);
    assert!(fs::metadata(&short_path).unwrap().len() < LOREM.len() as u64);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_cli_round_trip() {
    let dir = scratch_dir("cli");
    let input = dir.join("lorem.txt");
    fs::write(&input, LOREM).unwrap();

    run(&["round-trip", input.to_str().unwrap()]);

    assert_eq!(fs::read(dir.join("lorem.new")).unwrap(), LOREM);
    let table = fs::read_to_string(dir.join("lorem.code")).unwrap();
    assert_eq!(table.lines().count(), 2 * FrequencyTable::from_bytes(LOREM).distinct());

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_cli_separate_steps() {
    let dir = scratch_dir("steps");
    let input = dir.join("single.txt");
    fs::write(&input, "zzzzzzzzzz").unwrap();
    let code = dir.join("single.code");
    let short = dir.join("single.short");
    let restored = dir.join("restored.txt");

    run(&["code", input.to_str().unwrap(), "-o", code.to_str().unwrap()]);
    assert_eq!(fs::read_to_string(&code).unwrap(), "122\n\n");

    run(&[
        "compress",
        input.to_str().unwrap(),
        "--code",
        code.to_str().unwrap(),
        "-o",
        short.to_str().unwrap(),
    ]);
    run(&[
        "decompress",
        short.to_str().unwrap(),
        "--code",
        code.to_str().unwrap(),
        "-o",
        restored.to_str().unwrap(),
    ]);

    assert_eq!(fs::read_to_string(&restored).unwrap(), "zzzzzzzzzz");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_cli_empty_file() {
    let dir = scratch_dir("empty");
    let input = dir.join("empty.txt");
    fs::write(&input, "").unwrap();

    run(&["round-trip", input.to_str().unwrap()]);

    assert!(fs::read(dir.join("empty.code")).unwrap().is_empty());
    assert!(fs::read(dir.join("empty.new")).unwrap().is_empty());

    fs::remove_dir_all(dir).unwrap();
}
