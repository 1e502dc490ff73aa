use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use huffman_compression::{Container, FrequencyTable, HuffmanCode};
use log::{error, info};

#[derive(Parser, Debug)]
#[command(version, about = "Huffman compression with a reloadable code table", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the code table for a file
    Code {
        input: PathBuf,
        /// Defaults to the input path with a `code` extension
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the code table and the compressed file
    Compress {
        input: PathBuf,
        #[arg(long)]
        code: Option<PathBuf>,
        /// Defaults to the input path with a `short` extension
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Restore a compressed file using its code table
    Decompress {
        input: PathBuf,
        #[arg(long)]
        code: PathBuf,
        /// Defaults to the input path with a `new` extension
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compress, decompress and check that the result matches the input
    RoundTrip { input: PathBuf },
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(args.command) {
        error!("{err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Code { input, output } => {
            let output = output.unwrap_or_else(|| input.with_extension("code"));
            let code = build_code(&input)?;
            write_table(code.as_ref(), &output)
        }
        Command::Compress {
            input,
            code,
            output,
        } => {
            let code_path = code.unwrap_or_else(|| input.with_extension("code"));
            let output = output.unwrap_or_else(|| input.with_extension("short"));
            compress(&input, &code_path, &output)
        }
        Command::Decompress {
            input,
            code,
            output,
        } => {
            let output = output.unwrap_or_else(|| input.with_extension("new"));
            decompress(&input, &code, &output)
        }
        Command::RoundTrip { input } => {
            let code_path = input.with_extension("code");
            let short_path = input.with_extension("short");
            let new_path = input.with_extension("new");

            compress(&input, &code_path, &short_path)?;
            decompress(&short_path, &code_path, &new_path)?;

            if read(&input)? != read(&new_path)? {
                bail!(
                    "{} does not match {} after decompression",
                    new_path.display(),
                    input.display()
                );
            }
            info!("round trip of {} succeeded", input.display());
            Ok(())
        }
    }
}

fn build_code(input: &Path) -> anyhow::Result<Option<HuffmanCode>> {
    let frequencies = FrequencyTable::from_reader(open(input)?)
        .with_context(|| format!("failed to read {}", input.display()))?;
    info!(
        "{}: {} bytes, {} distinct",
        input.display(),
        frequencies.total(),
        frequencies.distinct()
    );
    Ok(HuffmanCode::from_frequencies(&frequencies))
}

/// An empty input has no tree; its table is an empty file.
fn write_table(code: Option<&HuffmanCode>, output: &Path) -> anyhow::Result<()> {
    let mut writer = BufWriter::new(create(output)?);
    if let Some(code) = code {
        code.save(&mut writer)?;
    }
    writer.flush()?;
    info!("wrote code table to {}", output.display());
    Ok(())
}

fn compress(input: &Path, code_path: &Path, output: &Path) -> anyhow::Result<()> {
    let code = build_code(input)?;
    write_table(code.as_ref(), code_path)?;

    let content = read(input)?;
    let container = match &code {
        Some(code) => code.compress(&content)?,
        None => Container::default(),
    };

    let mut writer = BufWriter::new(create(output)?);
    container.write_to(&mut writer)?;
    writer.flush()?;

    info!(
        "compressed {} bytes into {} bits ({})",
        container.symbol_count,
        container.bit_count(),
        output.display()
    );
    Ok(())
}

fn decompress(input: &Path, code_path: &Path, output: &Path) -> anyhow::Result<()> {
    let code = HuffmanCode::load(BufReader::new(open(code_path)?))
        .with_context(|| format!("failed to load code table {}", code_path.display()))?;

    let container = Container::read_from(&mut BufReader::new(open(input)?))
        .with_context(|| format!("failed to read {}", input.display()))?;

    let mut writer = BufWriter::new(create(output)?);
    match code {
        Some(code) => {
            code.decompress(&container, &mut writer)?;
        }
        None if container.symbol_count == 0 => {}
        None => bail!(
            "{} holds {} symbols but {} is empty",
            input.display(),
            container.symbol_count,
            code_path.display()
        ),
    }
    writer.flush()?;

    info!(
        "decompressed {} symbols into {}",
        container.symbol_count,
        output.display()
    );
    Ok(())
}

fn open(path: &Path) -> anyhow::Result<File> {
    File::open(path).with_context(|| format!("failed to open {}", path.display()))
}

fn create(path: &Path) -> anyhow::Result<File> {
    File::create(path).with_context(|| format!("failed to create {}", path.display()))
}

fn read(path: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}
