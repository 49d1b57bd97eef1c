use anyhow::{Context, Result};
use gdcx_codec::{Footer, InvalidGroupPolicy, PermutationCodec};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::args::CompressArgs;
use crate::defaults::PARTIAL_SUFFIX;
use crate::printing::{print_report, Status};
use crate::utils::{append_suffix, output_path};

/// Outcome of compressing one file.
#[derive(Debug, Serialize)]
pub struct Report {
    pub input: PathBuf,
    pub output: PathBuf,
    pub policy: InvalidGroupPolicy,
    pub footer: Footer,
    pub skipped_groups: usize,
    pub output_bytes: usize,
    pub compression_ratio: f64,
}

pub fn compress_file(input: &Path, args: &CompressArgs, quiet: bool) -> Result<()> {
    let status = Status::new(quiet || args.json);
    let output = args.output.clone().unwrap_or_else(|| output_path(input));

    status.line(&format!("\nFilename: {}", input.display()));

    status.stage("Reading genetic data")?;
    let data = status.finish(
        fs::read(input).with_context(|| format!("Failed to read input file {}", input.display())),
    )?;
    info!(bytes = data.len(), "read input");

    status.stage("Building permutation table")?;
    let codec = PermutationCodec::new(args.on_invalid).parallel(args.parallel);
    status.done();

    status.stage("Compressing")?;
    let encoded = status.finish(
        codec
            .encode_detailed(&data)
            .with_context(|| format!("Failed to encode {}", input.display()))
            .and_then(|encoded| {
                write_atomically(&output, |writer| {
                    encoded.write_to(writer)?;
                    Ok(())
                })?;
                Ok(encoded)
            }),
    )?;
    debug!(output = %output.display(), bytes = encoded.len(), "wrote output");

    let report = Report {
        input: input.to_path_buf(),
        output,
        policy: args.on_invalid,
        footer: encoded.footer,
        skipped_groups: encoded.skipped_groups,
        output_bytes: encoded.len(),
        compression_ratio: encoded.compression_ratio(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !quiet {
        print_report(&report);
    }

    Ok(())
}

/// Write through a sibling `.partial` file and rename it over `path` only
/// once every byte is flushed. The partial file is removed on failure.
fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let partial = append_suffix(path, PARTIAL_SUFFIX);

    let result = (|| -> Result<()> {
        let file = File::create(&partial)
            .with_context(|| format!("Failed opening output file {}", partial.display()))?;
        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer
            .flush()
            .with_context(|| format!("Failed writing {}", partial.display()))?;
        fs::rename(&partial, path)
            .with_context(|| format!("Failed to move output into place at {}", path.display()))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }
    result
}
