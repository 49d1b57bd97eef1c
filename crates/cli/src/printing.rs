use gdcx_codec::PermutationTable;
use std::io::{self, Write};

use crate::commands::compress::Report;

/// Stage-by-stage status lines on stdout, silenced by `--quiet`/`--json`.
pub struct Status {
    quiet: bool,
}

impl Status {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print `label ... ` without a newline; close it with [`Status::finish`].
    pub fn stage(&self, label: &str) -> io::Result<()> {
        if !self.quiet {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{label} ... ")?;
            stdout.flush()?;
        }
        Ok(())
    }

    /// Close the open stage with `[Done]` or `[Failed]` and pass `result` on.
    pub fn finish<T, E>(&self, result: Result<T, E>) -> Result<T, E> {
        match &result {
            Ok(_) => self.done(),
            Err(_) if !self.quiet => println!("[Failed]"),
            Err(_) => {}
        }
        result
    }

    pub fn done(&self) {
        if !self.quiet {
            println!("[Done]");
        }
    }

    pub fn line(&self, text: &str) {
        if !self.quiet {
            println!("{text}");
        }
    }
}

pub fn print_report(report: &Report) {
    let footer = &report.footer;
    println!("\n📦 Compression Summary");
    println!("  • Input: {} ({} bytes)", report.input.display(), footer.uncompressed_size);
    println!("  • Groups encoded: {}", footer.compressed_size);
    if footer.overflow_len() > 0 {
        println!(
            "  • Overflow: {} byte(s) {:?}",
            footer.overflow_len(),
            String::from_utf8_lossy(footer.overflow_bytes())
        );
    }
    if report.skipped_groups > 0 {
        println!(
            "  ⚠️  Skipped groups: {} [--on-invalid {}]",
            report.skipped_groups, report.policy
        );
    }
    println!(
        "  • Output size: {} bytes ({:.2}x)",
        report.output_bytes, report.compression_ratio
    );
    println!("Output file: {}", report.output.display());
}

pub fn print_table(table: &PermutationTable) {
    println!("🧬 Permutation Table (T=0, C=1, G=2, A=3)");
    println!("{}", "=".repeat(50));
    for (index, group) in table.iter() {
        println!("{index:>3}  {index:#04x}  {}", String::from_utf8_lossy(group));
    }
}
