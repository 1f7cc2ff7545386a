use std::io;
use std::time::Duration;

use qoi::{OpKind, Stats};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

// Writes the human readable statistics report printed by `-v`.
pub fn write_report<W: io::Write>(stats: &Stats, elapsed: Duration, mut writer: W) -> io::Result<()> {
  writeln!(writer, "file size: {}", format_size(stats.encoded_len()))?;
  writeln!(writer, "BPP:       {:11.4}", stats.bits_per_pixel())?;
  writeln!(writer, "speed:     {:9.2} MP/s", megapixels_per_second(stats.total_pixels(), elapsed))?;
  writeln!(writer, "operator usage by number of pixels:")?;

  for kind in OpKind::ALL {
    let label = format!("{}:", kind.name());
    writeln!(writer, "    {:<14}{:6.2}%", label, stats.percent(kind))?;
  }

  Ok(())
}

fn format_size(bytes: u64) -> String {
  if bytes < KIB {
    format!("{:6} B", bytes)
  } else if bytes < MIB {
    format!("{:9.2} KiB", bytes as f64 / KIB as f64)
  } else {
    format!("{:9.2} MiB", bytes as f64 / MIB as f64)
  }
}

fn megapixels_per_second(pixels: u64, elapsed: Duration) -> f64 {
  let seconds = elapsed.as_secs_f64();

  if seconds == 0.0 {
    return 0.0;
  }

  pixels as f64 / seconds / 1_000_000.0
}
