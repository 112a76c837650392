//! Search latency reporting.

use std::io::{self, Write};
use std::time::Duration;

/// Elapsed time as fractional microseconds.
pub fn micros(elapsed: Duration) -> f64 {
    elapsed.as_nanos() as f64 / 1_000.0
}

pub fn format_timing(elapsed: Duration) -> String {
    format!("CPU time: {:.3} microseconds", micros(elapsed))
}

pub fn print_timing<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "{}", format_timing(elapsed))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn micros_keeps_fraction() {
        assert_eq!(micros(Duration::from_nanos(1_500)), 1.5);
        assert_eq!(micros(Duration::from_millis(2)), 2_000.0);
        assert_eq!(micros(Duration::ZERO), 0.0);
    }

    #[test]
    fn format_line() {
        assert_eq!(format_timing(Duration::from_nanos(12_345)), "CPU time: 12.345 microseconds");
        assert_eq!(format_timing(Duration::ZERO), "CPU time: 0.000 microseconds");
    }

    #[test]
    fn print_appends_newline() {
        let mut out = Vec::new();
        print_timing(&mut out, Duration::from_micros(7)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "CPU time: 7.000 microseconds\n");
    }
}
