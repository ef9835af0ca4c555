use std::io::{self, Write};

use basic_sort_rs::showcase;

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    showcase::write_report(&mut out)?;
    out.flush()
}
