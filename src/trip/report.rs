use crate::shared::FloorSequence;
use std::io::Write;

// Prints the end-of-session summary: the visited floors and the total travel time.
pub fn print_summary<W: Write>(
    writer: &mut W,
    floors: &FloorSequence,
    total_time: u64,
) -> std::io::Result<()> {
    writeln!(writer, "Floors visited: {}", floors)?;
    writeln!(
        writer,
        "Total time taken to travel between floors: {} seconds",
        total_time
    )?;
    Ok(())
}
