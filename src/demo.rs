/*!
The demonstration routine

Greets, then prints the number behind each word of a fixed list.
*/

use std::collections::HashMap;

use crate::error::DemoResult;
use crate::output::LineSink;

pub const GREETING: &str = "Hello, world!";

/// The words, in the order they are printed
pub const WORDS: [&str; 7] = ["one", "two", "three", "four", "five", "six", "seven"];

fn word_values() -> HashMap<&'static str, u32> {
    HashMap::from([
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
    ])
}

/// Write the greeting followed by one number per word
pub fn run(sink: &mut dyn LineSink) -> DemoResult<()> {
    tracing::debug!("demo starting");
    sink.write_line(GREETING)?;

    let values = word_values();
    for word in WORDS {
        // Every word has an entry
        let value = values[word];
        tracing::trace!(word, value, "printing word value");
        sink.write_line(&value.to_string())?;
    }

    sink.flush()?;
    tracing::debug!(lines = WORDS.len() + 1, "demo finished");
    Ok(())
}
