//! Prompt/read helpers over generic readers and writers.
//!
//! Contract: prompts re-ask until the input is acceptable; end of input is
//! surfaced as `UnexpectedEof` so non-interactive drivers fail loudly.

use std::io::{self, BufRead, Write};

use storefront_catalog::{ProductCategory, ProductKind};

/// Read one line, trimmed. `None` at end of input.
pub fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn next_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    read_trimmed_line(reader)?
        .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed mid-prompt"))
}

/// Prompt for a non-negative integer, re-asking until one parses.
pub fn prompt_u32<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> io::Result<u32> {
    loop {
        write!(writer, "{message}: ")?;
        writer.flush()?;
        match next_line(reader)?.parse::<u32>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(writer, "Please enter a number.")?,
        }
    }
}

/// Prompt for an integer within `low..=high`, re-asking until in range.
pub fn prompt_u32_in_range<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
    low: u32,
    high: u32,
) -> io::Result<u32> {
    loop {
        let value = prompt_u32(reader, writer, message)?;
        if (low..=high).contains(&value) {
            return Ok(value);
        }
        writeln!(writer, "Please enter a number between {low} and {high}.")?;
    }
}

/// Prompt for a non-empty line, re-asking on blank input.
pub fn prompt_nonempty<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> io::Result<String> {
    loop {
        write!(writer, "{message}: ")?;
        writer.flush()?;
        let value = next_line(reader)?;
        if !value.is_empty() {
            return Ok(value);
        }
        writeln!(writer, "Input must not be empty.")?;
    }
}

/// Prompt for a product variant within a category, re-asking until the
/// input matches one of the canonical tokens exactly.
pub fn prompt_variant<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    category: ProductCategory,
) -> io::Result<ProductKind> {
    loop {
        write!(
            writer,
            "Enter the {} type you want to buy ({}): ",
            category.label().to_lowercase(),
            category.variant_choices()
        )?;
        writer.flush()?;
        match category.parse_variant(&next_line(reader)?) {
            Ok(kind) => return Ok(kind),
            Err(err) => writeln!(writer, "{err}")?,
        }
    }
}
