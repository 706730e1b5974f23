//! Print the built-in mapping as a mapping file

use anyhow::Result;
use std::io::Write;
use transfix_core::Mapping;

/// Write the built-in rules to `writer` in the `--mapping` file format
pub fn print_defaults<W: Write>(writer: &mut W) -> Result<()> {
    let body = Mapping::defaults().to_toml_string()?;

    writeln!(writer, "# Built-in transcript corrections")?;
    writeln!(writer, "#")?;
    writeln!(
        writer,
        "# Rules apply top to bottom. Keys containing whitespace match anywhere;"
    )?;
    writeln!(writer, "# single-word keys only match whole words.")?;
    writeln!(
        writer,
        "# Pass a file like this with --mapping to add or override rules."
    )?;
    writeln!(writer)?;
    write!(writer, "{body}")?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_defaults_is_loadable() {
        let mut buffer = Vec::new();
        print_defaults(&mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("# Built-in transcript corrections"));
        assert!(output.contains("[[rule]]"));

        let parsed = Mapping::from_toml_str(&output).unwrap();
        assert_eq!(parsed, Mapping::defaults());
    }
}
