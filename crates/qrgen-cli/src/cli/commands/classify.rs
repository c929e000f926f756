//! `qrgen classify <text>` – show how the input would be treated.

use anyhow::Result;
use qrgen_core::url_model::{is_likely_url, normalize_url};
use std::io::{self, Write};

pub fn run_classify(text: &str) -> Result<()> {
    write_classification(text, &mut io::stdout().lock())
}

fn write_classification(text: &str, out: &mut dyn Write) -> Result<()> {
    let likely = is_likely_url(text);
    writeln!(out, "likely-url: {}", if likely { "yes" } else { "no" })?;
    writeln!(out, "normalized: {}", normalize_url(text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> String {
        let mut out = Vec::new();
        write_classification(text, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn domain() {
        assert_eq!(
            classify("example.com"),
            "likely-url: yes\nnormalized: https://example.com\n"
        );
    }

    #[test]
    fn plain_text() {
        assert_eq!(
            classify("Hello World"),
            "likely-url: no\nnormalized: https://Hello World\n"
        );
    }
}
