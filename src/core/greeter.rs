use crate::utils::error::Result;
use std::io::Write;

pub fn greet<W: Write>(out: &mut W, name: &str) -> Result<()> {
    writeln!(out, "Welcome, {}!", name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_kotlin() {
        let mut out = Vec::new();
        greet(&mut out, "Kotlin").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Welcome, Kotlin!\n");
    }

    #[test]
    fn test_greet_accepts_any_text() {
        let mut out = Vec::new();
        greet(&mut out, "").unwrap();
        greet(&mut out, "하얀눈").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Welcome, !\nWelcome, 하얀눈!\n"
        );
    }
}
