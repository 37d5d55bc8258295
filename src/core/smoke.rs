use crate::core::greeter::greet;
use crate::core::transform::double;
use crate::domain::model::User;
use crate::utils::error::Result;
use std::io::Write;

pub const GREETING: &str = "Hello, Kotlin syntax check!";

const USER_NAME: &str = "Hayannoon";
const USER_AGE: i32 = 29;
const NUMBERS: [i32; 5] = [1, 2, 3, 4, 5];
const WELCOME_NAME: &str = "Kotlin";

/// The four-step smoke routine. Holds only literals, so every run writes the same bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmokeCheck;

impl SmokeCheck {
    pub fn new() -> Self {
        Self
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        tracing::debug!("Step 1: greeting");
        writeln!(out, "{}", GREETING)?;

        tracing::debug!("Step 2: user record");
        let user = User::new(USER_NAME, USER_AGE);
        writeln!(out, "{}", user)?;

        tracing::debug!("Step 3: doubling {} numbers", NUMBERS.len());
        let doubled = double(&NUMBERS);
        writeln!(out, "Doubled numbers: {:?}", doubled)?;

        tracing::debug!("Step 4: welcome");
        greet(out, WELCOME_NAME)?;

        out.flush()?;
        tracing::info!("Smoke check finished");
        Ok(())
    }
}
