//! Interactive terminal form for the four planning parameters.

use dialoguer::{Input, theme::ColorfulTheme};

use crate::error::Result;
use crate::params::{MIN_VALUE, OptimizationParameters};

/// Prompts for every parameter, offering `current` as the defaults.
pub fn prompt(current: &OptimizationParameters) -> Result<OptimizationParameters> {
    let theme = ColorfulTheme::default();
    Ok(OptimizationParameters {
        profit_a: ask(&theme, "Profit per unit of product A", current.profit_a)?,
        profit_b: ask(&theme, "Profit per unit of product B", current.profit_b)?,
        hours_available: ask(&theme, "Machine hours available", current.hours_available)?,
        material_available: ask(&theme, "Material available (kg)", current.material_available)?,
    })
}

fn ask(theme: &ColorfulTheme, prompt: &str, default: f64) -> Result<f64> {
    let value = Input::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .validate_with(|value: &f64| check(*value))
        .interact_text()?;
    Ok(value)
}

fn check(value: f64) -> std::result::Result<(), String> {
    if value.is_finite() && value >= MIN_VALUE {
        Ok(())
    } else {
        Err(format!("must be a number of at least {MIN_VALUE}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_enforces_minimum() {
        assert!(check(1.).is_ok());
        assert!(check(250.).is_ok());
        assert!(check(0.5).is_err());
        assert!(check(f64::NAN).is_err());
    }
}
