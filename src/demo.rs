//! Demo drivers. Both write plain text to whatever writer they are given.

use std::io::Write;

use tracing::info;

use crate::config::DemoConfig;
use crate::draw_manager::DrawManager;
use crate::error::Result;
use crate::manufacturer::Manufacturer;
use crate::phones::Phone;

pub fn run_shape_demo<W: Write>(out: &mut W) -> Result<()> {
    info!("shape demo");
    DrawManager::new().draw_all(out)
}

/// Walks the fixed index mapping 0 -> Nokia, 1 -> Samsung, 2 -> HTC.
pub fn run_phone_demo<W: Write>(out: &mut W) -> Result<()> {
    info!("phone factory demo");
    for index in 0..Manufacturer::ALL.len() {
        print_lineup(out, Manufacturer::from_index(index)?)?;
    }
    Ok(())
}

pub fn run_phone_demo_for<W: Write>(out: &mut W, manufacturers: &[Manufacturer]) -> Result<()> {
    info!(count = manufacturers.len(), "phone factory demo");
    for &maker in manufacturers {
        print_lineup(out, maker)?;
    }
    Ok(())
}

// The "Smarphone" label is kept as is.
fn print_lineup<W: Write>(out: &mut W, maker: Manufacturer) -> Result<()> {
    let factory = maker.factory();
    let smartphone = factory.create_smartphone(&format!("{maker} Smartphone"));
    let basic_phone = factory.create_basic_phone(&format!("{maker} Basic Phone"));

    writeln!(out, "Manufacturer: {maker}")?;
    writeln!(out, "Smarphone: {}", smartphone.name())?;
    writeln!(out, "Basic phone: {}", basic_phone.name())?;
    Ok(())
}

pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<()> {
    if config.shapes {
        run_shape_demo(out)?;
    }
    if config.phones {
        match &config.manufacturers {
            Some(manufacturers) => run_phone_demo_for(out, manufacturers)?,
            None => run_phone_demo(out)?,
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Vec<String> {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap().lines().map(str::to_owned).collect()
    }

    #[test]
    fn test_shape_demo_lines() {
        assert_eq!(capture(|out| run_shape_demo(out)), ["Draw Square!", "Draw Circle!"]);
    }

    #[test]
    fn test_phone_demo_lines() {
        let lines = capture(|out| run_phone_demo(out));
        assert_eq!(
            lines,
            [
                "Manufacturer: Nokia",
                "Smarphone: Nokia Smartphone",
                "Basic phone: Nokia Basic Phone",
                "Manufacturer: Samsung",
                "Smarphone: Samsung Smartphone",
                "Basic phone: Samsung Basic Phone",
                "Manufacturer: HTC",
                "Smarphone: HTC Smartphone",
                "Basic phone: HTC Basic Phone",
            ]
        );
    }

    #[test]
    fn test_fixed_lineup_matches_explicit_list() {
        let fixed = capture(|out| run_phone_demo(out));
        let explicit = capture(|out| run_phone_demo_for(out, &Manufacturer::ALL));
        assert_eq!(fixed, explicit);
        assert_eq!(fixed.len(), 9);
    }

    #[test]
    fn test_config_selects_demos() {
        let config = DemoConfig {
            shapes: false,
            phones: true,
            manufacturers: Some(vec![Manufacturer::Samsung]),
        };
        let lines = capture(|out| run(out, &config));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Manufacturer: Samsung");
    }

    #[test]
    fn test_write_failure_surfaces_as_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let err = run(&mut Closed, &DemoConfig::default()).unwrap_err();
        assert!(matches!(err, crate::error::DemoError::Io(_)));
    }
}
