//! Intensity measure types.

use shake_common::{Error, Result};

/// A parsed intensity measure type.
///
/// Two forms are accepted: `PGA` and `SA(<period>)` with a positive finite
/// period in seconds, e.g. `SA(0.2)`. Anything else is an `InvalidImt`
/// request error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Imt {
    /// Peak ground acceleration (g).
    Pga,
    /// 5%-damped spectral acceleration at a period in seconds.
    Sa(f64),
}

impl Imt {
    pub fn parse(input: &str) -> Result<Imt> {
        let s = input.trim();
        if s == "PGA" {
            return Ok(Imt::Pga);
        }
        if let Some(inner) = s.strip_prefix("SA(").and_then(|rest| rest.strip_suffix(')')) {
            let period: f64 = inner.parse().map_err(|_| Error::InvalidImt {
                input: input.to_string(),
            })?;
            if period.is_finite() && period > 0.0 {
                return Ok(Imt::Sa(period));
            }
        }
        Err(Error::InvalidImt {
            input: input.to_string(),
        })
    }

    /// Spectral period in seconds; PGA is the zero-period limit.
    pub fn period(&self) -> f64 {
        match self {
            Imt::Pga => 0.0,
            Imt::Sa(t) => *t,
        }
    }
}

impl std::fmt::Display for Imt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Imt::Pga => write!(f, "PGA"),
            Imt::Sa(t) => write!(f, "SA({t})"),
        }
    }
}

impl std::str::FromStr for Imt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Imt> {
        Imt::parse(s)
    }
}
