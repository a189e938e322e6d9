//! Handler for `tabi convert`.

use crate::args::ConvertArgs;
use crate::commands::Out;
use crate::{Config, Result};
use serde::Serialize;

/// The result of a currency conversion.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub jpy: u64,
    pub twd: u64,
    pub rate: f64,
}

/// Converts whole yen to TWD at the configured rate, rounded to the nearest
/// dollar.
pub fn convert(config: &Config, args: &ConvertArgs) -> Result<Out<Conversion>> {
    let rate = config.exchange_rate();
    let twd = (args.jpy() as f64 * rate).round() as u64;
    let conversion = Conversion {
        jpy: args.jpy(),
        twd,
        rate,
    };
    Ok(Out::new(
        format!("¥{} ≈ NT${} (rate {})", conversion.jpy, conversion.twd, rate),
        conversion,
    ))
}
