//! Handlers for the `tabi spot` subcommands.

use crate::args::CheckArgs;
use crate::commands::Out;
use crate::geo::{CliLocation, ProximityChecker};
use crate::model::SavedSpot;
use crate::trip;
use crate::Result;
use anyhow::bail;
use serde::Serialize;
use std::fmt::Write as _;

/// Lists the saved spots with their ids so they can be passed to `check`.
pub fn list_spots() -> Result<Out<Vec<SavedSpot>>> {
    let spots = trip::saved_spots();
    let mut message = String::from("Saved spots:\n");
    for spot in &spots {
        let marker = match spot.architect() {
            Some(architect) => format!(" 🏛 {architect}"),
            None => String::new(),
        };
        let _ = writeln!(message, "  {}{}\n    {}", spot.name(), marker, spot.id());
    }
    Ok(Out::new(message.trim_end().to_string(), spots))
}

/// The structured result of a proximity check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    spot_id: String,
    message: String,
}

/// Checks the distance from the current position to one saved spot.
///
/// The position comes from `--lat`/`--lon` or from `TABI_POSITION`; a missing
/// or failed position still produces a message, never a process failure.
pub async fn check_spot(args: &CheckArgs) -> Result<Out<CheckResult>> {
    let Some(spot) = trip::find_spot(args.id()) else {
        bail!(
            "Unknown spot id '{}'. Run `tabi spot list` to see the available ids.",
            args.id()
        );
    };
    let provider = CliLocation::detect(args.lat(), args.lon());
    let mut checker = ProximityChecker::new();
    let message = checker.check(&spot, &provider).await;
    Ok(Out::new(
        format!("{}: {message}", spot.name()),
        CheckResult {
            spot_id: spot.id().to_string(),
            message,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::CheckArgs;

    #[test]
    fn list_includes_every_saved_spot() {
        let out = list_spots().unwrap();
        let spots = out.structure().unwrap();
        assert_eq!(spots.len(), trip::saved_spots().len());
        assert!(out.message().contains("spot-il-palazzo"));
        assert!(out.message().contains("Aldo Rossi"));
    }

    #[tokio::test]
    async fn check_with_coordinates_classifies_the_distance() {
        let args = CheckArgs::new("spot-il-palazzo", Some(33.5900), Some(130.4015));
        let out = check_spot(&args).await.unwrap();
        let result = out.structure().unwrap();
        assert!(result.message.contains("Aldo Rossi"), "{}", result.message);
    }

    #[tokio::test]
    async fn check_of_unknown_spot_is_an_error() {
        let args = CheckArgs::new("spot-nowhere", Some(33.0), Some(130.0));
        assert!(check_spot(&args).await.is_err());
    }
}
