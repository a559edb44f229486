//! Text for the external explanation service.
//!
//! Only the request is built here; sending it and showing the answer belong
//! to the UI, which must never let a failure reach the geometry.

use serde::Serialize;

use crate::controls::Parameter;
use crate::elements::OrbitalElements;
use crate::singularity::Singularities;

/// Shown in place of an explanation when the request fails or times out.
pub const FAILURE_MESSAGE: &str = "Sorry, an explanation could not be loaded right now. Please try again.";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExplanationRequest {
    pub parameter: Parameter,
    pub value: f64,
    pub defined: bool,
    pub prompt: String,
}

impl ExplanationRequest {
    /// Judges definedness with the default thresholds.
    pub fn new(parameter: Parameter, elements: &OrbitalElements) -> ExplanationRequest {
        ExplanationRequest::with_singularities(parameter, elements, Singularities::of(elements))
    }

    /// Uses the caller's flags, e.g. a session's latched state.
    pub fn with_singularities(
        parameter: Parameter,
        elements: &OrbitalElements,
        flags: Singularities,
    ) -> ExplanationRequest {
        let value = parameter.display_value(elements);
        let defined = parameter.is_defined(flags);
        let mut prompt = format!(
            "In two or three sentences suitable for a student, explain what it means for a \
             satellite's orbit around a central body when the {} ({}) is {}{}.",
            parameter.label().to_lowercase(),
            parameter.symbol(),
            format_value(parameter, value),
            parameter.unit(),
        );
        if !defined {
            prompt.push_str(&format!(
                " Note that the current orbit is {}, so this angle is undefined; explain why.",
                match parameter {
                    Parameter::ArgumentOfPerigee => "circular",
                    _ => "equatorial",
                }
            ));
        }
        ExplanationRequest {
            parameter,
            value,
            defined,
            prompt,
        }
    }
}

fn format_value(parameter: Parameter, value: f64) -> String {
    match parameter {
        Parameter::Eccentricity => format!("{:.2}", value),
        Parameter::SemiMajorAxis => format!("{:.1} ", value),
        _ => format!("{:.0}", value),
    }
}
